pub mod calendar;
pub mod errors;
pub mod format;
pub mod models;
pub mod remote;
pub mod services;
pub mod storage;

use chrono::NaiveDate;
use format::duration::{self, WorkingTime};
use format::locale::Locale;
use models::{
    income::{Income, IncomeKind},
    profile::Profile,
    report::{MonthlySummary, SavingsTotals},
    saving::Saving,
    schedule::WorkSchedule,
    session::Session,
    settings::Settings,
};
use remote::traits::SavingsRemote;
use services::{
    income_service::IncomeService, rate_service::RateService, report_service::ReportService,
    sync_service::SyncService,
};
use storage::manager::StorageManager;
use tracing::info;
use uuid::Uuid;

use errors::CoreError;

/// Main entry point for the Work Hours core library.
/// Holds the local profile and all services needed to operate on it.
#[must_use]
pub struct WorkHoursTracker {
    profile: Profile,
    income_service: IncomeService,
    rate_service: RateService,
    report_service: ReportService,
    sync_service: SyncService,
    /// Tracks whether any mutation has occurred since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for WorkHoursTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkHoursTracker")
            .field("incomes", &self.profile.incomes.len())
            .field("savings", &self.profile.savings.len())
            .field("pending", &self.profile.pending.len())
            .field("settings", &self.profile.settings)
            .field("signed_in", &self.profile.session.is_some())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl WorkHoursTracker {
    /// Create a brand new empty profile with default settings.
    pub fn create_new() -> Self {
        Self::build(Profile::default())
    }

    /// Load a profile from bytes previously produced by [`Self::save_to_bytes`].
    pub fn load_from_bytes(data: &[u8]) -> Result<Self, CoreError> {
        let profile = StorageManager::load_from_bytes(data)?;
        Ok(Self::build(profile))
    }

    /// Serialize the profile. Clears the unsaved-changes flag on success.
    pub fn save_to_bytes(&mut self) -> Result<Vec<u8>, CoreError> {
        let bytes = StorageManager::save_to_bytes(&self.profile)?;
        self.dirty = false;
        Ok(bytes)
    }

    /// Load from a file on disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<Self, CoreError> {
        let profile = StorageManager::load_from_file(path)?;
        Ok(Self::build(profile))
    }

    /// Save to a file on disk (native only, not WASM).
    /// Clears the unsaved-changes flag on success.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(&mut self, path: &str) -> Result<(), CoreError> {
        StorageManager::save_to_file(&self.profile, path)?;
        self.dirty = false;
        Ok(())
    }

    /// Returns `true` if the profile has been modified since the last save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Onboarding ──────────────────────────────────────────────────

    #[must_use]
    pub fn is_onboarded(&self) -> bool {
        self.profile.onboarded
    }

    pub fn set_onboarded(&mut self, onboarded: bool) {
        if self.profile.onboarded != onboarded {
            self.profile.onboarded = onboarded;
            self.dirty = true;
        }
    }

    // ── Income Management ───────────────────────────────────────────

    /// Add an income. Non-positive schedule fields in `kind` are replaced
    /// with defaults; a non-positive amount is rejected.
    pub fn add_income(&mut self, amount: f64, kind: IncomeKind) -> Result<Uuid, CoreError> {
        let income = Income::new(amount, kind);
        let id = income.id;
        self.income_service.add_income(&mut self.profile, income)?;
        self.dirty = true;
        Ok(id)
    }

    /// Update the amount and kind of an existing income.
    pub fn update_income(
        &mut self,
        income_id: Uuid,
        amount: f64,
        kind: IncomeKind,
    ) -> Result<(), CoreError> {
        self.income_service
            .update_income(&mut self.profile, income_id, amount, kind)?;
        self.dirty = true;
        Ok(())
    }

    /// Remove an income by its ID and return it.
    pub fn remove_income(&mut self, income_id: Uuid) -> Result<Income, CoreError> {
        let removed = self.income_service.remove_income(&mut self.profile, income_id)?;
        self.dirty = true;
        Ok(removed)
    }

    #[must_use]
    pub fn get_income(&self, income_id: Uuid) -> Option<&Income> {
        self.profile.incomes.iter().find(|i| i.id == income_id)
    }

    /// All incomes, in entry order.
    #[must_use]
    pub fn get_incomes(&self) -> &[Income] {
        &self.profile.incomes
    }

    // ── Rate & Working Time ─────────────────────────────────────────

    /// Unweighted mean of every income's hourly rate; 0 with no usable income.
    #[must_use]
    pub fn average_hourly_rate(&self) -> f64 {
        self.rate_service.average_hourly_rate(&self.profile.incomes)
    }

    /// Work schedule derived from the first incomes that declare one.
    #[must_use]
    pub fn work_schedule(&self) -> WorkSchedule {
        self.rate_service.work_schedule(&self.profile.incomes)
    }

    /// Hours of work needed to earn `amount` at the current average rate.
    #[must_use]
    pub fn hours_needed(&self, amount: f64) -> f64 {
        self.rate_service
            .hours_needed(amount, self.average_hourly_rate())
    }

    /// What `amount` costs in working time, e.g. "۳ روز و ۲ ساعت کاری".
    #[must_use]
    pub fn price_in_work_time(&self, amount: f64) -> WorkingTime {
        self.format_working_time(self.hours_needed(amount))
    }

    /// Format a number of hours as working time under the derived schedule.
    #[must_use]
    pub fn format_working_time(&self, hours: f64) -> WorkingTime {
        duration::format_working_time(hours, &self.work_schedule(), self.locale())
    }

    /// Format a number of hours as clock time (centuries down to seconds).
    #[must_use]
    pub fn format_elapsed(&self, hours: f64) -> String {
        duration::format_elapsed(hours, self.locale())
    }

    /// Format a money amount in the current locale, e.g. "۱۲,۵۰۰ تومان".
    #[must_use]
    pub fn format_currency(&self, amount: f64) -> String {
        format::digits::format_currency(amount, self.locale())
    }

    // ── Savings ─────────────────────────────────────────────────────

    /// Record that `amount` was not spent, labelled with the current month.
    ///
    /// The saving is stored locally and, when signed in, queued for
    /// replication (see [`Self::sync_pending`]).
    pub fn record_saving(&mut self, amount: f64) -> Result<Saving, CoreError> {
        let month = calendar::current_month_label(self.locale());
        self.record_saving_with_label(amount, month)
    }

    /// Same as [`Self::record_saving`], labelled with the month of `date`.
    pub fn record_saving_at(&mut self, amount: f64, date: NaiveDate) -> Result<Saving, CoreError> {
        let month = calendar::month_label(date, self.locale());
        self.record_saving_with_label(amount, month)
    }

    /// Record a saving and try to send it right away. If sending fails it
    /// stays queued; the local record is kept either way.
    pub async fn record_saving_online(
        &mut self,
        amount: f64,
        remote: &dyn SavingsRemote,
    ) -> Result<Saving, CoreError> {
        let month = calendar::current_month_label(self.locale());
        let saving = self.new_saving(amount, month)?;
        self.profile.savings.push(saving.clone());
        self.dirty = true;
        self.sync_service
            .replicate_new(&mut self.profile, remote, &saving)
            .await;
        Ok(saving)
    }

    /// Delete a saving locally (and from the replication queue).
    pub fn remove_saving(&mut self, saving_id: Uuid) -> Result<Saving, CoreError> {
        let idx = self
            .profile
            .savings
            .iter()
            .position(|s| s.id == saving_id)
            .ok_or_else(|| CoreError::SavingNotFound(saving_id.to_string()))?;
        let removed = self.profile.savings.remove(idx);
        self.profile.pending.retain(|s| s.id != saving_id);
        self.dirty = true;
        Ok(removed)
    }

    /// All savings, oldest first.
    #[must_use]
    pub fn get_savings(&self) -> &[Saving] {
        &self.profile.savings
    }

    /// Savings recorded under exactly this month label.
    #[must_use]
    pub fn get_savings_for_month(&self, month: &str) -> Vec<&Saving> {
        self.profile
            .savings
            .iter()
            .filter(|s| s.month == month)
            .collect()
    }

    /// Savings still waiting to be sent to the server.
    #[must_use]
    pub fn pending_savings(&self) -> &[Saving] {
        &self.profile.pending
    }

    // ── Reports ─────────────────────────────────────────────────────

    #[must_use]
    pub fn monthly_summaries(&self) -> Vec<MonthlySummary> {
        self.report_service.monthly_summaries(&self.profile.savings)
    }

    #[must_use]
    pub fn summary_for_month(&self, month: &str) -> MonthlySummary {
        self.report_service
            .summary_for_month(&self.profile.savings, month)
    }

    #[must_use]
    pub fn savings_totals(&self) -> SavingsTotals {
        self.report_service.totals(&self.profile.savings)
    }

    /// The report month picker: the month of `today` and the 11 before it.
    #[must_use]
    pub fn months_for_selection(&self, today: NaiveDate) -> Vec<calendar::MonthOption> {
        calendar::months_for_selection(today, self.locale())
    }

    /// Export all savings as a JSON string.
    pub fn export_savings_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.profile.savings)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize savings to JSON: {e}")))
    }

    // ── Session ─────────────────────────────────────────────────────

    /// Store the session handed over by the auth service.
    pub fn sign_in(&mut self, session: Session) {
        info!(user = %session.username, "signed in");
        self.profile.session = Some(session);
        self.dirty = true;
    }

    /// Forget the session and every local record. Only the onboarding flag
    /// and the settings survive.
    pub fn sign_out(&mut self) {
        info!("signed out, local data cleared");
        let settings = std::mem::take(&mut self.profile.settings);
        self.profile = Profile {
            onboarded: true,
            settings,
            ..Profile::default()
        };
        self.dirty = true;
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.profile.session.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.profile.session.is_some()
    }

    // ── Replication ─────────────────────────────────────────────────

    /// Send every queued saving. Returns how many were sent; the queue is
    /// kept if the server does not accept the batch.
    pub async fn sync_pending(&mut self, remote: &dyn SavingsRemote) -> Result<usize, CoreError> {
        let sent = self
            .sync_service
            .flush_pending(&mut self.profile, remote)
            .await?;
        if sent > 0 {
            self.dirty = true;
        }
        Ok(sent)
    }

    /// Replace local savings with the server's list.
    pub async fn pull_savings(&mut self, remote: &dyn SavingsRemote) -> Result<usize, CoreError> {
        let count = self.sync_service.pull(&mut self.profile, remote).await?;
        self.dirty = true;
        Ok(count)
    }

    /// Flush the queue, then pull the server's list.
    pub async fn initial_sync(&mut self, remote: &dyn SavingsRemote) -> Result<usize, CoreError> {
        let count = self
            .sync_service
            .initial_sync(&mut self.profile, remote)
            .await?;
        self.dirty = true;
        Ok(count)
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn get_settings(&self) -> &Settings {
        &self.profile.settings
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.profile.settings.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        if self.profile.settings.locale != locale {
            self.profile.settings.locale = locale;
            self.dirty = true;
        }
    }

    /// Set or clear the replication server. The URL must use http or https.
    pub fn set_server_url(&mut self, url: Option<String>) -> Result<(), CoreError> {
        let url = url.map(|u| u.trim().trim_end_matches('/').to_string());
        if let Some(u) = &url {
            if !(u.starts_with("https://") || u.starts_with("http://")) || u.contains(char::is_whitespace) {
                return Err(CoreError::ValidationError(format!(
                    "Invalid server URL '{u}': must start with http:// or https://"
                )));
            }
        }
        self.profile.settings.server_url = url;
        self.dirty = true;
        Ok(())
    }

    // ── Internal ────────────────────────────────────────────────────

    fn record_saving_with_label(&mut self, amount: f64, month: String) -> Result<Saving, CoreError> {
        let saving = self.new_saving(amount, month)?;
        self.profile.savings.push(saving.clone());
        if self.profile.session.is_some() {
            self.sync_service.enqueue(&mut self.profile, saving.clone());
        }
        self.dirty = true;
        Ok(saving)
    }

    fn new_saving(&self, amount: f64, month: String) -> Result<Saving, CoreError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(CoreError::ValidationError(
                "Saving amount must be positive".into(),
            ));
        }
        let hours = self.hours_needed(amount);
        if hours <= 0.0 {
            return Err(CoreError::ValidationError(
                "Cannot record a saving without an hourly rate; add an income first".into(),
            ));
        }
        Ok(Saving::new(amount, hours, month))
    }

    fn build(profile: Profile) -> Self {
        Self {
            profile,
            income_service: IncomeService::new(),
            rate_service: RateService::new(),
            report_service: ReportService::new(),
            sync_service: SyncService::new(),
            dirty: false,
        }
    }
}
