use crate::models::income::{Income, IncomeKind, DEFAULT_DAYS_PER_WEEK, DEFAULT_HOURS_PER_DAY};
use crate::models::schedule::WorkSchedule;
use crate::format::duration::WEEKS_PER_MONTH;

/// Derives the user's hourly rate and work schedule from their incomes.
///
/// Pure business logic, no I/O. Every function takes the income list
/// explicitly and degrades to a default instead of failing.
pub struct RateService;

impl RateService {
    pub fn new() -> Self {
        Self
    }

    /// Average hourly rate across all incomes.
    ///
    /// This is the plain mean of each income's own `amount / hours`, NOT a
    /// mean weighted by hours: a side job of 2 hours a month counts as much
    /// as a full-time salary. Incomes without positive hours are skipped.
    /// Returns exactly `0.0` when nothing contributes.
    pub fn average_hourly_rate(&self, incomes: &[Income]) -> f64 {
        let (sum, count) = incomes
            .iter()
            .filter_map(Income::hourly_rate)
            .fold((0.0, 0_usize), |(sum, count), rate| (sum + rate, count + 1));

        if count == 0 {
            return 0.0;
        }
        let average = sum / count as f64;
        if average.is_finite() {
            average
        } else {
            0.0
        }
    }

    /// Working days per week, taken from the first income (in list order)
    /// that says anything about days. Monthly and project incomes are
    /// converted with 4.33 weeks per month. Defaults to 6.
    pub fn working_days_per_week(&self, incomes: &[Income]) -> f64 {
        incomes
            .iter()
            .find_map(|income| {
                let days = match &income.kind {
                    IncomeKind::Weekly { days_per_week, .. } => *days_per_week,
                    IncomeKind::Monthly { days_per_month, .. } => {
                        (days_per_month / WEEKS_PER_MONTH).round()
                    }
                    IncomeKind::Project { avg_days, .. } => (avg_days / WEEKS_PER_MONTH).round(),
                    IncomeKind::Hourly | IncomeKind::Daily { .. } | IncomeKind::Custom { .. } => {
                        return None
                    }
                };
                (days > 0.0 && days.is_finite()).then_some(days)
            })
            .unwrap_or(DEFAULT_DAYS_PER_WEEK)
    }

    /// Working hours per day, taken from the first daily, weekly, monthly or
    /// project income. Defaults to 8.
    pub fn working_hours_per_day(&self, incomes: &[Income]) -> f64 {
        incomes
            .iter()
            .find_map(|income| {
                income
                    .kind
                    .hours_per_day()
                    .filter(|h| *h > 0.0 && h.is_finite())
            })
            .unwrap_or(DEFAULT_HOURS_PER_DAY)
    }

    /// Schedule used to express amounts as working time.
    pub fn work_schedule(&self, incomes: &[Income]) -> WorkSchedule {
        WorkSchedule::new(
            self.working_hours_per_day(incomes),
            self.working_days_per_week(incomes),
        )
    }

    /// Hours of work needed to earn `amount` at `hourly_rate`.
    /// Zero when either value is not positive.
    pub fn hours_needed(&self, amount: f64, hourly_rate: f64) -> f64 {
        if hourly_rate <= 0.0 || amount <= 0.0 || !hourly_rate.is_finite() {
            return 0.0;
        }
        let hours = amount / hourly_rate;
        if hours.is_finite() {
            hours
        } else {
            0.0
        }
    }
}

impl Default for RateService {
    fn default() -> Self {
        Self::new()
    }
}
