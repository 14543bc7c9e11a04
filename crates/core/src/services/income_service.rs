use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::income::{Income, IncomeKind};
use crate::models::profile::Profile;

/// Manages the user's income list inside the local profile.
///
/// Entry validation lives here; the income model itself only applies
/// defaults and never rejects.
pub struct IncomeService;

impl IncomeService {
    pub fn new() -> Self {
        Self
    }

    /// Append an income, keeping entry order.
    pub fn add_income(&self, profile: &mut Profile, income: Income) -> Result<(), CoreError> {
        self.validate(income.amount, &income.kind)?;
        if profile.incomes.iter().any(|i| i.id == income.id) {
            return Err(CoreError::ValidationError(format!(
                "An income with id {} already exists",
                income.id
            )));
        }
        profile.incomes.push(income);
        Ok(())
    }

    /// Replace the amount and kind of an existing income. The id and the
    /// position in the list are kept; `hours` is derived again.
    pub fn update_income(
        &self,
        profile: &mut Profile,
        income_id: Uuid,
        amount: f64,
        kind: IncomeKind,
    ) -> Result<(), CoreError> {
        self.validate(amount, &kind)?;
        let income = profile
            .incomes
            .iter_mut()
            .find(|i| i.id == income_id)
            .ok_or_else(|| CoreError::IncomeNotFound(income_id.to_string()))?;
        *income = Income::with_id(income_id, amount, kind);
        Ok(())
    }

    /// Remove an income by id and return it.
    pub fn remove_income(&self, profile: &mut Profile, income_id: Uuid) -> Result<Income, CoreError> {
        let idx = profile
            .incomes
            .iter()
            .position(|i| i.id == income_id)
            .ok_or_else(|| CoreError::IncomeNotFound(income_id.to_string()))?;
        Ok(profile.incomes.remove(idx))
    }

    /// Rules:
    /// - Amount must be a positive number
    /// - A custom income needs a title
    fn validate(&self, amount: f64, kind: &IncomeKind) -> Result<(), CoreError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(CoreError::ValidationError(
                "Income amount must be positive".into(),
            ));
        }
        if let IncomeKind::Custom { title, .. } = kind {
            if title.trim().is_empty() {
                return Err(CoreError::ValidationError(
                    "A custom income needs a title".into(),
                ));
            }
        }
        Ok(())
    }
}

impl Default for IncomeService {
    fn default() -> Self {
        Self::new()
    }
}
