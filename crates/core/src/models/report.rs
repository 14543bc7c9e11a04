use serde::{Deserialize, Serialize};

/// Savings recorded under one month label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// The label exactly as stored on the savings
    pub month: String,

    pub total_amount: f64,

    pub total_hours: f64,

    /// Number of savings in this month
    pub count: usize,
}

impl MonthlySummary {
    pub fn empty(month: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            total_amount: 0.0,
            total_hours: 0.0,
            count: 0,
        }
    }
}

/// All-time totals over every saving.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavingsTotals {
    pub total_amount: f64,
    pub total_hours: f64,
    pub count: usize,
}
