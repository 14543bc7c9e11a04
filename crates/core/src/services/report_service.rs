use std::collections::HashMap;

use crate::models::report::{MonthlySummary, SavingsTotals};
use crate::models::saving::Saving;

/// Aggregates savings for the reports screen.
///
/// Month labels are compared as exact strings; they are never parsed.
pub struct ReportService;

impl ReportService {
    pub fn new() -> Self {
        Self
    }

    /// One summary per month label, in the order each label first appears.
    pub fn monthly_summaries(&self, savings: &[Saving]) -> Vec<MonthlySummary> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut summaries: Vec<MonthlySummary> = Vec::new();

        for saving in savings {
            let idx = *index.entry(saving.month.as_str()).or_insert_with(|| {
                summaries.push(MonthlySummary::empty(saving.month.clone()));
                summaries.len() - 1
            });
            let summary = &mut summaries[idx];
            summary.total_amount += saving.amount;
            summary.total_hours += saving.hours;
            summary.count += 1;
        }

        summaries
    }

    /// Summary of a single month; all zeros when nothing was saved under `month`.
    pub fn summary_for_month(&self, savings: &[Saving], month: &str) -> MonthlySummary {
        savings
            .iter()
            .filter(|s| s.month == month)
            .fold(MonthlySummary::empty(month), |mut summary, saving| {
                summary.total_amount += saving.amount;
                summary.total_hours += saving.hours;
                summary.count += 1;
                summary
            })
    }

    /// Totals over every saving.
    pub fn totals(&self, savings: &[Saving]) -> SavingsTotals {
        savings.iter().fold(SavingsTotals::default(), |mut totals, saving| {
            totals.total_amount += saving.amount;
            totals.total_hours += saving.hours;
            totals.count += 1;
            totals
        })
    }
}

impl Default for ReportService {
    fn default() -> Self {
        Self::new()
    }
}
