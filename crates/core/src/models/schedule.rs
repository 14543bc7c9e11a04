use serde::{Deserialize, Serialize};

use super::income::{DEFAULT_DAYS_PER_WEEK, DEFAULT_HOURS_PER_DAY};

/// The user's working pattern, used to express hours as working days,
/// weeks, months and years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkSchedule {
    pub hours_per_day: f64,
    pub days_per_week: f64,
}

impl WorkSchedule {
    /// Non-positive or non-finite values fall back to 8 hours / 6 days.
    pub fn new(hours_per_day: f64, days_per_week: f64) -> Self {
        let hours_per_day = if hours_per_day > 0.0 && hours_per_day.is_finite() {
            hours_per_day
        } else {
            DEFAULT_HOURS_PER_DAY
        };
        let days_per_week = if days_per_week > 0.0 && days_per_week.is_finite() {
            days_per_week
        } else {
            DEFAULT_DAYS_PER_WEEK
        };
        Self {
            hours_per_day,
            days_per_week,
        }
    }
}

impl Default for WorkSchedule {
    fn default() -> Self {
        Self {
            hours_per_day: DEFAULT_HOURS_PER_DAY,
            days_per_week: DEFAULT_DAYS_PER_WEEK,
        }
    }
}
