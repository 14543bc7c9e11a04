use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hours per working day when none (or a non-positive value) is given.
pub const DEFAULT_HOURS_PER_DAY: f64 = 8.0;
/// Working days per week when none is given.
pub const DEFAULT_DAYS_PER_WEEK: f64 = 6.0;
/// Working days per month when none is given.
pub const DEFAULT_DAYS_PER_MONTH: f64 = 26.0;
/// Average working days of a project when none is given.
pub const DEFAULT_PROJECT_DAYS: f64 = 26.0;
/// Hours to finish one custom unit when none is given.
pub const DEFAULT_HOURS_PER_UNIT: f64 = 1.0;

fn positive_or(value: f64, default: f64) -> f64 {
    if value > 0.0 && value.is_finite() {
        value
    } else {
        default
    }
}

/// How an income is earned. Each variant carries exactly the schedule
/// fields needed to turn its `amount` into an amount per hour.
///
/// Use the constructors (`IncomeKind::daily(..)`, ...) rather than the
/// variants directly: they replace non-positive inputs with defaults so
/// that the derived hours are always positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum IncomeKind {
    /// `amount` is the pay for one hour.
    Hourly,
    /// `amount` is the pay for one working day.
    Daily { hours_per_day: f64 },
    /// `amount` is the pay for one working week.
    Weekly { days_per_week: f64, hours_per_day: f64 },
    /// `amount` is the pay for one month.
    Monthly { days_per_month: f64, hours_per_day: f64 },
    /// `amount` is the average monthly income from projects.
    Project { avg_days: f64, hours_per_day: f64 },
    /// `amount` is the pay for one user-defined unit (e.g. one video clip).
    Custom { title: String, hours_per_unit: f64 },
}

impl IncomeKind {
    pub fn hourly() -> Self {
        IncomeKind::Hourly
    }

    pub fn daily(hours_per_day: f64) -> Self {
        IncomeKind::Daily {
            hours_per_day: positive_or(hours_per_day, DEFAULT_HOURS_PER_DAY),
        }
    }

    pub fn weekly(days_per_week: f64, hours_per_day: f64) -> Self {
        IncomeKind::Weekly {
            days_per_week: positive_or(days_per_week, DEFAULT_DAYS_PER_WEEK),
            hours_per_day: positive_or(hours_per_day, DEFAULT_HOURS_PER_DAY),
        }
    }

    pub fn monthly(days_per_month: f64, hours_per_day: f64) -> Self {
        IncomeKind::Monthly {
            days_per_month: positive_or(days_per_month, DEFAULT_DAYS_PER_MONTH),
            hours_per_day: positive_or(hours_per_day, DEFAULT_HOURS_PER_DAY),
        }
    }

    pub fn project(avg_days: f64, hours_per_day: f64) -> Self {
        IncomeKind::Project {
            avg_days: positive_or(avg_days, DEFAULT_PROJECT_DAYS),
            hours_per_day: positive_or(hours_per_day, DEFAULT_HOURS_PER_DAY),
        }
    }

    pub fn custom(title: impl Into<String>, hours_per_unit: f64) -> Self {
        IncomeKind::Custom {
            title: title.into().trim().to_string(),
            hours_per_unit: positive_or(hours_per_unit, DEFAULT_HOURS_PER_UNIT),
        }
    }

    /// Total working hours that one `amount` of this income pays for.
    pub fn hours(&self) -> f64 {
        match self {
            IncomeKind::Hourly => 1.0,
            IncomeKind::Daily { hours_per_day } => *hours_per_day,
            IncomeKind::Weekly {
                days_per_week,
                hours_per_day,
            } => days_per_week * hours_per_day,
            IncomeKind::Monthly {
                days_per_month,
                hours_per_day,
            } => days_per_month * hours_per_day,
            IncomeKind::Project {
                avg_days,
                hours_per_day,
            } => avg_days * hours_per_day,
            IncomeKind::Custom { hours_per_unit, .. } => *hours_per_unit,
        }
    }

    /// The explicit hours-per-day field, for kinds that declare one.
    pub fn hours_per_day(&self) -> Option<f64> {
        match self {
            IncomeKind::Daily { hours_per_day }
            | IncomeKind::Weekly { hours_per_day, .. }
            | IncomeKind::Monthly { hours_per_day, .. }
            | IncomeKind::Project { hours_per_day, .. } => Some(*hours_per_day),
            IncomeKind::Hourly | IncomeKind::Custom { .. } => None,
        }
    }

    /// Stable lowercase tag, identical to the serialized `type` field.
    pub fn type_name(&self) -> &'static str {
        match self {
            IncomeKind::Hourly => "hourly",
            IncomeKind::Daily { .. } => "daily",
            IncomeKind::Weekly { .. } => "weekly",
            IncomeKind::Monthly { .. } => "monthly",
            IncomeKind::Project { .. } => "project",
            IncomeKind::Custom { .. } => "custom",
        }
    }
}

impl std::fmt::Display for IncomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// A user-declared income. Lives only on the device; it is never replicated.
///
/// `hours` is derived from `kind` when the income is built, so
/// `amount / hours` is the income's implied hourly rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    /// Unique within the user's income list
    pub id: Uuid,

    /// Pay for one unit of `kind` (hour, day, week, month, project month, custom unit)
    pub amount: f64,

    /// Hours that `amount` corresponds to
    pub hours: f64,

    #[serde(flatten)]
    pub kind: IncomeKind,
}

impl Income {
    pub fn new(amount: f64, kind: IncomeKind) -> Self {
        Self::with_id(Uuid::new_v4(), amount, kind)
    }

    /// Build an income with a caller-supplied identifier.
    pub fn with_id(id: Uuid, amount: f64, kind: IncomeKind) -> Self {
        let hours = kind.hours();
        Self {
            id,
            amount,
            hours,
            kind,
        }
    }

    /// `amount / hours`, or `None` when the record has no usable hours.
    pub fn hourly_rate(&self) -> Option<f64> {
        if self.hours > 0.0 {
            let rate = self.amount / self.hours;
            rate.is_finite().then_some(rate)
        } else {
            None
        }
    }
}
