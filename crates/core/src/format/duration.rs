//! Turning an amount of hours into readable text.
//!
//! Two unit tables share one cascade: every unit is counted from what the
//! next coarser unit left over, then the coarsest non-zero unit is shown
//! together with at most one finer unit.
//!
//! - Working time: hours are measured against a [`WorkSchedule`]
//!   (hours per day, days per week, 4.33 weeks per month, 12 months per year).
//! - Elapsed time: plain clock time (30-day months, 365.25-day years,
//!   centuries down to seconds).

use serde::{Deserialize, Serialize};

use super::locale::{Locale, TimeUnit};
use crate::models::schedule::WorkSchedule;

/// Weeks in a month; months are approximated, not calendrical.
pub const WEEKS_PER_MONTH: f64 = 4.33;
pub const MONTHS_PER_YEAR: f64 = 12.0;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;
const SECONDS_PER_WEEK: u64 = 7 * SECONDS_PER_DAY;
const SECONDS_PER_MONTH: u64 = 30 * SECONDS_PER_DAY;
/// 365.25 days
const SECONDS_PER_YEAR: u64 = 8_766 * SECONDS_PER_HOUR;
const SECONDS_PER_CENTURY: u64 = 100 * SECONDS_PER_YEAR;

/// Result of formatting a quantity of hours as working time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingTime {
    /// Localized text, e.g. "۱ روز و ۲ ساعت کاری"
    pub text: String,
    /// The input hours, rounded to the nearest whole hour
    pub total_hours: u64,
}

/// The working-time cascade for one input, before any text is produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkingBreakdown {
    pub years: u64,
    /// Months left after whole years
    pub remainder_months: u64,
    /// Whole working months
    pub months: u64,
    /// Weeks left after whole months (rounded)
    pub remainder_weeks: u64,
    /// Whole working weeks
    pub weeks: u64,
    /// Whole days left after whole weeks
    pub remainder_days: u64,
    /// Whole working days
    pub days: u64,
    /// Hours left after whole days (not rounded)
    pub remainder_hours: f64,
}

/// Clock-time breakdown of a quantity of hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBreakdown {
    pub centuries: u64,
    pub years: u64,
    pub months: u64,
    pub weeks: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

/// One tier of a cascade: whole units at this tier, and the count carried
/// into the next finer tier.
#[derive(Debug, Clone, Copy)]
struct Step {
    unit: TimeUnit,
    count: u64,
    carry: u64,
}

/// Coarsest non-zero step, plus its carry in the next unit when non-zero.
fn select_parts(steps: &[Step]) -> Vec<(u64, TimeUnit)> {
    for (i, step) in steps.iter().enumerate() {
        if step.count == 0 {
            continue;
        }
        let mut parts = vec![(step.count, step.unit)];
        if step.carry > 0 {
            if let Some(next) = steps.get(i + 1) {
                parts.push((step.carry, next.unit));
            }
        }
        return parts;
    }
    Vec::new()
}

fn render(parts: &[(u64, TimeUnit)], locale: Locale) -> String {
    parts
        .iter()
        .map(|(count, unit)| locale.quantity(*count, *unit))
        .collect::<Vec<_>>()
        .join(locale.joiner())
}

/// Saturating float → count conversion; negatives and NaN become 0.
fn count(value: f64) -> u64 {
    if value > 0.0 {
        value as u64
    } else {
        0
    }
}

fn usable_hours(hours: f64) -> Option<f64> {
    (hours > 0.0 && hours.is_finite()).then_some(hours)
}

// ── Working time ────────────────────────────────────────────────────

/// Break `hours` down into working years, months, weeks and days.
///
/// Returns `None` for zero, negative or non-finite input.
pub fn working_breakdown(hours: f64, schedule: &WorkSchedule) -> Option<WorkingBreakdown> {
    let hours = usable_hours(hours)?;
    let schedule = WorkSchedule::new(schedule.hours_per_day, schedule.days_per_week);

    let full_days = (hours / schedule.hours_per_day).floor();
    let remainder_hours = hours - full_days * schedule.hours_per_day;

    let weeks = (full_days / schedule.days_per_week).floor();
    let remainder_days = full_days - weeks * schedule.days_per_week;

    let months = (weeks / WEEKS_PER_MONTH).floor();
    let remainder_weeks = (weeks - months * WEEKS_PER_MONTH).round();

    let years = (months / MONTHS_PER_YEAR).floor();
    let remainder_months = (months - years * MONTHS_PER_YEAR).round();

    Some(WorkingBreakdown {
        years: count(years),
        remainder_months: count(remainder_months),
        months: count(months),
        remainder_weeks: count(remainder_weeks),
        weeks: count(weeks),
        remainder_days: count(remainder_days.floor()),
        days: count(full_days),
        remainder_hours: remainder_hours.max(0.0),
    })
}

/// Express `hours` as working time under `schedule`.
///
/// ```text
/// 10 h at 8 h/day, 6 days/week  →  "1 day and 2 hours (working time)", total 10
/// ```
///
/// Never fails: zero, negative or non-finite input gives the locale's
/// zero text with a total of 0.
pub fn format_working_time(hours: f64, schedule: &WorkSchedule, locale: Locale) -> WorkingTime {
    let Some(b) = working_breakdown(hours, schedule) else {
        return WorkingTime {
            text: locale.zero_duration().to_string(),
            total_hours: 0,
        };
    };

    let rounded_hours = count(b.remainder_hours.round());
    let steps = [
        Step { unit: TimeUnit::Year, count: b.years, carry: b.remainder_months },
        Step { unit: TimeUnit::Month, count: b.months, carry: b.remainder_weeks },
        Step { unit: TimeUnit::Week, count: b.weeks, carry: b.remainder_days },
        Step { unit: TimeUnit::Day, count: b.days, carry: rounded_hours },
        Step { unit: TimeUnit::Hour, count: rounded_hours, carry: 0 },
    ];

    let parts = select_parts(&steps);
    let text = if parts.is_empty() {
        locale.under_one_hour().to_string()
    } else {
        format!("{} {}", render(&parts, locale), locale.working_qualifier())
    };

    WorkingTime {
        text,
        total_hours: count(hours.round()),
    }
}

// ── Elapsed (clock) time ────────────────────────────────────────────

/// Break `hours` down into clock units, from centuries to seconds.
///
/// The input is rounded to whole seconds first and the cascade is done in
/// integers, so the parts always add back up to that rounded value.
pub fn elapsed_breakdown(hours: f64) -> TimeBreakdown {
    let Some(hours) = usable_hours(hours) else {
        return TimeBreakdown::default();
    };

    let mut rest = count((hours * SECONDS_PER_HOUR as f64).round());
    let mut take = |size: u64| {
        let n = rest / size;
        rest -= n * size;
        n
    };

    TimeBreakdown {
        centuries: take(SECONDS_PER_CENTURY),
        years: take(SECONDS_PER_YEAR),
        months: take(SECONDS_PER_MONTH),
        weeks: take(SECONDS_PER_WEEK),
        days: take(SECONDS_PER_DAY),
        hours: take(SECONDS_PER_HOUR),
        minutes: take(SECONDS_PER_MINUTE),
        seconds: take(1),
    }
}

fn elapsed_steps(b: &TimeBreakdown) -> [Step; 8] {
    [
        Step { unit: TimeUnit::Century, count: b.centuries, carry: b.years },
        Step { unit: TimeUnit::Year, count: b.years, carry: b.months },
        Step { unit: TimeUnit::Month, count: b.months, carry: b.weeks },
        Step { unit: TimeUnit::Week, count: b.weeks, carry: b.days },
        Step { unit: TimeUnit::Day, count: b.days, carry: b.hours },
        Step { unit: TimeUnit::Hour, count: b.hours, carry: b.minutes },
        Step { unit: TimeUnit::Minute, count: b.minutes, carry: b.seconds },
        Step { unit: TimeUnit::Second, count: b.seconds, carry: 0 },
    ]
}

/// Express `hours` as clock time, e.g. "۲ سال و ۳ ماه".
pub fn format_elapsed(hours: f64, locale: Locale) -> String {
    if usable_hours(hours).is_none() {
        return locale.zero_duration().to_string();
    }

    let parts = select_parts(&elapsed_steps(&elapsed_breakdown(hours)));
    if parts.is_empty() {
        locale.under_one_second().to_string()
    } else {
        render(&parts, locale)
    }
}

/// Every non-zero clock unit from centuries to hours, separated by commas.
/// Minutes are listed only when there are no days and no years.
pub fn detailed_breakdown(hours: f64, locale: Locale) -> String {
    let b = elapsed_breakdown(hours);
    let mut parts: Vec<(u64, TimeUnit)> = elapsed_steps(&b)
        .iter()
        .take_while(|s| s.unit != TimeUnit::Minute)
        .filter(|s| s.count > 0)
        .map(|s| (s.count, s.unit))
        .collect();

    if b.minutes > 0 && b.days == 0 && b.years == 0 {
        parts.push((b.minutes, TimeUnit::Minute));
    }

    parts
        .iter()
        .map(|(n, unit)| locale.quantity(*n, *unit))
        .collect::<Vec<_>>()
        .join(locale.list_separator())
}
