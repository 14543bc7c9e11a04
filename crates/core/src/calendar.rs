//! Jalali (Persian) calendar helpers for month labels.
//!
//! Savings are grouped by a display label such as "اسفند ۱۴۰۲". Only the
//! Gregorian → Jalali direction is needed.

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::format::locale::Locale;

/// Cumulative day counts before each Gregorian month (non-leap year).
const GREGORIAN_DAYS_BEFORE_MONTH: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// A month the user can pick in a report filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthOption {
    /// Sortable key, "YYYY-MM" in the Jalali calendar (ASCII digits)
    pub value: String,
    /// Display label, e.g. "اسفند ۱۴۰۲"
    pub label: String,
}

/// Convert a Gregorian date to `(year, month, day)` in the Jalali calendar.
///
/// `gm` must be in 1..=12; out-of-range months are clamped.
pub fn gregorian_to_jalali(gy: i32, gm: u32, gd: u32) -> (i32, u32, u32) {
    let gm = gm.clamp(1, 12);
    let gy = i64::from(gy);
    let gy2 = if gm > 2 { gy + 1 } else { gy };

    let mut days = 355_666
        + 365 * gy
        + (gy2 + 3).div_euclid(4)
        - (gy2 + 99).div_euclid(100)
        + (gy2 + 399).div_euclid(400)
        + i64::from(gd)
        + GREGORIAN_DAYS_BEFORE_MONTH[(gm - 1) as usize];

    let mut jy = -1_595 + 33 * days.div_euclid(12_053);
    days = days.rem_euclid(12_053);
    jy += 4 * days.div_euclid(1_461);
    days = days.rem_euclid(1_461);
    // The first day of a four-year cycle belongs to the current year.
    if days > 365 {
        jy += (days - 1).div_euclid(365);
        days = (days - 1).rem_euclid(365);
    }

    let (jm, jd) = if days < 186 {
        (1 + days / 31, 1 + days % 31)
    } else {
        (7 + (days - 186) / 30, 1 + (days - 186) % 30)
    };

    (jy as i32, jm as u32, jd as u32)
}

/// Label of a Jalali month, e.g. "اسفند ۱۴۰۲".
fn label(jy: i32, jm: u32, locale: Locale) -> String {
    let name = locale.month_name(jm).unwrap_or_default();
    format!("{} {}", name, locale.digits(&jy.to_string()))
}

/// Jalali month label for a Gregorian date.
pub fn month_label(date: NaiveDate, locale: Locale) -> String {
    let (jy, jm, _) = gregorian_to_jalali(date.year(), date.month(), date.day());
    label(jy, jm, locale)
}

/// Jalali month label for the calendar date of `instant` in its own time zone.
pub fn month_label_at<Tz: TimeZone>(instant: &DateTime<Tz>, locale: Locale) -> String {
    month_label(instant.date_naive(), locale)
}

/// Jalali month label for today on the device's clock.
pub fn current_month_label(locale: Locale) -> String {
    month_label_at(&Local::now(), locale)
}

/// The Jalali month containing `today` and the eleven before it, newest first.
pub fn months_for_selection(today: NaiveDate, locale: Locale) -> Vec<MonthOption> {
    let (current_jy, current_jm, _) = gregorian_to_jalali(today.year(), today.month(), today.day());

    (0..12)
        .map(|i| {
            let mut jm = current_jm as i32 - i;
            let mut jy = current_jy;
            if jm <= 0 {
                jm += 12;
                jy -= 1;
            }
            let jm = jm as u32;
            MonthOption {
                value: format!("{jy}-{jm:02}"),
                label: label(jy, jm, locale),
            }
        })
        .collect()
}

/// Turn a "YYYY-MM" month value back into its display label.
/// Returns `None` for anything that is not a valid Jalali year-month.
pub fn format_month_value(value: &str, locale: Locale) -> Option<String> {
    let (year, month) = value.trim().split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    locale.month_name(month)?;
    Some(label(year, month, locale))
}
