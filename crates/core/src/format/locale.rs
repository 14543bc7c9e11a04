use serde::{Deserialize, Serialize};

use super::digits::to_persian_digits;

/// Units used when spelling out a duration, coarsest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Century,
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

/// Language of every string the library produces.
///
/// Persian is the product language; English exists for logs, tests and
/// non-Persian front ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Persian,
    English,
}

const PERSIAN_MONTHS: [&str; 12] = [
    "فروردین", "اردیبهشت", "خرداد", "تیر", "مرداد", "شهریور",
    "مهر", "آبان", "آذر", "دی", "بهمن", "اسفند",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "Farvardin", "Ordibehesht", "Khordad", "Tir", "Mordad", "Shahrivar",
    "Mehr", "Aban", "Azar", "Dey", "Bahman", "Esfand",
];

impl Locale {
    /// Rewrites ASCII digits into this locale's digit script.
    pub fn digits(&self, text: &str) -> String {
        match self {
            Locale::Persian => to_persian_digits(text),
            Locale::English => text.to_string(),
        }
    }

    pub fn number(&self, n: u64) -> String {
        self.digits(&n.to_string())
    }

    pub fn unit_name(&self, unit: TimeUnit, count: u64) -> &'static str {
        match self {
            Locale::Persian => match unit {
                TimeUnit::Century => "قرن",
                TimeUnit::Year => "سال",
                TimeUnit::Month => "ماه",
                TimeUnit::Week => "هفته",
                TimeUnit::Day => "روز",
                TimeUnit::Hour => "ساعت",
                TimeUnit::Minute => "دقیقه",
                TimeUnit::Second => "ثانیه",
            },
            Locale::English => {
                let one = count == 1;
                match unit {
                    TimeUnit::Century if one => "century",
                    TimeUnit::Century => "centuries",
                    TimeUnit::Year if one => "year",
                    TimeUnit::Year => "years",
                    TimeUnit::Month if one => "month",
                    TimeUnit::Month => "months",
                    TimeUnit::Week if one => "week",
                    TimeUnit::Week => "weeks",
                    TimeUnit::Day if one => "day",
                    TimeUnit::Day => "days",
                    TimeUnit::Hour if one => "hour",
                    TimeUnit::Hour => "hours",
                    TimeUnit::Minute if one => "minute",
                    TimeUnit::Minute => "minutes",
                    TimeUnit::Second if one => "second",
                    TimeUnit::Second => "seconds",
                }
            }
        }
    }

    /// "۳ هفته" / "3 weeks"
    pub fn quantity(&self, count: u64, unit: TimeUnit) -> String {
        format!("{} {}", self.number(count), self.unit_name(unit, count))
    }

    /// Joins the two parts of a duration ("۱ روز و ۲ ساعت").
    pub fn joiner(&self) -> &'static str {
        match self {
            Locale::Persian => " و ",
            Locale::English => " and ",
        }
    }

    /// Separator for longer lists of units.
    pub fn list_separator(&self) -> &'static str {
        match self {
            Locale::Persian => "، ",
            Locale::English => ", ",
        }
    }

    /// Marks a duration as measured in working time rather than calendar time.
    pub fn working_qualifier(&self) -> &'static str {
        match self {
            Locale::Persian => "کاری",
            Locale::English => "(working time)",
        }
    }

    pub fn zero_duration(&self) -> &'static str {
        match self {
            Locale::Persian => "۰ ثانیه",
            Locale::English => "0 seconds",
        }
    }

    pub fn under_one_hour(&self) -> &'static str {
        match self {
            Locale::Persian => "کمتر از ۱ ساعت",
            Locale::English => "less than 1 hour",
        }
    }

    pub fn under_one_second(&self) -> &'static str {
        match self {
            Locale::Persian => "کمتر از یک ثانیه",
            Locale::English => "less than 1 second",
        }
    }

    pub fn currency_unit(&self) -> &'static str {
        match self {
            Locale::Persian => "تومان",
            Locale::English => "toman",
        }
    }

    /// Name of a Jalali month, `month` in 1..=12.
    pub fn month_name(&self, month: u32) -> Option<&'static str> {
        let idx = usize::try_from(month).ok()?.checked_sub(1)?;
        match self {
            Locale::Persian => PERSIAN_MONTHS.get(idx).copied(),
            Locale::English => ENGLISH_MONTHS.get(idx).copied(),
        }
    }
}
