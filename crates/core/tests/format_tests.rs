// ═══════════════════════════════════════════════════════════════════
// Format Tests — digits, working-time and elapsed-time formatting,
// Jalali calendar labels
// ═══════════════════════════════════════════════════════════════════

use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use workhours_core::calendar::{
    format_month_value, gregorian_to_jalali, month_label, month_label_at, months_for_selection,
};
use workhours_core::format::digits::{
    format_currency, format_number, parse_persian_number, to_english_digits, to_persian_digits,
};
use workhours_core::format::duration::{
    detailed_breakdown, elapsed_breakdown, format_elapsed, format_working_time, working_breakdown,
    TimeBreakdown,
};
use workhours_core::format::locale::{Locale, TimeUnit};
use workhours_core::models::schedule::WorkSchedule;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn en(hours: f64) -> String {
    format_working_time(hours, &WorkSchedule::default(), Locale::English).text
}

// ═══════════════════════════════════════════════════════════════════
//  Digits & numbers
// ═══════════════════════════════════════════════════════════════════

mod digits {
    use super::*;

    #[test]
    fn ascii_to_persian() {
        assert_eq!(to_persian_digits("1402"), "۱۴۰۲");
        assert_eq!(to_persian_digits("0123456789"), "۰۱۲۳۴۵۶۷۸۹");
    }

    #[test]
    fn persian_conversion_keeps_other_chars() {
        assert_eq!(to_persian_digits("اسفند 1402, 3h"), "اسفند ۱۴۰۲, ۳h");
    }

    #[test]
    fn persian_to_ascii() {
        assert_eq!(to_english_digits("۱۴۰۲"), "1402");
        assert_eq!(to_english_digits("abc ۹"), "abc 9");
    }

    #[test]
    fn format_number_groups_thousands() {
        assert_eq!(format_number(999.0, Locale::English), "999");
        assert_eq!(format_number(1000.0, Locale::English), "1,000");
        assert_eq!(format_number(1_234_567.0, Locale::English), "1,234,567");
    }

    #[test]
    fn format_number_keeps_up_to_three_decimals() {
        assert_eq!(format_number(1234.5, Locale::English), "1,234.5");
        assert_eq!(format_number(0.125, Locale::English), "0.125");
        assert_eq!(format_number(2.0001, Locale::English), "2");
    }

    #[test]
    fn format_number_negative() {
        assert_eq!(format_number(-1234.0, Locale::English), "-1,234");
    }

    #[test]
    fn format_number_persian_digits() {
        assert_eq!(format_number(1234.5, Locale::Persian), "۱,۲۳۴.۵");
    }

    #[test]
    fn format_number_non_finite_is_zero() {
        assert_eq!(format_number(f64::NAN, Locale::English), "0");
        assert_eq!(format_number(f64::INFINITY, Locale::Persian), "۰");
    }

    #[test]
    fn currency_rounds_and_adds_unit() {
        assert_eq!(format_currency(12_500.4, Locale::Persian), "۱۲,۵۰۰ تومان");
        assert_eq!(format_currency(12_500.6, Locale::English), "12,501 toman");
    }

    #[test]
    fn parse_accepts_persian_digits_and_commas() {
        assert_eq!(parse_persian_number("۱۲,۵۰۰"), 12_500.0);
        assert_eq!(parse_persian_number("1,234.5"), 1234.5);
        assert_eq!(parse_persian_number(" ۴۲ "), 42.0);
    }

    #[test]
    fn parse_garbage_is_zero() {
        assert_eq!(parse_persian_number(""), 0.0);
        assert_eq!(parse_persian_number("abc"), 0.0);
        assert_eq!(parse_persian_number("inf"), 0.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Locale
// ═══════════════════════════════════════════════════════════════════

mod locale {
    use super::*;

    #[test]
    fn english_pluralizes() {
        assert_eq!(Locale::English.quantity(1, TimeUnit::Day), "1 day");
        assert_eq!(Locale::English.quantity(2, TimeUnit::Day), "2 days");
        assert_eq!(Locale::English.quantity(1, TimeUnit::Century), "1 century");
        assert_eq!(Locale::English.quantity(3, TimeUnit::Century), "3 centuries");
    }

    #[test]
    fn persian_uses_persian_digits() {
        assert_eq!(Locale::Persian.quantity(12, TimeUnit::Week), "۱۲ هفته");
    }

    #[test]
    fn month_names() {
        assert_eq!(Locale::Persian.month_name(1), Some("فروردین"));
        assert_eq!(Locale::Persian.month_name(12), Some("اسفند"));
        assert_eq!(Locale::English.month_name(7), Some("Mehr"));
        assert_eq!(Locale::English.month_name(0), None);
        assert_eq!(Locale::English.month_name(13), None);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Working time
// ═══════════════════════════════════════════════════════════════════

mod working_time {
    use super::*;

    #[test]
    fn zero_hours_is_canonical_zero() {
        let t = format_working_time(0.0, &WorkSchedule::default(), Locale::Persian);
        assert_eq!(t.text, "۰ ثانیه");
        assert_eq!(t.total_hours, 0);
    }

    #[test]
    fn degenerate_input_is_zero() {
        for hours in [-5.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let t = format_working_time(hours, &WorkSchedule::default(), Locale::English);
            assert_eq!(t.text, "0 seconds");
            assert_eq!(t.total_hours, 0);
        }
    }

    #[test]
    fn ten_hours_is_one_day_and_two_hours() {
        let t = format_working_time(10.0, &WorkSchedule::new(8.0, 6.0), Locale::English);
        assert_eq!(t.text, "1 day and 2 hours (working time)");
        assert_eq!(t.total_hours, 10);
    }

    #[test]
    fn ten_hours_in_persian() {
        let t = format_working_time(10.0, &WorkSchedule::new(8.0, 6.0), Locale::Persian);
        assert_eq!(t.text, "۱ روز و ۲ ساعت کاری");
        assert_eq!(t.total_hours, 10);
    }

    #[test]
    fn whole_day_has_no_hours_part() {
        assert_eq!(en(8.0), "1 day (working time)");
    }

    #[test]
    fn hours_only() {
        assert_eq!(en(3.0), "3 hours (working time)");
        assert_eq!(en(0.6), "1 hour (working time)");
    }

    #[test]
    fn under_half_an_hour_falls_back() {
        let t = format_working_time(0.3, &WorkSchedule::default(), Locale::English);
        assert_eq!(t.text, "less than 1 hour");
        assert_eq!(t.total_hours, 0);

        let t = format_working_time(0.3, &WorkSchedule::default(), Locale::Persian);
        assert_eq!(t.text, "کمتر از ۱ ساعت");
    }

    #[test]
    fn weeks_with_remaining_days() {
        assert_eq!(en(48.0), "1 week (working time)");
        assert_eq!(en(56.0), "1 week and 1 day (working time)");
    }

    #[test]
    fn weeks_drop_hour_remainder() {
        // 7 days and 4 hours: only one finer tier after the coarsest
        assert_eq!(en(60.0), "1 week and 1 day (working time)");
    }

    #[test]
    fn months_with_remaining_weeks() {
        // 30 days → 5 weeks → 1 month + round(0.67) weeks
        let t = format_working_time(240.0, &WorkSchedule::default(), Locale::English);
        assert_eq!(t.text, "1 month and 1 week (working time)");
        assert_eq!(t.total_hours, 240);
    }

    #[test]
    fn one_working_year() {
        // 52 weeks of 6 days of 8 hours
        let t = format_working_time(2496.0, &WorkSchedule::default(), Locale::English);
        assert_eq!(t.text, "1 year (working time)");
        assert_eq!(t.total_hours, 2496);

        let t = format_working_time(2496.0, &WorkSchedule::default(), Locale::Persian);
        assert_eq!(t.text, "۱ سال کاری");
    }

    #[test]
    fn year_threshold_is_52_full_weeks() {
        // 8 × 6 × 4.33 × 12 hours is 51 full weeks after flooring days,
        // which stays one tier below a year.
        let hours = 8.0 * 6.0 * 4.33 * 12.0;
        assert_eq!(en(hours), "11 months and 3 weeks (working time)");

        let b = working_breakdown(2496.0, &WorkSchedule::default()).unwrap();
        assert_eq!(b.years, 1);
        assert_eq!(b.weeks, 52);
    }

    #[test]
    fn year_with_remaining_months() {
        // 375 days → 62 weeks → 14 months → 1 year + 2 months
        let t = format_working_time(3000.0, &WorkSchedule::default(), Locale::English);
        assert_eq!(t.text, "1 year and 2 months (working time)");
        assert_eq!(t.total_hours, 3000);
    }

    #[test]
    fn custom_schedule() {
        let schedule = WorkSchedule::new(10.0, 5.0);
        let t = format_working_time(100.0, &schedule, Locale::English);
        assert_eq!(t.text, "2 weeks (working time)");
    }

    #[test]
    fn fractional_week_never_counts_a_partial_day() {
        // 6 days at 5.5 days/week: 1 week and half a day
        let schedule = WorkSchedule::new(8.0, 5.5);
        let t = format_working_time(48.0, &schedule, Locale::English);
        assert_eq!(t.text, "1 week (working time)");
        assert_eq!(t.total_hours, 48);

        let b = working_breakdown(48.0, &schedule).unwrap();
        assert_eq!(b.weeks, 1);
        assert_eq!(b.remainder_days, 0);
    }

    #[test]
    fn fractional_week_keeps_whole_remaining_days() {
        // 7 days at 5.5 days/week: 1 week and 1.5 days
        let schedule = WorkSchedule::new(8.0, 5.5);
        let t = format_working_time(56.0, &schedule, Locale::English);
        assert_eq!(t.text, "1 week and 1 day (working time)");
    }

    #[test]
    fn invalid_schedule_uses_defaults() {
        let schedule = WorkSchedule {
            hours_per_day: 0.0,
            days_per_week: -1.0,
        };
        let t = format_working_time(10.0, &schedule, Locale::English);
        assert_eq!(t.text, "1 day and 2 hours (working time)");
    }

    #[test]
    fn breakdown_of_ten_hours() {
        let b = working_breakdown(10.0, &WorkSchedule::default()).unwrap();
        assert_eq!(b.days, 1);
        assert_eq!(b.remainder_hours, 2.0);
        assert_eq!(b.weeks, 0);
        assert_eq!(b.remainder_days, 1);
        assert_eq!(b.months, 0);
        assert_eq!(b.years, 0);
    }

    #[test]
    fn breakdown_none_for_zero() {
        assert!(working_breakdown(0.0, &WorkSchedule::default()).is_none());
    }

    #[test]
    fn total_is_rounded_input() {
        for hours in [0.4, 0.5, 1.49, 7.5, 123.456, 9999.9] {
            let t = format_working_time(hours, &WorkSchedule::default(), Locale::Persian);
            assert_eq!(t.total_hours, hours.round() as u64, "hours = {hours}");
        }
    }

    #[test]
    fn amount_to_hours_round_trip() {
        let rate = 75.0;
        for amount in [10.0, 600.0, 12_345.0, 1_000_000.0] {
            let hours = amount / rate;
            let t = format_working_time(hours, &WorkSchedule::default(), Locale::English);
            assert_eq!(t.total_hours, hours.round() as u64);
        }
    }

    #[test]
    fn same_input_same_output() {
        let schedule = WorkSchedule::new(7.0, 5.0);
        let a = format_working_time(777.7, &schedule, Locale::Persian);
        let b = format_working_time(777.7, &schedule, Locale::Persian);
        assert_eq!(a, b);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Elapsed time
// ═══════════════════════════════════════════════════════════════════

mod elapsed {
    use super::*;

    #[test]
    fn breakdown_of_hour_and_a_half() {
        let b = elapsed_breakdown(1.5);
        assert_eq!(
            b,
            TimeBreakdown {
                hours: 1,
                minutes: 30,
                ..TimeBreakdown::default()
            }
        );
    }

    #[test]
    fn breakdown_of_zero_is_empty() {
        assert_eq!(elapsed_breakdown(0.0), TimeBreakdown::default());
        assert_eq!(elapsed_breakdown(-1.0), TimeBreakdown::default());
    }

    #[test]
    fn year_is_365_and_a_quarter_days() {
        let b = elapsed_breakdown(24.0 * 365.25);
        assert_eq!(b.years, 1);
        assert_eq!(b.months, 0);
        assert_eq!(b.days, 0);
    }

    #[test]
    fn zero_text() {
        assert_eq!(format_elapsed(0.0, Locale::Persian), "۰ ثانیه");
        assert_eq!(format_elapsed(-2.0, Locale::English), "0 seconds");
    }

    #[test]
    fn below_half_a_second() {
        assert_eq!(format_elapsed(0.0001, Locale::English), "less than 1 second");
        assert_eq!(format_elapsed(0.0001, Locale::Persian), "کمتر از یک ثانیه");
    }

    #[test]
    fn one_second() {
        assert_eq!(format_elapsed(1.0 / 3600.0, Locale::English), "1 second");
    }

    #[test]
    fn hour_and_minutes() {
        assert_eq!(format_elapsed(1.5, Locale::English), "1 hour and 30 minutes");
        assert_eq!(format_elapsed(1.5, Locale::Persian), "۱ ساعت و ۳۰ دقیقه");
    }

    #[test]
    fn day_and_hour() {
        assert_eq!(format_elapsed(25.0, Locale::English), "1 day and 1 hour");
    }

    #[test]
    fn month_shows_only_adjacent_weeks() {
        // 31 days: 1 month, 0 weeks, 1 day; the day is two tiers away
        assert_eq!(format_elapsed(744.0, Locale::English), "1 month");
    }

    #[test]
    fn century() {
        assert_eq!(format_elapsed(876_600.0, Locale::English), "1 century");
    }

    #[test]
    fn detailed_lists_every_unit_down_to_hours() {
        assert_eq!(
            detailed_breakdown(745.5, Locale::English),
            "1 month, 1 day, 1 hour"
        );
    }

    #[test]
    fn detailed_shows_minutes_for_short_spans() {
        assert_eq!(detailed_breakdown(2.25, Locale::English), "2 hours, 15 minutes");
        assert_eq!(detailed_breakdown(2.25, Locale::Persian), "۲ ساعت، ۱۵ دقیقه");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Calendar
// ═══════════════════════════════════════════════════════════════════

mod calendar {
    use super::*;

    #[test]
    fn nowruz_dates() {
        assert_eq!(gregorian_to_jalali(2021, 3, 21), (1400, 1, 1));
        assert_eq!(gregorian_to_jalali(2024, 3, 20), (1403, 1, 1));
        assert_eq!(gregorian_to_jalali(2025, 3, 21), (1404, 1, 1));
    }

    #[test]
    fn last_day_of_year() {
        assert_eq!(gregorian_to_jalali(2024, 3, 19), (1402, 12, 29));
        assert_eq!(gregorian_to_jalali(2025, 3, 20), (1403, 12, 30));
    }

    #[test]
    fn second_half_of_year() {
        assert_eq!(gregorian_to_jalali(2024, 9, 21), (1403, 6, 31));
        assert_eq!(gregorian_to_jalali(2024, 9, 22), (1403, 7, 1));
        assert_eq!(gregorian_to_jalali(2025, 1, 15), (1403, 10, 26));
    }

    #[test]
    fn month_label_persian() {
        assert_eq!(month_label(d(2024, 3, 19), Locale::Persian), "اسفند ۱۴۰۲");
    }

    #[test]
    fn month_label_english() {
        assert_eq!(month_label(d(2024, 3, 19), Locale::English), "Esfand 1402");
    }

    #[test]
    fn label_follows_the_local_date() {
        // 02:00 on 1 Farvardin 1404 in Tehran is still 20 March in UTC
        let instant = Utc.with_ymd_and_hms(2025, 3, 20, 22, 30, 0).unwrap();
        let tehran = FixedOffset::east_opt(3 * 3600 + 30 * 60).unwrap();

        assert_eq!(
            month_label_at(&instant.with_timezone(&tehran), Locale::Persian),
            "فروردین ۱۴۰۴"
        );
        assert_eq!(month_label_at(&instant, Locale::Persian), "اسفند ۱۴۰۳");
    }

    #[test]
    fn selection_covers_twelve_months_newest_first() {
        let months = months_for_selection(d(2024, 4, 25), Locale::English);
        assert_eq!(months.len(), 12);
        assert_eq!(months[0].value, "1403-02");
        assert_eq!(months[0].label, "Ordibehesht 1403");
        assert_eq!(months[1].value, "1403-01");
        assert_eq!(months[2].value, "1402-12");
        assert_eq!(months[2].label, "Esfand 1402");
        assert_eq!(months[11].value, "1402-03");
    }

    #[test]
    fn month_value_to_label() {
        assert_eq!(
            format_month_value("1402-12", Locale::Persian).as_deref(),
            Some("اسفند ۱۴۰۲")
        );
        assert_eq!(
            format_month_value("1403-01", Locale::English).as_deref(),
            Some("Farvardin 1403")
        );
    }

    #[test]
    fn invalid_month_value() {
        assert_eq!(format_month_value("", Locale::Persian), None);
        assert_eq!(format_month_value("1402-13", Locale::Persian), None);
        assert_eq!(format_month_value("abc", Locale::Persian), None);
    }
}
