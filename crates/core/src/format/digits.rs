//! Digit-script conversion and number formatting for Persian text.

use super::locale::Locale;

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Replace ASCII digits with Persian (Extended Arabic-Indic) digits.
/// Every other character is kept as-is.
pub fn to_persian_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => PERSIAN_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

/// Replace Persian digits with ASCII digits.
pub fn to_english_digits(text: &str) -> String {
    text.chars()
        .map(|c| match PERSIAN_DIGITS.iter().position(|p| *p == c) {
            Some(d) => char::from(b'0' + d as u8),
            None => c,
        })
        .collect()
}

/// Insert commas every three digits of an ASCII integer string.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a number with thousands separators and up to three decimals,
/// in the locale's digit script: `1234567.5` → `۱,۲۳۴,۵۶۷.۵`.
///
/// Non-finite values render as `0`.
pub fn format_number(value: f64, locale: Locale) -> String {
    if !value.is_finite() {
        return locale.digits("0");
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    locale.digits(&out)
}

/// Format a money amount rounded to whole units: `۱۲,۵۰۰ تومان`.
pub fn format_currency(amount: f64, locale: Locale) -> String {
    format!("{} {}", format_number(amount.round(), locale), locale.currency_unit())
}

/// Parse user input that may contain Persian digits and thousands commas.
/// Anything unparsable yields `0.0`.
pub fn parse_persian_number(input: &str) -> f64 {
    let cleaned = to_english_digits(&input.replace([',', '٬'], ""));
    cleaned
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
