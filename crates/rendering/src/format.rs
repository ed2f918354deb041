//! fa-IR numeric formatting.

use chrono::{DateTime, Datelike, Utc};

/// Persian (Extended Arabic-Indic) digits, indexed by digit value.
const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Thousands separator used by the fa-IR locale (U+066C).
const THOUSANDS_SEPARATOR: char = '٬';

/// Map ASCII digits in `s` to Persian digits; everything else passes through.
pub fn to_persian_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '0'..='9' => PERSIAN_DIGITS[(c as u8 - b'0') as usize],
            _ => c,
        })
        .collect()
}

/// `amount` in Persian digits, grouped in threes, with the currency suffix:
/// `1234567` becomes `۱٬۲۳۴٬۵۶۷ تومان`.
pub fn format_toman(amount: u64) -> String {
    format!("{} تومان", grouped(amount))
}

/// `YYYY/MM/DD` in Persian digits, e.g. `۲۰۲۵/۰۱/۱۵`.
///
/// Gregorian fields with Persian numerals; calendar conversion is the host's
/// concern, not this crate's.
pub fn format_date(at: DateTime<Utc>) -> String {
    to_persian_digits(&format!("{:04}/{:02}/{:02}", at.year(), at.month(), at.day()))
}

fn grouped(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() * 2);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(PERSIAN_DIGITS[(c as u8 - b'0') as usize]);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn groups_thousands_with_separator() {
        assert_eq!(format_toman(1_234_567), "۱٬۲۳۴٬۵۶۷ تومان");
        assert_eq!(format_toman(45_000), "۴۵٬۰۰۰ تومان");
        assert_eq!(format_toman(1_000), "۱٬۰۰۰ تومان");
    }

    #[test]
    fn small_amounts_have_no_separator() {
        assert_eq!(format_toman(0), "۰ تومان");
        assert_eq!(format_toman(7), "۷ تومان");
        assert_eq!(format_toman(999), "۹۹۹ تومان");
    }

    #[test]
    fn to_persian_digits_passes_non_digits_through() {
        assert_eq!(to_persian_digits("INV-1724577600000"), "INV-۱۷۲۴۵۷۷۶۰۰۰۰۰");
        assert_eq!(to_persian_digits("بدون رقم"), "بدون رقم");
        assert_eq!(to_persian_digits(""), "");
    }

    #[test]
    fn date_renders_zero_padded_persian_fields() {
        let at = Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_date(at), "۲۰۲۵/۰۱/۱۵");
    }
}
