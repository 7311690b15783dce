// Utility helpers for parsing noisy input values.
//
// This module centralizes the "dirty" number/timestamp handling so the rest
// of the code can assume clean, typed values.
use chrono::{NaiveDate, NaiveDateTime};
use num_format::{Locale, ToFormattedString};

/// Parse a points-table value while being forgiving about formatting.
///
/// - Tries a plain integer first.
/// - Falls back to a floating-point value truncated toward zero, so `7.5`
///   loads as `7` and `-2.9` as `-2`.
/// - Returns `None` for anything else; the caller skips the line.
pub fn parse_points_value(s: &str) -> Option<i64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }
    let f = s.parse::<f64>().ok()?;
    if !f.is_finite() {
        return None;
    }
    Some(f.trunc() as i64)
}

/// Combine a `dd.mm.yyyy` date token and an `hh:mm`/`hh.mm` time token into
/// a timestamp, accepting either time separator.
///
/// The time is normalized to the dotted form first; if that fails to parse,
/// the colon form is tried. `None` means the tokens do not form a valid
/// calendar timestamp and the row should be dropped.
pub fn parse_timestamp(day: &str, time: &str) -> Option<NaiveDateTime> {
    let dotted = time.replace(':', ".");
    if let Ok(ts) = NaiveDateTime::parse_from_str(&format!("{day} {dotted}"), "%d.%m.%Y %H.%M") {
        return Some(ts);
    }
    let colon = time.replace('.', ":");
    NaiveDateTime::parse_from_str(&format!("{day} {colon}"), "%d.%m.%Y %H:%M").ok()
}

/// Calendar-date grouping key, `YYYY-MM-DD`.
pub fn date_key(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Thin wrapper around `num-format` for counts in console messages
    // (e.g., `1,204 records parsed`).
    n.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_value_integer() {
        assert_eq!(parse_points_value("10"), Some(10));
        assert_eq!(parse_points_value(" -3 "), Some(-3));
    }

    #[test]
    fn points_value_float_truncates_toward_zero() {
        assert_eq!(parse_points_value("7.9"), Some(7));
        assert_eq!(parse_points_value("-2.9"), Some(-2));
    }

    #[test]
    fn points_value_rejects_garbage() {
        assert_eq!(parse_points_value(""), None);
        assert_eq!(parse_points_value("ten"), None);
        assert_eq!(parse_points_value("NaN"), None);
    }

    #[test]
    fn timestamp_separators_are_equivalent() {
        let colon = parse_timestamp("07.10.2025", "21:46").unwrap();
        let dot = parse_timestamp("07.10.2025", "21.46").unwrap();
        assert_eq!(colon, dot);
        assert_eq!(date_key(colon.date()), "2025-10-07");
    }

    #[test]
    fn timestamp_invalid_date_is_none() {
        assert_eq!(parse_timestamp("31.02.2025", "10:00"), None);
        assert_eq!(parse_timestamp("01.01.2025", "25:00"), None);
    }
}
