// Row scanning over the extracted PDF text.
use crate::types::Record;
use crate::util::parse_timestamp;
use once_cell::sync::Lazy;
use regex::Regex;

// A row looks like `AB12C 07.10.2025 21.46`: a 5-character uppercase
// alphanumeric code, a dd.mm.yyyy date and an hh:mm or hh.mm time. The
// word boundaries keep the code from matching inside a longer token.
static ROW_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Z0-9]{5})\s+(\d{2}\.\d{2}\.\d{4})\s+(\d{2}[:.]\d{2})\b")
        .expect("row pattern is valid")
});

/// Scan `text` left to right and return every code/timestamp row found, in
/// document order. Rows whose date and time do not form a valid calendar
/// timestamp are dropped; scanned logs are noisy and one corrupt row must
/// not abort the whole parse. An empty result is not an error here.
pub fn parse_rows(text: &str) -> Vec<Record> {
    let mut records = Vec::new();
    for caps in ROW_RE.captures_iter(text) {
        let code = &caps[1];
        let day = &caps[2];
        let time = &caps[3];
        if let Some(when) = parse_timestamp(day, time) {
            records.push(Record {
                code: code.to_string(),
                when,
            });
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_in_document_order() {
        let text = "noise ZZ111 02.01.2024 08:15 more\nAA000 01.01.2024 23.59 tail";
        let records = parse_rows(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].code, "ZZ111");
        assert_eq!(records[1].code, "AA000");
    }

    #[test]
    fn separator_styles_parse_to_the_same_timestamp() {
        let colon = parse_rows("AB12C 07.10.2025 21:46");
        let dot = parse_rows("AB12C 07.10.2025 21.46");
        assert_eq!(colon.len(), 1);
        assert_eq!(colon[0].when, dot[0].when);
    }

    #[test]
    fn code_inside_longer_token_is_not_a_row() {
        assert!(parse_rows("XAB12C 01.01.2024 10:00").is_empty());
    }

    #[test]
    fn invalid_calendar_date_is_dropped_silently() {
        let text = "AB12C 31.02.2024 10:00\nAB12C 01.03.2024 10:00";
        let records = parse_rows(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].when.format("%Y-%m-%d").to_string(), "2024-03-01");
    }

    #[test]
    fn duplicate_rows_are_kept_separately() {
        let records = parse_rows("AB12C 01.01.2024 10:00 AB12C 01.01.2024 10:00");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], records[1]);
    }

    #[test]
    fn parse_is_deterministic() {
        let text = "QQ111 05.05.2024 12:00\nQQ222 05.05.2024 12.30";
        assert_eq!(parse_rows(text), parse_rows(text));
    }

    #[test]
    fn no_matches_is_empty_not_an_error() {
        assert!(parse_rows("nothing to see here").is_empty());
    }
}
