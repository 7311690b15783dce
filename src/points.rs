// Points-table loading.
//
// The table is a hand-maintained text file, so the loader is deliberately
// forgiving: bad bytes, comments, stray columns and malformed values are
// all skipped rather than treated as fatal.
use crate::util::parse_points_value;
use std::collections::HashMap;

/// Parse a newline-delimited code → points mapping.
///
/// - Bytes are decoded as UTF-8 lossily.
/// - Blank lines and `#` comment lines are skipped.
/// - Each remaining line splits on whitespace runs; the first token is the
///   code (uppercased) and the *last* token is the value, which leaves room
///   for a free-form label column in between.
/// - Lines with fewer than two tokens or an unparseable value are skipped.
/// - A code repeated on a later line overwrites the earlier value.
pub fn load_points(data: &[u8]) -> HashMap<String, i64> {
    let text = String::from_utf8_lossy(data);
    let mut mapping = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 2 {
            continue;
        }
        let code = parts[0].to_uppercase();
        if let Some(points) = parse_points_value(parts[parts.len() - 1]) {
            mapping.insert(code, points);
        }
    }
    mapping
}
