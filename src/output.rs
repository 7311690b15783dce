// Report rendering: semicolon-delimited CSV, console previews, JSON summary.
use crate::types::{CodeDetailRow, CodeStat, DailyRow};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::error::Error;
use tabled::{settings::Style, Table, Tabled};

/// Daily totals as render-ready rows, date ascending.
pub fn daily_rows(daily_totals: &BTreeMap<String, i64>) -> Vec<DailyRow> {
    daily_totals
        .iter()
        .map(|(date, points)| DailyRow {
            date: date.clone(),
            points: *points,
        })
        .collect()
}

/// One day's per-code breakdown as rows, code ascending.
pub fn detail_rows(by_code: &BTreeMap<String, CodeStat>) -> Vec<CodeDetailRow> {
    by_code
        .iter()
        .map(|(code, stat)| CodeDetailRow {
            code: code.clone(),
            count: stat.count,
            per_code: stat.per_code,
            sum: stat.sum,
        })
        .collect()
}

/// Overall per-code totals ordered for display: points descending, code
/// ascending as the tie-break.
pub fn code_totals_rows(totals_by_code: &BTreeMap<String, CodeStat>) -> Vec<CodeDetailRow> {
    let mut rows = detail_rows(totals_by_code);
    rows.sort_by(|a, b| match b.sum.cmp(&a.sum) {
        Ordering::Equal => a.code.cmp(&b.code),
        other => other,
    });
    rows
}

fn csv_bytes<T: Serialize>(header: &[&str], rows: &[T]) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_writer(Vec::new());
    // Explicit header so empty tables still carry one.
    wtr.write_record(header)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    Ok(wtr.into_inner()?)
}

/// `Paiva;Pisteet` table for download, UTF-8, date ascending.
pub fn daily_csv_bytes(daily_totals: &BTreeMap<String, i64>) -> Result<Vec<u8>, Box<dyn Error>> {
    csv_bytes(&["Paiva", "Pisteet"], &daily_rows(daily_totals))
}

/// `Koodi;Kpl;Pist./koodi;Pisteet yht.` table for one day, code ascending.
pub fn day_detail_csv_bytes(
    by_code: &BTreeMap<String, CodeStat>,
) -> Result<Vec<u8>, Box<dyn Error>> {
    csv_bytes(
        &["Koodi", "Kpl", "Pist./koodi", "Pisteet yht."],
        &detail_rows(by_code),
    )
}

pub fn write_bytes(path: &str, bytes: &[u8]) -> Result<(), Box<dyn Error>> {
    std::fs::write(path, bytes)?;
    Ok(())
}

pub fn write_json<T: Serialize>(path: &str, value: &T) -> Result<(), Box<dyn Error>> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s)?;
    Ok(())
}

pub fn preview_table_rows<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().cloned().take(max_rows).collect();
    if slice.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table_str = Table::new(slice).with(Style::markdown()).to_string();
    println!("{}\n", table_str);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(count: u64, per_code: i64) -> CodeStat {
        CodeStat {
            count,
            per_code,
            sum: count as i64 * per_code,
        }
    }

    #[test]
    fn daily_csv_is_semicolon_delimited_and_sorted() {
        let mut totals = BTreeMap::new();
        totals.insert("2024-01-02".to_string(), 3);
        totals.insert("2024-01-01".to_string(), 10);
        let bytes = daily_csv_bytes(&totals).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "Paiva;Pisteet\n2024-01-01;10\n2024-01-02;3\n"
        );
    }

    #[test]
    fn empty_daily_csv_still_has_header() {
        let bytes = daily_csv_bytes(&BTreeMap::new()).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "Paiva;Pisteet\n");
    }

    #[test]
    fn day_detail_csv_has_finnish_header_and_code_order() {
        let mut by_code = BTreeMap::new();
        by_code.insert("XY789".to_string(), stat(2, 5));
        by_code.insert("AB12C".to_string(), stat(1, 10));
        let bytes = day_detail_csv_bytes(&by_code).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "Koodi;Kpl;Pist./koodi;Pisteet yht.\nAB12C;1;10;10\nXY789;2;5;10\n"
        );
    }

    #[test]
    fn code_totals_sort_by_points_desc_then_code() {
        let mut totals = BTreeMap::new();
        totals.insert("BB222".to_string(), stat(1, 10));
        totals.insert("AA111".to_string(), stat(2, 5));
        totals.insert("CC333".to_string(), stat(1, 1));
        let rows = code_totals_rows(&totals);
        let order: Vec<&str> = rows.iter().map(|r| r.code.as_str()).collect();
        // AA111 and BB222 tie on 10 points; code breaks the tie.
        assert_eq!(order, vec!["AA111", "BB222", "CC333"]);
    }
}
