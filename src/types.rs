use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;
use tabled::Tabled;

/// One event occurrence extracted from the PDF: a 5-character code plus the
/// timestamp printed next to it. Duplicates are valid and counted separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub code: String,
    pub when: NaiveDateTime,
}

/// Per-code tally. `sum` is always recomputed as `count * per_code` rather
/// than accumulated, so it stays consistent with the table value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodeStat {
    pub count: u64,
    pub per_code: i64,
    pub sum: i64,
}

/// All aggregate views of one run. Ordered maps so date and code listings
/// come out in ascending key order without a separate sort.
#[derive(Debug, Clone, Default)]
pub struct Aggregates {
    pub daily_totals: BTreeMap<String, i64>,
    pub daily_by_code: BTreeMap<String, BTreeMap<String, CodeStat>>,
    pub totals_by_code: BTreeMap<String, CodeStat>,
    pub grand_total: i64,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct DailyRow {
    #[serde(rename = "Paiva")]
    #[tabled(rename = "Paiva")]
    pub date: String,
    #[serde(rename = "Pisteet")]
    #[tabled(rename = "Pisteet")]
    pub points: i64,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct CodeDetailRow {
    #[serde(rename = "Koodi")]
    #[tabled(rename = "Koodi")]
    pub code: String,
    #[serde(rename = "Kpl")]
    #[tabled(rename = "Kpl")]
    pub count: u64,
    #[serde(rename = "Pist./koodi")]
    #[tabled(rename = "Pist./koodi")]
    pub per_code: i64,
    #[serde(rename = "Pisteet yht.")]
    #[tabled(rename = "Pisteet yht.")]
    pub sum: i64,
}

#[derive(Debug, Serialize)]
pub struct SummaryStats {
    pub grand_total: i64,
    pub days: usize,
    pub records: usize,
    pub distinct_codes: usize,
}
