// Folding parsed records and the points table into the report views.
use crate::types::{Aggregates, CodeStat, Record};
use crate::util::date_key;
use std::collections::HashMap;

/// Single pass over `records` producing daily totals, a per-day per-code
/// breakdown, per-code totals across all days, and the grand total.
///
/// A code missing from the table contributes zero points; that is expected
/// data, not an error. `sum` is recomputed from `count * per_code` on every
/// update instead of being accumulated, so the stat rows can never drift
/// from the table value. Empty input yields empty maps and a zero total.
pub fn aggregate(records: &[Record], points: &HashMap<String, i64>) -> Aggregates {
    let mut agg = Aggregates::default();

    for r in records {
        let day = date_key(r.when.date());
        let per_code = points.get(&r.code).copied().unwrap_or(0);

        let d = agg
            .daily_by_code
            .entry(day.clone())
            .or_default()
            .entry(r.code.clone())
            .or_default();
        d.count += 1;
        d.per_code = per_code;
        d.sum = d.count as i64 * per_code;

        let t = agg.totals_by_code.entry(r.code.clone()).or_default();
        t.count += 1;
        t.per_code = per_code;
        t.sum = t.count as i64 * per_code;

        *agg.daily_totals.entry(day).or_insert(0) += per_code;
        agg.grand_total += per_code;
    }

    agg
}
