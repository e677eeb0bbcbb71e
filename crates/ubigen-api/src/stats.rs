//! Local statistics over ranking data.

use ubigen_common::error::{Result, UbigenError};

use crate::ranking::{RankingTable, PERCENTILE_COLUMN};

/// Median of `values`; `None` when empty.
///
/// Even-length input yields the mean of the two middle values.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Round to `decimals` places, correctly rounded from the exact binary value.
///
/// Goes through fixed-precision formatting so that e.g. `2.675` (stored as
/// 2.67499999...) rounds down to `2.67` instead of up.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

/// Median of the table's percentile column, rounded to 3 decimals.
pub fn recompute_median_percentile(table: &RankingTable) -> Result<f64> {
    median(table.percentiles())
        .map(|m| round_to(m, 3))
        .ok_or_else(|| UbigenError::EmptyInput(PERCENTILE_COLUMN.to_string()))
}
