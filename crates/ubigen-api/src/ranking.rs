//! `/ranking` endpoint: per-gene ubiquity ranking returned as CSV.

use tracing::{debug, info};

use ubigen_common::error::{Result, UbigenError};
use ubigen_common::{GeneSet, SandboxClient};

use crate::client::post_gene_set;

/// Column holding each gene's ubiquity percentile.
pub const PERCENTILE_COLUMN: &str = "percentile";

/// Cell values read as "no value" in numeric columns (pandas' default NA strings).
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Ranking table parsed from CSV. Always has a numeric `percentile` column.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    percentiles: Vec<f64>,
}

/// Borrowed view of one table row.
#[derive(Debug, Clone, Copy)]
pub struct RankingRow<'a> {
    headers: &'a [String],
    values: &'a [String],
}

impl<'a> RankingRow<'a> {
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let idx = self.headers.iter().position(|h| h == column)?;
        self.values.get(idx).map(String::as_str)
    }
}

impl RankingTable {
    /// Parse CSV text with a header row. Rows must all have the header's width.
    pub fn from_csv(text: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        let mut table = Self { headers, rows, percentiles: Vec::new() };
        table.percentiles = table.column_f64(PERCENTILE_COLUMN)?;
        debug!(
            "Parsed ranking table: {} rows, columns {:?}",
            table.rows.len(),
            table.headers
        );
        Ok(table)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = RankingRow<'_>> {
        self.rows.iter().map(|values| RankingRow {
            headers: &self.headers,
            values,
        })
    }

    /// Numeric values of `column`, skipping missing cells.
    pub fn column_f64(&self, column: &str) -> Result<Vec<f64>> {
        let idx = self
            .headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| UbigenError::Parse(format!("ranking table has no '{}' column", column)))?;

        let mut values = Vec::with_capacity(self.rows.len());
        for (line, row) in self.rows.iter().enumerate() {
            let cell = row.get(idx).map(String::as_str).unwrap_or("");
            if MISSING_MARKERS.contains(&cell) {
                continue;
            }
            let value = cell.parse::<f64>().map_err(|_| {
                UbigenError::Parse(format!(
                    "non-numeric value '{}' in column '{}' (data row {})",
                    cell,
                    column,
                    line + 1
                ))
            })?;
            if value.is_nan() {
                continue;
            }
            values.push(value);
        }
        Ok(values)
    }

    /// Values of the `percentile` column, validated when the table was parsed.
    pub fn percentiles(&self) -> &[f64] {
        &self.percentiles
    }
}

pub async fn fetch_ranking(client: &SandboxClient, url: &str, genes: &GeneSet) -> Result<RankingTable> {
    let body = post_gene_set(client, url, genes).await?;
    let table = RankingTable::from_csv(&body)?;
    info!("Ranking table received: {} rows for {} genes", table.len(), genes.len());
    Ok(table)
}
