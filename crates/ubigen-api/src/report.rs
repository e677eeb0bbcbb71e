//! The summary-then-ranking flow and its console rendering.

use std::fmt;

use tracing::info;

use ubigen_common::error::Result;
use ubigen_common::GeneSet;

use crate::client::UbigenClient;
use crate::number::Scalar;
use crate::stats::recompute_median_percentile;
use crate::summary::Summary;

/// Everything the report prints.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub summary: Summary,
    /// Median of the ranking table's percentiles, rounded to 3 decimals.
    pub recomputed_median: f64,
}

/// Rounded fraction scaled to a percentage. Rounding happens before scaling.
fn as_percent(rounded_fraction: Scalar) -> Scalar {
    rounded_fraction.scale(100)
}

pub fn median_line(summary: &Summary) -> String {
    format!("Median percentile: {}%", as_percent(summary.median_percentile_rounded()))
}

pub fn difference_line(summary: &Summary) -> String {
    format!(
        "Estimated score difference: {} (p = {})",
        summary.change, summary.p_value
    )
}

pub fn recomputed_line(recomputed_median: f64) -> String {
    format!(
        "Recomputed median percentile: {}%",
        as_percent(Scalar::Float(recomputed_median))
    )
}

impl Report {
    pub fn lines(&self) -> [String; 3] {
        [
            median_line(&self.summary),
            difference_line(&self.summary),
            recomputed_line(self.recomputed_median),
        ]
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Run summary, then ranking, then the local median.
///
/// Each line is handed to `emit` as soon as it is known, so the summary lines
/// are out even if the ranking call fails. The first error aborts the run;
/// a failed summary call means the ranking endpoint is never contacted.
pub async fn run_report<F>(client: &UbigenClient, genes: &GeneSet, mut emit: F) -> Result<Report>
where
    F: FnMut(&str),
{
    info!("Requesting ubiquity summary for {} genes", genes.len());
    let summary = client.summary(genes).await?;
    emit(&median_line(&summary));
    emit(&difference_line(&summary));

    let ranking = client.ranking(genes).await?;
    let recomputed_median = recompute_median_percentile(&ranking)?;
    emit(&recomputed_line(recomputed_median));

    Ok(Report { summary, recomputed_median })
}
