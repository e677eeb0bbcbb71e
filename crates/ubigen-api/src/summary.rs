//! `/summary` endpoint: ubiquity statistics for a whole gene set.

use serde::Deserialize;
use tracing::info;

use ubigen_common::error::Result;
use ubigen_common::{GeneSet, SandboxClient};

use crate::client::post_gene_set;
use crate::number::Scalar;

/// Gene-set summary as returned by the API. Unknown fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Summary {
    /// Median ubiquity percentile of the set, a fraction in [0, 1].
    pub median_percentile: Scalar,
    /// Estimated score difference versus all other genes.
    pub change: Scalar,
    pub p_value: Scalar,
}

impl Summary {
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Median percentile rounded to 3 decimal places, still as a fraction.
    pub fn median_percentile_rounded(&self) -> Scalar {
        self.median_percentile.round_to(3)
    }
}

pub async fn fetch_summary(client: &SandboxClient, url: &str, genes: &GeneSet) -> Result<Summary> {
    let body = post_gene_set(client, url, genes).await?;
    let summary = Summary::from_json(&body)?;
    info!(
        "Summary for {} genes: median percentile {}, change {}, p = {}",
        genes.len(),
        summary.median_percentile,
        summary.change,
        summary.p_value
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ubigen_common::ErrorKind;

    #[test]
    fn test_parse_summary() {
        let summary = Summary::from_json(
            r#"{"median_percentile": 0.8234567, "change": 1.5, "p_value": 0.01, "genes": 25}"#,
        )
        .unwrap();
        assert_eq!(summary.change, Scalar::Float(1.5));
        assert_eq!(summary.p_value, Scalar::Float(0.01));
        assert_eq!(summary.median_percentile_rounded(), Scalar::Float(0.823));
    }

    #[test]
    fn test_integer_fields_kept() {
        let summary =
            Summary::from_json(r#"{"median_percentile": 0.5, "change": 2, "p_value": 0}"#).unwrap();
        assert_eq!(summary.change, Scalar::Int(2));
        assert_eq!(summary.p_value, Scalar::Int(0));
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let err = Summary::from_json(r#"{"median_percentile": 0.5, "change": 1.0}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_non_numeric_field_is_parse_error() {
        let err = Summary::from_json(r#"{"median_percentile": "high", "change": 1.0, "p_value": 0.1}"#)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Summary::from_json("<html>502 Bad Gateway</html>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}
