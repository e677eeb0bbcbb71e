//! Client for the Ubigen gene-ubiquity API.
//!
//! Ubigen ranks human genes by how ubiquitously they are expressed across
//! tissues. For a gene set the API reports a summary (median percentile of
//! the set plus the estimated score difference against all other genes and
//! its p-value) and a per-gene ranking table as CSV.
//!
//! # Example
//!
//! ```rust,no_run
//! use ubigen_api::UbigenClient;
//! use ubigen_common::GeneSet;
//!
//! #[tokio::main]
//! async fn main() -> ubigen_common::Result<()> {
//!     let client = UbigenClient::new()?;
//!     let genes = GeneSet::glycolysis();
//!
//!     let summary = client.summary(&genes).await?;
//!     println!("Median percentile: {}", summary.median_percentile_rounded());
//!
//!     let ranking = client.ranking(&genes).await?;
//!     println!("{} genes ranked", ranking.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod number;
pub mod ranking;
pub mod report;
pub mod stats;
pub mod summary;

pub use client::{Endpoints, UbigenClient, UBIGEN_API_URL};
pub use number::Scalar;
pub use ranking::{RankingRow, RankingTable, PERCENTILE_COLUMN};
pub use report::{run_report, Report};
pub use summary::Summary;
