//! Endpoint addressing and the shared POST helper.

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

use ubigen_common::error::{Result, UbigenError};
use ubigen_common::{GeneSet, SandboxClient};

use crate::ranking::{self, RankingTable};
use crate::summary::{self, Summary};

/// Public Ubigen API root.
pub const UBIGEN_API_URL: &str = "https://ubigen.uni-rostock.de/api";

/// Full URLs of the two endpoints this client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub summary: String,
    pub ranking: String,
}

impl Endpoints {
    pub fn from_base(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            summary: format!("{}/summary", base),
            ranking: format!("{}/ranking", base),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_base(UBIGEN_API_URL)
    }
}

/// POST a gene set as a plain-text body and return the response text.
///
/// Non-2xx responses are reported as [`UbigenError::Status`].
pub async fn post_gene_set(client: &SandboxClient, url: &str, genes: &GeneSet) -> Result<String> {
    if genes.is_empty() {
        warn!("Posting an empty gene set to {}", url);
    }
    let body = genes.to_request_body();
    debug!("POST {} ({} genes, {} bytes)", url, genes.len(), body.len());

    let resp = client
        .post(url)?
        .header(CONTENT_TYPE, "text/plain")
        .body(body)
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(UbigenError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(resp.text().await?)
}

/// Sandbox client bundled with the endpoints it should call.
#[derive(Debug, Clone)]
pub struct UbigenClient {
    client: SandboxClient,
    endpoints: Endpoints,
}

impl UbigenClient {
    /// Client for the public API with the default sandbox policy.
    pub fn new() -> Result<Self> {
        Ok(Self::with_client(SandboxClient::new()?, Endpoints::default()))
    }

    pub fn with_client(client: SandboxClient, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub async fn summary(&self, genes: &GeneSet) -> Result<Summary> {
        summary::fetch_summary(&self.client, &self.endpoints.summary, genes).await
    }

    pub async fn ranking(&self, genes: &GeneSet) -> Result<RankingTable> {
        ranking::fetch_ranking(&self.client, &self.endpoints.ranking, genes).await
    }
}
