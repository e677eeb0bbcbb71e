use reqwest::{Client, ClientBuilder};
use std::collections::HashSet;
use std::time::Duration;
use tracing::warn;
use url::Url;
use crate::error::UbigenError;

/// Hosts reachable without extra configuration.
pub const DEFAULT_ALLOWED_DOMAINS: &[&str] = &[
    "ubigen.uni-rostock.de", // Ubigen API
    "localhost",
    "127.0.0.1",
];

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// An HTTP client that only allows requests to approved domains.
#[derive(Debug, Clone)]
pub struct SandboxClient {
    client: Client,
    allowlist: HashSet<String>,
}

impl SandboxClient {
    /// Creates a client with the default allowlist and timeout.
    pub fn new() -> Result<Self, UbigenError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, UbigenError> {
        let allowlist = DEFAULT_ALLOWED_DOMAINS
            .iter()
            .map(|d| d.to_string())
            .collect();

        let client = ClientBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("ubigen-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| UbigenError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, allowlist })
    }

    /// Appends an exact hostname to the allowlist.
    pub fn allow_domain(&mut self, domain: &str) {
        self.allowlist.insert(domain.to_string());
    }

    /// Validates if a URL is permitted under the current sandbox policy.
    pub fn is_allowed(&self, url: &str) -> bool {
        if let Ok(parsed) = Url::parse(url) {
            if let Some(host) = parsed.host_str() {
                // Exact match or a subdomain of an allowed domain
                for allowed in &self.allowlist {
                    if host == allowed || host.ends_with(&format!(".{}", allowed)) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Starts a POST request, refusing hosts outside the allowlist.
    pub fn post(&self, url: &str) -> Result<reqwest::RequestBuilder, UbigenError> {
        if !self.is_allowed(url) {
            warn!("Blocked outbound request to {}", url);
            return Err(UbigenError::Security(format!(
                "domain not in allowlist for URL {}",
                url
            )));
        }

        Ok(self.client.post(url))
    }
}
