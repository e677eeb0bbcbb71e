//! Configuration loading for the ubigen CLI.
//! Reads ubigen.toml from --config, the UBIGEN_CONFIG env var, or the current directory.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use ubigen_api::{Endpoints, UbigenClient, UBIGEN_API_URL};
use ubigen_common::sandbox::DEFAULT_TIMEOUT_SECS;
use ubigen_common::{GeneSet, SandboxClient};

pub const CONFIG_ENV_VAR: &str = "UBIGEN_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "ubigen.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub genes: GenesConfig,
    #[serde(default)]
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url()     -> String { UBIGEN_API_URL.to_string() }
fn default_timeout_secs() -> u64    { DEFAULT_TIMEOUT_SECS }

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Gene identifiers to query. Empty means the glycolysis set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenesConfig {
    #[serde(default)]
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Extra hosts the HTTP client may contact, on top of the built-in allowlist.
    #[serde(default)]
    pub allowed_domains: Vec<String>,
}


impl Config {
    /// Load configuration.
    ///
    /// An explicit path (argument or UBIGEN_CONFIG) must exist. Without one,
    /// ./ubigen.toml is used when present, defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let named = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        match named {
            Some(path) => Self::from_file(&path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.api.timeout_secs == 0 {
            anyhow::bail!("api.timeout_secs must be greater than zero");
        }
        Ok(config)
    }

    pub fn gene_set(&self) -> GeneSet {
        if self.genes.ids.is_empty() {
            GeneSet::glycolysis()
        } else {
            GeneSet::parse(&self.genes.ids.join(" "))
        }
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::from_base(&self.api.base_url)
    }

    pub fn build_client(&self) -> ubigen_common::Result<UbigenClient> {
        let mut sandbox = SandboxClient::with_timeout(Duration::from_secs(self.api.timeout_secs))?;
        for domain in &self.security.allowed_domains {
            sandbox.allow_domain(domain);
        }
        Ok(UbigenClient::with_client(sandbox, self.endpoints()))
    }
}
