//! Optional YAML configuration for the `chainstream` binary.
//!
//! ```yaml
//! viewer: "0xd8da6bf26964af9d7eed9e03e53415d37aa96045"
//! chain_id: 43114
//! page_size: 100
//! log:
//!   level: info
//!   components:
//!     chainstream-core: debug
//!   json: false
//! ```
//!
//! Command-line flags override every value read here.

use anyhow::{Context, Result};
use chainstream_core::feed::DEFAULT_PAGE_SIZE;
use chainstream_observability::LogConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub log: LogConfig,
    /// Default viewer address for `history` and `export`.
    #[serde(default)]
    pub viewer: Option<String>,
    /// Chain used for explorer links.
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,
    /// Entries requested per feed page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_chain_id() -> u64 {
    1
}
fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            viewer: None,
            chain_id: default_chain_id(),
            page_size: default_page_size(),
        }
    }
}

impl CliConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("parse config YAML")
    }

    /// Read `path` when given; defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let yaml = std::fs::read_to_string(path)
                    .with_context(|| format!("read config file '{}'", path.display()))?;
                Self::from_yaml(&yaml)
            }
            None => Ok(Self::default()),
        }
    }

    /// The viewer from the command line, falling back to the config file.
    pub fn resolve_viewer(&self, flag: Option<String>) -> Result<String> {
        flag.or_else(|| self.viewer.clone())
            .filter(|v| !v.trim().is_empty())
            .context("no viewer address: pass --viewer or set `viewer` in the config file")
    }
}
