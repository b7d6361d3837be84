//! `sharescope.toml` loading.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use sharescope_drive::{CrawlConfig, DriveConfig};
use sharescope_graph::GraphConfig;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "sharescope.toml";

/// Environment variable holding the Drive access token.
pub const ACCESS_TOKEN_ENV: &str = "SHARESCOPE_ACCESS_TOKEN";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub graph: GraphConfig,
    pub crawl: CrawlConfig,
    pub drive: DriveConfig,
}

impl AppConfig {
    /// Load from `path`, or from `./sharescope.toml` if present, then apply
    /// environment overrides. An explicit path that does not exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        Ok(Self {
            graph: config.graph.with_env_overrides(),
            ..config
        })
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
