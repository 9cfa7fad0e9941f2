//! Configuration loading and resolution
//!
//! Settings are resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! Command-line and environment values arrive together as one
//! [`ConfigLayer`] (clap reads both); the TOML file is a second layer.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5780";
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TOP_N: u32 = 3;

/// One source of partial settings (TOML file, or CLI/ENV)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    /// Address the HTTP server listens on
    pub bind_addr: Option<String>,
    /// Base URL of the recommendation API
    pub api_base_url: Option<String>,
    /// Number of recommendations requested per track
    pub top_n: Option<u32>,
    /// Directory whose page templates override the built-in ones
    pub templates_dir: Option<PathBuf>,
}

/// Fully resolved site configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub bind_addr: String,
    pub api_base_url: String,
    pub top_n: u32,
    pub templates_dir: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            top_n: DEFAULT_TOP_N,
            templates_dir: None,
        }
    }
}

impl SiteConfig {
    /// Merge layers over compiled defaults; `overrides` wins over `file`
    pub fn resolve(overrides: &ConfigLayer, file: &ConfigLayer) -> Result<Self> {
        let defaults = Self::default();

        let bind_addr = overrides
            .bind_addr
            .clone()
            .or_else(|| file.bind_addr.clone())
            .unwrap_or(defaults.bind_addr);

        let api_base_url = overrides
            .api_base_url
            .clone()
            .or_else(|| file.api_base_url.clone())
            .unwrap_or(defaults.api_base_url);

        let top_n = overrides.top_n.or(file.top_n).unwrap_or(defaults.top_n);

        let templates_dir = overrides
            .templates_dir
            .clone()
            .or_else(|| file.templates_dir.clone());

        let config = Self {
            bind_addr,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            top_n,
            templates_dir,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.bind_addr.trim().is_empty() {
            return Err(Error::Config("bind_addr must not be empty".to_string()));
        }
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://"))
        {
            return Err(Error::Config(format!(
                "api_base_url must be an http(s) URL, got {:?}",
                self.api_base_url
            )));
        }
        if self.top_n == 0 {
            return Err(Error::Config("top_n must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Platform config file location: `<config dir>/seoulhot/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("seoulhot").join("config.toml"))
}

/// Parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<ConfigLayer> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))
}

/// Load the config file layer
///
/// An explicitly named file must exist. The platform default file is
/// optional: when it is missing an empty layer is returned.
pub fn load_config_file(explicit: Option<&Path>) -> Result<ConfigLayer> {
    if let Some(path) = explicit {
        info!("Loading config file: {}", path.display());
        return load_toml_config(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            info!("Loading config file: {}", path.display());
            load_toml_config(&path)
        }
        Some(path) => {
            debug!("No config file at {}, using defaults", path.display());
            Ok(ConfigLayer::default())
        }
        None => {
            debug!("Could not determine config directory, using defaults");
            Ok(ConfigLayer::default())
        }
    }
}
