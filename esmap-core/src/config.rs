//! Mapping configuration
//!
//! Values are resolved in the following order (highest priority wins):
//!
//! 1. **Environment Variables**
//! 2. **Config File** (esmap.toml)
//! 3. **Defaults**
//!
//! # Example
//!
//! ```no_run
//! use esmap_core::config::MappingConfig;
//!
//! let config = MappingConfig::load()?;
//! config.validate()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::logging::LoggingConfig;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Property names treated as identifiers even without an explicit marker
pub const DEFAULT_IDENTIFIER_NAMES: &[&str] = &["id", "document"];

/// Complete mapping configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Property names implicitly mapped as the document identifier
    /// Env: ESMAP_ID_NAMES (comma-separated)
    /// Default: ["id", "document"]
    pub identifier_names: Vec<String>,

    pub logging: LoggingConfig,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            identifier_names: DEFAULT_IDENTIFIER_NAMES.iter().map(|name| name.to_string()).collect(),
            logging: LoggingConfig::default(),
        }
    }
}

impl MappingConfig {
    /// Load configuration with full supersedence chain
    pub fn load() -> Result<Self> {
        Self::load_from("esmap.toml")
    }

    /// Load configuration from a specific file, falling back to defaults
    /// when the file does not exist
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let mut config = Self::default();

        if path.exists() {
            let file_config = Self::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            config.merge(file_config);
        }

        config.apply_env_vars();

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.as_ref().display()))
    }

    /// Merge another config into this one (other takes priority)
    pub fn merge(&mut self, other: Self) {
        self.identifier_names = other.identifier_names;
        self.logging = other.logging;
    }

    /// Apply environment variables
    pub fn apply_env_vars(&mut self) {
        if let Ok(names) = env::var("ESMAP_ID_NAMES") {
            self.identifier_names = names
                .split(',')
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect();
        }

        if let Ok(level) = env::var("ESMAP_LOG_LEVEL") {
            match level.parse() {
                Ok(level) => self.logging.level = level,
                Err(e) => log::warn!("Ignoring ESMAP_LOG_LEVEL: {}", e),
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for name in &self.identifier_names {
            if name.trim().is_empty() {
                bail!("identifier_names must not contain blank names");
            }
        }
        Ok(())
    }

    pub fn is_identifier_name(&self, name: &str) -> bool {
        self.identifier_names.iter().any(|candidate| candidate == name)
    }
}
