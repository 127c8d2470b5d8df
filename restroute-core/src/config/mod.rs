//! Configuration for route inference
//!
//! # Configuration Hierarchy
//!
//! Values are resolved in this order (highest priority wins):
//!
//! 1. **Environment Variables** (`RESTROUTE_*`)
//! 2. **Config File** (`restroute.toml`)
//! 3. **Defaults**
//!
//! # Example
//!
//! ```no_run
//! use restroute_core::config::RestRouteConfig;
//!
//! let config = RestRouteConfig::load()?;
//! let options = restroute_core::routes::InferenceOptions::from(&config.inference);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ```toml
//! [inference]
//! id_field = "id"
//! strict = true
//!
//! [logging]
//! level = "debug"
//! ```

pub mod inference;
pub mod logging;

pub use inference::InferenceConfig;
pub use logging::LoggingConfig;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestRouteConfig {
    pub inference: InferenceConfig,
    pub logging: LoggingConfig,
}

impl RestRouteConfig {
    /// Load `restroute.toml` from the working directory, then the environment
    pub fn load() -> Result<Self> {
        Self::load_from("restroute.toml")
    }

    /// Load from a specific file (skipped if missing), then the environment
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let mut config = Self::default();

        if path.exists() {
            let file_config = Self::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            config.merge(file_config);
        }

        config.apply_env_vars();
        config.validate()?;

        Ok(config)
    }

    /// Parse a TOML file without applying environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.as_ref().display()))
    }

    /// Merge another config into this one (other takes priority)
    pub fn merge(&mut self, other: Self) {
        self.inference.merge(other.inference);
        self.logging.merge(other.logging);
    }

    pub fn apply_env_vars(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        self.inference.apply_env_from(&lookup);
        self.logging.apply_env_from(&lookup);
    }

    pub fn validate(&self) -> Result<()> {
        self.inference.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
