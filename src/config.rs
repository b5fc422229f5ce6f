//! Configuration management for ChatVault
//!
//! This module handles loading, parsing, and validating configuration
//! from an optional YAML file, with CLI and environment overrides
//! applied on top by the caller.

use crate::error::{Result, VaultError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for ChatVault
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Database directory; when unset the platform data dir is used
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// A missing file is not an error: the defaults apply, so the CLI
    /// works out of the box without a config file.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::Config` when the file exists but cannot be
    /// read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| VaultError::Config(format!("Failed to read config file: {}", e)))?;
        let config: Config = serde_yaml::from_str(&contents)
            .map_err(|e| VaultError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `VaultError::Config` when a configured value is unusable.
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.storage.path {
            if path.as_os_str().is_empty() {
                return Err(VaultError::Config("storage.path must not be empty".into()).into());
            }
        }
        Ok(())
    }
}
