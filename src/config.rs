//! User configuration
//!
//! Optional global config at the platform config dir (e.g.
//! `~/.config/oslex/config.toml`). An absent file means defaults. The
//! only setting today is a default alternate catalog path, used when
//! `--catalog` is not given on the command line.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Global user configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlobalConfig {
    /// Alternate catalog file used when `--catalog` is not given
    pub catalog: Option<PathBuf>,
}

impl GlobalConfig {
    /// Returns the global config directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "oslex", "oslex").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads the global configuration from its default location
    pub fn load() -> Result<Self> {
        let config_dir = match Self::config_dir() {
            Some(dir) => dir,
            None => return Ok(Self::default()),
        };

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse config")
    }
}
