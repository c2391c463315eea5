//! Configuration management for roomctl

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Backend used when neither the config file nor `--api-host` names one
pub const DEFAULT_API_HOST: &str = "http://localhost:8000";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the reservation API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".roomctl").join("config.yaml"))
    }

    /// Resolve the config path from an optional override
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from a specific path, falling back to defaults when
    /// the file is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// The durable storage file lives next to the config file
    pub fn storage_path(config_path: &Path) -> PathBuf {
        config_path
            .parent()
            .map(|dir| dir.join("storage.yaml"))
            .unwrap_or_else(|| PathBuf::from("storage.yaml"))
    }

    /// API host, preferring an explicit override
    pub fn api_host(&self, host_override: Option<&str>) -> String {
        host_override
            .or(self.api_host.as_deref())
            .unwrap_or(DEFAULT_API_HOST)
            .trim_end_matches('/')
            .to_string()
    }

    /// Request timeout for API calls
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.preferences.timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_host: None,
            preferences: Preferences::default(),
        }
    }
}
