//! Configuration Management
//!
//! Optional defaults for the samples, read from
//! `{config_dir}/bizcomm-samples/config.json`. Command-line flags and their
//! environment variables take precedence over anything set here.

use crate::api::auth::DEFAULT_CREDENTIALS_FILE;
use crate::api::client::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Pause between sample steps; the service is eventually consistent
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(3);

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Service account key file
    #[serde(default)]
    pub credentials_file: Option<PathBuf>,
    /// API base URL
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Seconds to wait between steps
    #[serde(default)]
    pub pause_secs: Option<u64>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("bizcomm-samples").join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from `path`; a missing or unreadable file yields
    /// the defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}, using defaults", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(config) => {
                tracing::debug!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Invalid configuration in {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Get effective key file (config > built-in default)
    pub fn effective_credentials_file(&self) -> PathBuf {
        self.credentials_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CREDENTIALS_FILE))
    }

    /// Get effective endpoint (config > production endpoint)
    pub fn effective_endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    /// Get effective pause between steps
    pub fn effective_pause(&self) -> Duration {
        self.pause_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_PAUSE)
    }
}
