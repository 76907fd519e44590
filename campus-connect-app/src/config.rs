//! Application configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use campus_connect_backend::BackendConfig;
use serde::{Deserialize, Serialize};

/// File-backed application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Backend API base URL.
    pub api_base_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Chat transcript poll period in seconds.
    pub chat_poll_interval_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3001/api".to_string(),
            request_timeout_secs: 30,
            chat_poll_interval_secs: 5,
        }
    }
}

impl AppConfig {
    /// Default config file location under the platform config directory.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("campus-connect").join("config.json"))
    }

    /// Loads the config file, writing the defaults on first run.
    pub fn load_or_init(path: &Path) -> std::io::Result<Self> {
        if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            let config = serde_json::from_str(&raw).map_err(|e| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("Invalid config file {}: {e}", path.display()),
                )
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save(path)?;
            log::info!("Wrote default config to {}", path.display());
            Ok(config)
        }
    }

    /// Writes the config file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, raw)
    }

    /// Connection settings for the HTTP backend.
    #[must_use]
    pub fn backend_config(&self) -> BackendConfig {
        BackendConfig {
            base_url: self.api_base_url.clone(),
            timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }

    /// Chat poll period.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.chat_poll_interval_secs)
    }
}
