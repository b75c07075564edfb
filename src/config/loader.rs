use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/dogview/config.toml` on Linux, or the equivalent
    /// location via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("dogview").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Replaces the endpoint and re-validates.
    pub fn with_endpoint(mut self, endpoint: String) -> Result<Self, ConfigError> {
        self.api.endpoint = endpoint;
        self.validate()?;
        Ok(self)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The endpoint is an absolute http(s) URL
    /// - The request timeout, when set, is non-zero
    /// - The UI tick rate is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = &self.api.endpoint;
        match reqwest::Url::parse(endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "Endpoint '{}' must use http or https, not '{}'",
                        endpoint,
                        url.scheme()
                    ),
                });
            }
            Err(e) => {
                return Err(ConfigError::ValidationError {
                    message: format!("Endpoint '{}' is not a valid URL: {}", endpoint, e),
                });
            }
        }

        if self.api.timeout_seconds == Some(0) {
            return Err(ConfigError::ValidationError {
                message: "api.timeout_seconds must be greater than 0".to_string(),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
