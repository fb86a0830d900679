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
    /// Uses `~/.config/okestore/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("okestore").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
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

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The banner rotation interval is non-zero
    /// - Bucket and key prefix are non-empty
    /// - The storage base URL is absolute
    /// - A size limit, when present, is positive
    /// - An upload timeout, when present, is positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storefront.rotation_interval_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "storefront.rotation_interval_ms must be greater than zero".to_string(),
            });
        }

        let storage = &self.storage;
        if storage.bucket.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "storage.bucket must not be empty".to_string(),
            });
        }

        if storage.key_prefix.trim_matches('/').trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "storage.key_prefix must not be empty".to_string(),
            });
        }

        if let Err(err) = reqwest::Url::parse(&storage.base_url) {
            return Err(ConfigError::ValidationError {
                message: format!("storage.base_url '{}' is not a URL: {}", storage.base_url, err),
            });
        }

        if storage.max_file_bytes == Some(0) {
            return Err(ConfigError::ValidationError {
                message: "storage.max_file_bytes must be greater than zero when set".to_string(),
            });
        }

        if storage.timeout_seconds == Some(0) {
            return Err(ConfigError::ValidationError {
                message: "storage.timeout_seconds must be greater than zero when set".to_string(),
            });
        }

        Ok(())
    }
}
