use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, API_URL_ENV};

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
    /// Uses `~/.config/atlasdeck/config.toml` on Unix/macOS, or equivalent
    /// on other platforms via `dirs::config_dir()`. Falls back to the
    /// current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("atlasdeck").join("config.toml")
    }

    /// Loads configuration from the given file.
    ///
    /// A missing file is not an error; defaults apply.
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

        Ok(config)
    }

    /// Resolves the effective configuration once at startup.
    ///
    /// Gateway address precedence: CLI flag, then `ATLAS_API_URL`, then the
    /// config file, then the built-in default. The resolved value is what
    /// every gateway call uses; it is never re-derived per request.
    pub fn resolve(
        cli_api_url: Option<String>,
        config_file: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_file {
            Some(path) => Self::load_from(&path)?,
            None => Self::load_from(&Self::config_path())?,
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.is_empty() {
                config.gateway.base_url = url;
            }
        }

        if let Some(url) = cli_api_url {
            config.gateway.base_url = url;
        }

        config.gateway.base_url = config.gateway.base_url.trim_end_matches('/').to_string();
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.gateway.base_url;
        if url.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Gateway base URL must not be empty".to_string(),
            });
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::ValidationError {
                message: format!("Gateway base URL '{}' must be http(s)", url),
            });
        }

        Ok(())
    }
}
