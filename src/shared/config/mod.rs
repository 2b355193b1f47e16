//! Application configuration module
//!
//! Provides the client-facing configuration types: where the API lives and
//! where the bearer token is kept between runs.

use std::path::PathBuf;

use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// API server base URL, e.g. `http://127.0.0.1:3000`
    pub server_url: Option<String>,
    /// Directory holding the durable token slot
    pub storage_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.server_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    storage_dir: Option<PathBuf>,
}

impl AppConfigBuilder {
    /// Set the server URL; a trailing slash is dropped
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.server_url = Some(url.trim_end_matches('/').to_string());
        self
    }

    /// Set the token storage directory
    pub fn storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = Some(dir.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            server_url: self.server_url,
            storage_dir: self.storage_dir,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_builder_trims_trailing_slash() {
        let config = AppConfig::builder()
            .server_url("http://localhost:3000/")
            .build()
            .unwrap();
        assert_eq!(config.server_url.as_deref(), Some("http://localhost:3000"));
    }

    #[test]
    fn test_builder_rejects_non_http_url() {
        let result = AppConfig::builder().server_url("ftp://example.com").build();
        assert_matches!(result, Err(ConfigError::InvalidUrl(url)) if url == "ftp://example.com");
    }

    #[test]
    fn test_empty_config_is_valid() {
        assert!(AppConfig::builder().build().is_ok());
    }
}
