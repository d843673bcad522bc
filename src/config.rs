//! Client configuration
//!
//! A profile is a small YAML file pointing the client at a backend and a
//! credentials file. Everything except the base URL has a default, so a
//! minimal profile is a single line.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

fn default_page_size() -> u32 {
    crate::feed::DEFAULT_PAGE_SIZE
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_refresh_path() -> String {
    "/auth/refresh".to_string()
}

/// Complete client configuration loaded from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the backend API
    pub base_url: String,

    /// Path of the credentials file; omit for an in-memory session
    #[serde(default)]
    pub credentials_file: Option<PathBuf>,

    /// Posts requested per feed page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Path of the token refresh endpoint
    #[serde(default = "default_refresh_path")]
    pub refresh_path: String,
}

impl ClientConfig {
    /// Create a config for the given base URL with defaults everywhere else
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            credentials_file: None,
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
            refresh_path: default_refresh_path(),
        }
    }

    /// Load a profile from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read profile {}: {e}", path.display()))
        })?;
        Self::from_yaml(&contents)
    }

    /// Parse a profile from a YAML string
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the credentials file path
    #[must_use]
    pub fn with_credentials_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_file = Some(path.into());
        self
    }

    /// Set the feed page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::config("base_url must not be empty"));
        }
        url::Url::parse(&self.base_url)?;
        if self.page_size == 0 {
            return Err(Error::config("page_size must be at least 1"));
        }
        Ok(())
    }
}
