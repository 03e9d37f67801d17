//! Pelias client configuration

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ClientBuildError;

/// Configuration for the Pelias geocoding client
///
/// Built once at startup and never mutated afterwards.
#[derive(Clone, Serialize, Deserialize)]
pub struct PeliasConfig {
    /// Base URL of the Pelias API, including any version prefix (e.g. `/v1`)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as the `api_key` query parameter; `None` omits it
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for PeliasConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PeliasConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    "http://localhost:4000/v1/".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for PeliasConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PeliasConfig {
    /// Create a configuration suitable for testing against a mock server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout_secs: 5,
        }
    }

    /// The API key, if one is configured and not blank
    #[must_use]
    pub fn effective_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Parse the base URL, normalized to end with exactly one `/`
    ///
    /// Without the trailing slash `Url::join` would replace the last path
    /// segment (`/v1` + `search` = `/search`).
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed or cannot be a base.
    pub fn normalized_base_url(&self) -> Result<Url, ClientBuildError> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        let normalized = format!("{trimmed}/");
        let url = Url::parse(&normalized).map_err(|source| ClientBuildError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })?;
        if url.cannot_be_a_base() {
            return Err(ClientBuildError::CannotBeABase(self.base_url.clone()));
        }
        Ok(url)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        self.normalized_base_url().map_err(|e| e.to_string())?;

        Ok(())
    }
}
