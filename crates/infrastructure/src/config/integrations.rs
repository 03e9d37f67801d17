//! Outbound integration settings.

use integration_pelias::PeliasConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

// ==============================
// Pelias Configuration
// ==============================

/// Pelias geocoding provider configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct PeliasAppConfig {
    /// Provider root including any version prefix (e.g., <https://pelias.example.com/v1>)
    #[serde(default = "default_pelias_base_url")]
    pub base_url: String,

    /// API key sent as the `api_key` query parameter (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Per-request timeout in seconds (default: 30)
    #[serde(default = "default_pelias_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for PeliasAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PeliasAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_pelias_base_url() -> String {
    "http://localhost:4000/v1/".to_string()
}

const fn default_pelias_timeout() -> u64 {
    30
}

impl Default for PeliasAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_pelias_base_url(),
            api_key: None,
            timeout_secs: default_pelias_timeout(),
        }
    }
}

impl PeliasAppConfig {
    /// Convert to `integration_pelias`'s `PeliasConfig`
    #[must_use]
    pub fn to_pelias_config(&self) -> PeliasConfig {
        PeliasConfig {
            base_url: self.base_url.clone(),
            api_key: self
                .api_key
                .as_ref()
                .map(|key| key.expose_secret().to_string()),
            timeout_secs: self.timeout_secs,
        }
    }
}
