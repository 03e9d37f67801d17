//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `integrations`: Pelias geocoding provider
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `config.toml` in the working directory, then `GEOGATEWAY_*` environment
//! variables (`GEOGATEWAY_PELIAS__API_KEY`, `GEOGATEWAY_SERVER__PORT`, ...).

mod integrations;
mod server;

use config::{ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

pub use integrations::PeliasAppConfig;
pub use server::{LogFormat, ServerConfig};

use crate::telemetry::LoggingConfig;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "GEOGATEWAY";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Application configuration, immutable after startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Geocoding provider settings
    #[serde(default)]
    pub pelias: PeliasAppConfig,

    /// Log filtering
    #[serde(default)]
    pub telemetry: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from defaults, `config.toml` and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or a value has the
    /// wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(File::with_name("config").required(false))
    }

    /// Load configuration from TOML text layered over the defaults
    ///
    /// Environment variables still take precedence.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or has wrong types.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Self::build(File::from_str(contents, FileFormat::Toml))
    }

    fn build<S>(file: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("pelias.base_url", "http://localhost:4000/v1/")?
            .set_default("pelias.timeout_secs", 30)?
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Reject settings the service cannot start with
    ///
    /// # Errors
    ///
    /// Returns a message error naming the offending setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pelias
            .to_pelias_config()
            .validate()
            .map_err(|e| ConfigError::Message(format!("pelias: {e}")))?;

        if self.server.port == 0 {
            return Err(ConfigError::Message(
                "server: port must be non-zero".to_string(),
            ));
        }

        Ok(())
    }
}
