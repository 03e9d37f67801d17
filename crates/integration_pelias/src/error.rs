//! Pelias error types

use std::time::Duration;

use thiserror::Error;

/// Errors returned by [`crate::GeocodeClient`] operations
///
/// The variant set is exhaustive: every failed call ends in exactly one of
/// these kinds. An empty result is not an error.
#[derive(Debug, Error)]
pub enum PeliasError {
    /// Caller-supplied input was rejected before any request was sent
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Transport failure or non-success HTTP status from the provider
    #[error("Geocoding provider unavailable: {message}")]
    ProviderUnavailable {
        /// What went wrong
        message: String,
        /// Underlying network error, if any
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The provider answered, but the body is not the expected JSON shape
    #[error("Geocoding provider returned an invalid response: {message}")]
    ProviderResponseInvalid {
        /// What went wrong
        message: String,
        /// Underlying parse error, if any
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The request did not complete within its deadline
    ///
    /// The deadline is the caller's, when one was passed and it is shorter
    /// than the configured timeout.
    #[error("Geocoding request timed out after {after:?}")]
    Timeout {
        /// The deadline that elapsed
        after: Duration,
    },
}

impl PeliasError {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// True for failures caused by the provider side rather than the caller
    #[must_use]
    pub const fn is_provider_failure(&self) -> bool {
        !matches!(self, Self::InvalidInput(_))
    }
}

/// Errors raised while constructing a [`crate::PeliasClient`]
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// The configured base URL cannot be parsed
    #[error("Invalid Pelias base URL '{url}': {source}")]
    InvalidBaseUrl {
        /// The offending URL
        url: String,
        /// Parse failure
        #[source]
        source: url::ParseError,
    },

    /// The base URL cannot carry relative paths (e.g. `mailto:`)
    #[error("Pelias base URL '{0}' cannot be used as a base")]
    CannotBeABase(String),

    /// The HTTP client could not be initialized
    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
