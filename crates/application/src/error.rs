//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// "Not found" is deliberately absent: single-result lookups return `None`.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Caller-correctable input problem
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Geocoding provider unreachable or answered with a failure status
    #[error("Geocoding provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Geocoding provider answered with an unparsable body
    #[error("Geocoding provider returned an invalid response: {0}")]
    ProviderResponseInvalid(String),

    /// Geocoding provider did not answer in time
    #[error("Geocoding provider timed out: {0}")]
    Timeout(String),
}

impl ApplicationError {
    /// True when the caller can fix the request
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Domain(_) | Self::InvalidInput(_))
    }

    /// True for failures originating at the geocoding provider
    pub const fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            Self::ProviderUnavailable(_) | Self::ProviderResponseInvalid(_) | Self::Timeout(_)
        )
    }
}
