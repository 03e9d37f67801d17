//! Geocoding service port
//!
//! Defines the interface for address and place lookups. Results are already
//! projected into domain records; adapters own the provider wire format.

use async_trait::async_trait;
use domain::{GeoLocation, LocationResult, Suggestion};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Validated autocomplete arguments
#[derive(Debug, Clone, PartialEq)]
pub struct AutocompleteRequest {
    /// Partial user input
    pub text: String,
    /// Ranking bias
    pub focus: Option<GeoLocation>,
    /// Layer filter
    pub layers: Vec<String>,
    /// Source filter
    pub sources: Vec<String>,
    /// Maximum number of suggestions
    pub size: u32,
}

/// Port for geocoding providers
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Best place at a coordinate pair, `None` when the provider has nothing
    async fn reverse_geocode(
        &self,
        location: GeoLocation,
    ) -> Result<Option<LocationResult>, ApplicationError>;

    /// Coordinates of the best match for an address, `None` when unmatched
    async fn geocode(&self, address: &str) -> Result<Option<GeoLocation>, ApplicationError>;

    /// All places matching a query, in provider order
    async fn search(
        &self,
        query: &str,
        focus: Option<GeoLocation>,
    ) -> Result<Vec<LocationResult>, ApplicationError>;

    /// Places matching a query, as suggestions
    async fn search_suggestions(
        &self,
        query: &str,
        focus: Option<GeoLocation>,
    ) -> Result<Vec<Suggestion>, ApplicationError>;

    /// Type-ahead suggestions
    async fn autocomplete(
        &self,
        request: &AutocompleteRequest,
    ) -> Result<Vec<Suggestion>, ApplicationError>;
}
