//! Geocoding service
//!
//! Boundary-level validation and result semantics for address and place
//! lookups. Single-result lookups return `None` when nothing matched;
//! suggestion lists are simply empty.

use std::{fmt, sync::Arc};

use domain::{DomainError, GeoLocation, LocationResult, Suggestion};
use tracing::{debug, info, instrument};

use crate::{
    error::ApplicationError,
    ports::{AutocompleteRequest, GeocodingPort},
};

/// Suggestion count used when the caller does not ask for one
pub const DEFAULT_SUGGESTION_SIZE: u32 = 10;

/// Smallest suggestion count a caller may request
pub const MIN_SUGGESTION_SIZE: u32 = 1;

/// Largest suggestion count a caller may request
pub const MAX_SUGGESTION_SIZE: u32 = 20;

/// Raw autocomplete arguments as they arrive from the HTTP boundary
#[derive(Debug, Clone, Default)]
pub struct AutocompleteParams {
    pub text: String,
    pub focus_lat: Option<f64>,
    pub focus_lon: Option<f64>,
    /// Comma-separated layer filter
    pub layers: Option<String>,
    /// Comma-separated source filter
    pub sources: Option<String>,
    pub size: Option<u32>,
}

/// Geocoding service for handling place lookups
pub struct GeocodingService {
    geocoding_port: Arc<dyn GeocodingPort>,
}

impl fmt::Debug for GeocodingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeocodingService").finish_non_exhaustive()
    }
}

impl GeocodingService {
    /// Create a new geocoding service
    pub fn new(geocoding_port: Arc<dyn GeocodingPort>) -> Self {
        Self { geocoding_port }
    }

    /// Describe the place at a coordinate pair
    ///
    /// # Errors
    ///
    /// Returns a domain error for out-of-range coordinates, or the provider
    /// failure.
    #[instrument(skip(self))]
    pub async fn get_location(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<LocationResult>, ApplicationError> {
        let location = GeoLocation::new(latitude, longitude).map_err(DomainError::from)?;
        debug!(%location, "Reverse geocoding");
        self.geocoding_port.reverse_geocode(location).await
    }

    /// Resolve an address to coordinates
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank address, or the provider failure.
    #[instrument(skip(self))]
    pub async fn geocode_address(
        &self,
        address: &str,
    ) -> Result<Option<GeoLocation>, ApplicationError> {
        let address = required(address, "address")?;
        info!("Geocoding address");
        self.geocoding_port.geocode(address).await
    }

    /// Type-ahead suggestions; no match yields an empty list
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for blank text or a size outside
    /// `[MIN_SUGGESTION_SIZE, MAX_SUGGESTION_SIZE]`, a domain error for an
    /// out-of-range focus, or the provider failure.
    #[instrument(skip(self, params), fields(text = %params.text, size = ?params.size))]
    pub async fn autocomplete(
        &self,
        params: AutocompleteParams,
    ) -> Result<Vec<Suggestion>, ApplicationError> {
        let text = required(&params.text, "text")?;

        let size = params.size.unwrap_or(DEFAULT_SUGGESTION_SIZE);
        if !(MIN_SUGGESTION_SIZE..=MAX_SUGGESTION_SIZE).contains(&size) {
            return Err(ApplicationError::InvalidInput(format!(
                "size must be between {MIN_SUGGESTION_SIZE} and {MAX_SUGGESTION_SIZE}"
            )));
        }

        let request = AutocompleteRequest {
            text: text.to_string(),
            focus: focus_point(params.focus_lat, params.focus_lon)?,
            layers: split_csv(params.layers.as_deref()),
            sources: split_csv(params.sources.as_deref()),
            size,
        };

        let suggestions = self.geocoding_port.autocomplete(&request).await?;
        debug!(count = suggestions.len(), "Autocomplete finished");
        Ok(suggestions)
    }

    /// All places matching a query, `None` when nothing matched
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank query, a domain error for an
    /// out-of-range focus, or the provider failure.
    #[instrument(skip(self))]
    pub async fn search_places(
        &self,
        query: &str,
        focus_lat: Option<f64>,
        focus_lon: Option<f64>,
    ) -> Result<Option<Vec<LocationResult>>, ApplicationError> {
        let query = required(query, "query")?;
        let focus = focus_point(focus_lat, focus_lon)?;

        let places = self.geocoding_port.search(query, focus).await?;
        debug!(count = places.len(), "Search finished");
        Ok((!places.is_empty()).then_some(places))
    }

    /// Places matching a query as suggestions; no match yields an empty list
    ///
    /// # Errors
    ///
    /// Same as [`Self::search_places`].
    #[instrument(skip(self))]
    pub async fn search_suggestions(
        &self,
        query: &str,
        focus_lat: Option<f64>,
        focus_lon: Option<f64>,
    ) -> Result<Vec<Suggestion>, ApplicationError> {
        let query = required(query, "query")?;
        let focus = focus_point(focus_lat, focus_lon)?;
        self.geocoding_port.search_suggestions(query, focus).await
    }
}

fn required<'a>(value: &'a str, name: &str) -> Result<&'a str, ApplicationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApplicationError::InvalidInput(format!("{name} is required")));
    }
    Ok(trimmed)
}

/// A focus is only used when both components are present
fn focus_point(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<Option<GeoLocation>, ApplicationError> {
    match (latitude, longitude) {
        (Some(lat), Some(lon)) => Ok(Some(
            GeoLocation::new(lat, lon).map_err(DomainError::from)?,
        )),
        _ => Ok(None),
    }
}

fn split_csv(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default()
}
