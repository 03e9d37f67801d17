//! Pelias adapter - Implements GeocodingPort using integration_pelias

use std::{error::Error as StdError, sync::Arc};

use application::error::ApplicationError;
use application::ports::{AutocompleteRequest, GeocodingPort};
use async_trait::async_trait;
use domain::{GeoLocation, LocationResult, Suggestion};
use integration_pelias::{
    AutocompleteOptions, ClientBuildError, GeocodeClient, PeliasClient, PeliasConfig,
    PeliasError, projection,
};
use tracing::{debug, error, instrument, warn};

/// Adapter for Pelias-compatible geocoding providers
pub struct PeliasGeocodingAdapter {
    client: Arc<dyn GeocodeClient>,
}

impl std::fmt::Debug for PeliasGeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PeliasGeocodingAdapter")
            .field("client", &"dyn GeocodeClient")
            .finish()
    }
}

impl PeliasGeocodingAdapter {
    /// Create an adapter over an existing client
    pub fn new(client: Arc<dyn GeocodeClient>) -> Self {
        Self { client }
    }

    /// Build the HTTP client from configuration and wrap it
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client fails
    /// to initialize.
    pub fn from_config(config: &PeliasConfig) -> Result<Self, ClientBuildError> {
        let client = PeliasClient::new(config)?;
        debug!(base_url = %client.base_url(), "Pelias client ready");
        Ok(Self::new(Arc::new(client)))
    }
}

/// Render an error and every `source()` below it as one line
fn error_chain(err: &dyn StdError) -> String {
    let mut chain = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    chain
}

/// Log a client failure with its full cause chain and convert it
fn map_error(operation: &'static str, err: PeliasError) -> ApplicationError {
    let chain = error_chain(&err);
    if err.is_provider_failure() {
        error!(operation, error = %chain, "Geocoding provider call failed");
    } else {
        warn!(operation, error = %chain, "Geocoding request rejected");
    }

    match err {
        PeliasError::InvalidInput(message) => ApplicationError::InvalidInput(message),
        PeliasError::ProviderUnavailable { .. } => ApplicationError::ProviderUnavailable(chain),
        PeliasError::ProviderResponseInvalid { .. } => {
            ApplicationError::ProviderResponseInvalid(chain)
        },
        PeliasError::Timeout { after } => {
            ApplicationError::Timeout(format!("no response within {after:?}"))
        },
    }
}

#[async_trait]
impl GeocodingPort for PeliasGeocodingAdapter {
    #[instrument(skip(self))]
    async fn reverse_geocode(
        &self,
        location: GeoLocation,
    ) -> Result<Option<LocationResult>, ApplicationError> {
        let features = self
            .client
            .reverse_geocode(location.latitude(), location.longitude(), None)
            .await
            .map_err(|e| map_error("reverse", e))?;

        Ok(projection::first_location(&features, ""))
    }

    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Option<GeoLocation>, ApplicationError> {
        let features = self
            .client
            .geocode(address, None)
            .await
            .map_err(|e| map_error("geocode", e))?;

        Ok(projection::first_coordinates(&features))
    }

    #[instrument(skip(self))]
    async fn search(
        &self,
        query: &str,
        focus: Option<GeoLocation>,
    ) -> Result<Vec<LocationResult>, ApplicationError> {
        let features = self
            .client
            .search(query, focus, None)
            .await
            .map_err(|e| map_error("search", e))?;

        Ok(projection::all_locations(&features, query))
    }

    #[instrument(skip(self))]
    async fn search_suggestions(
        &self,
        query: &str,
        focus: Option<GeoLocation>,
    ) -> Result<Vec<Suggestion>, ApplicationError> {
        let features = self
            .client
            .search(query, focus, None)
            .await
            .map_err(|e| map_error("search", e))?;

        Ok(projection::suggestions(&features))
    }

    #[instrument(skip(self, request), fields(text = %request.text, size = request.size))]
    async fn autocomplete(
        &self,
        request: &AutocompleteRequest,
    ) -> Result<Vec<Suggestion>, ApplicationError> {
        let options = AutocompleteOptions {
            focus: request.focus,
            layers: request.layers.clone(),
            sources: request.sources.clone(),
            size: request.size,
        };

        let features = self
            .client
            .autocomplete(&request.text, options, None)
            .await
            .map_err(|e| map_error("autocomplete", e))?;

        Ok(projection::suggestions(&features))
    }
}
