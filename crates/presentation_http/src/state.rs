//! Application state shared across handlers

use std::sync::Arc;

use application::{GeocodingPort, GeocodingService};
use infrastructure::{AppConfig, PeliasGeocodingAdapter};
use integration_pelias::ClientBuildError;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Geocoding use cases
    pub geocoding: Arc<GeocodingService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Wire state around an existing geocoding port
    pub fn new(port: Arc<dyn GeocodingPort>, config: AppConfig) -> Self {
        Self {
            geocoding: Arc::new(GeocodingService::new(port)),
            config: Arc::new(config),
        }
    }

    /// Build the Pelias-backed state from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the Pelias client cannot be constructed.
    pub fn from_config(config: AppConfig) -> Result<Self, ClientBuildError> {
        let adapter = PeliasGeocodingAdapter::from_config(&config.pelias.to_pelias_config())?;
        Ok(Self::new(Arc::new(adapter), config))
    }
}
