//! Pelias HTTP client
//!
//! One GET per operation against `search`, `reverse` or `autocomplete`
//! below the configured base URL.

use std::time::Duration;

use async_trait::async_trait;
use domain::GeoLocation;
use reqwest::Client;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::PeliasConfig;
use crate::error::{ClientBuildError, PeliasError};
use crate::models::FeatureCollection;
use crate::query::{AutocompleteOptions, GeocodeQuery};

/// Query parameter carrying the provider API key
const API_KEY_PARAM: &str = "api_key";

/// Trait for geocoding provider clients
///
/// Every operation takes an optional caller deadline. The call is bounded by
/// the shorter of that deadline and the configured timeout; whichever fires
/// first ends the call with [`PeliasError::Timeout`]. Dropping the returned
/// future cancels the in-flight request.
#[async_trait]
pub trait GeocodeClient: Send + Sync {
    /// Forward-geocode a free-form address
    async fn geocode(
        &self,
        address: &str,
        deadline: Option<Duration>,
    ) -> Result<FeatureCollection, PeliasError>;

    /// Look up places at a coordinate pair
    async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
        deadline: Option<Duration>,
    ) -> Result<FeatureCollection, PeliasError>;

    /// Search for places, optionally biased toward a focus point
    async fn search(
        &self,
        query: &str,
        focus: Option<GeoLocation>,
        deadline: Option<Duration>,
    ) -> Result<FeatureCollection, PeliasError>;

    /// Type-ahead completion
    async fn autocomplete(
        &self,
        text: &str,
        options: AutocompleteOptions,
        deadline: Option<Duration>,
    ) -> Result<FeatureCollection, PeliasError>;

    /// Run an already-built query
    async fn execute(
        &self,
        query: &GeocodeQuery,
        deadline: Option<Duration>,
    ) -> Result<FeatureCollection, PeliasError>;
}

/// Pelias API client
///
/// Holds one connection-pooling `reqwest::Client`; cloning is cheap and
/// shares the pool.
#[derive(Debug, Clone)]
pub struct PeliasClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
    timeout_secs: u64,
}

impl PeliasClient {
    /// Create a new Pelias client
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be initialized.
    pub fn new(config: &PeliasConfig) -> Result<Self, ClientBuildError> {
        let base_url = config.normalized_base_url()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("GeoGateway/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key: config.effective_api_key().map(ToString::to_string),
            timeout_secs: config.timeout_secs,
        })
    }

    /// Normalized base URL (always ends with `/`)
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full request URL for a query, API key included when configured
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the query violates its constraints.
    pub fn request_url(&self, query: &GeocodeQuery) -> Result<Url, PeliasError> {
        query.validate()?;

        let mut url = self
            .base_url
            .join(query.endpoint())
            .map_err(|e| PeliasError::invalid_input(format!("Cannot build request URL: {e}")))?;

        let mut params = query.to_params();
        params.set_opt(API_KEY_PARAM, self.api_key.as_deref());
        params.apply_to(&mut url);

        Ok(url)
    }

    /// Configured per-request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The deadline a call runs under: the caller's, capped by the configured timeout
    #[must_use]
    pub fn effective_deadline(&self, deadline: Option<Duration>) -> Duration {
        deadline.map_or_else(|| self.timeout(), |d| d.min(self.timeout()))
    }

    fn transport_error(&self, err: reqwest::Error) -> PeliasError {
        if err.is_timeout() {
            return PeliasError::Timeout {
                after: self.timeout(),
            };
        }
        // The URL carries the API key; keep it out of messages and logs.
        let err = err.without_url();
        PeliasError::ProviderUnavailable {
            message: err.to_string(),
            source: Some(err),
        }
    }

    async fn fetch(&self, url: Url) -> Result<String, PeliasError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PeliasError::ProviderUnavailable {
                message: format!("HTTP {status}"),
                source: None,
            });
        }

        response.text().await.map_err(|e| self.transport_error(e))
    }
}

#[async_trait]
impl GeocodeClient for PeliasClient {
    #[instrument(skip(self))]
    async fn geocode(
        &self,
        address: &str,
        deadline: Option<Duration>,
    ) -> Result<FeatureCollection, PeliasError> {
        let query = GeocodeQuery::forward(address)?;
        self.execute(&query, deadline).await
    }

    #[instrument(skip(self))]
    async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
        deadline: Option<Duration>,
    ) -> Result<FeatureCollection, PeliasError> {
        let query = GeocodeQuery::reverse(latitude, longitude)?;
        self.execute(&query, deadline).await
    }

    #[instrument(skip(self))]
    async fn search(
        &self,
        query: &str,
        focus: Option<GeoLocation>,
        deadline: Option<Duration>,
    ) -> Result<FeatureCollection, PeliasError> {
        let query = GeocodeQuery::search(query, focus)?;
        self.execute(&query, deadline).await
    }

    #[instrument(skip(self))]
    async fn autocomplete(
        &self,
        text: &str,
        options: AutocompleteOptions,
        deadline: Option<Duration>,
    ) -> Result<FeatureCollection, PeliasError> {
        let query = GeocodeQuery::autocomplete(text, options)?;
        self.execute(&query, deadline).await
    }

    #[instrument(skip(self, query), fields(operation = query.operation()))]
    async fn execute(
        &self,
        query: &GeocodeQuery,
        deadline: Option<Duration>,
    ) -> Result<FeatureCollection, PeliasError> {
        let url = self.request_url(query)?;

        let after = self.effective_deadline(deadline);
        debug!(endpoint = query.endpoint(), ?after, "Sending geocoding request");

        let body = tokio::time::timeout(after, self.fetch(url))
            .await
            .map_err(|_| PeliasError::Timeout { after })??;

        let collection = FeatureCollection::from_json(&body).map_err(|e| {
            warn!(error = %e, "Unparsable geocoding response");
            PeliasError::ProviderResponseInvalid {
                message: e.to_string(),
                source: Some(e),
            }
        })?;

        debug!(count = collection.len(), "Geocoding response received");
        Ok(collection)
    }
}
