//! Geocoding handlers
//!
//! Thin HTTP wrappers over [`application::GeocodingService`]. Single-result
//! lookups and place search answer 404 when nothing matched; suggestion
//! endpoints answer an empty array instead.

use application::AutocompleteParams;
use axum::{Json, extract::State};
use domain::{GeoLocation, LocationResult, Suggestion};
use serde::Deserialize;
use tracing::{debug, instrument};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{error::ApiError, middleware::ValidatedQuery, state::AppState};

/// Reverse geocoding parameters
#[derive(Debug, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ReverseQuery {
    /// Latitude (-90 to 90)
    #[validate(range(min = -90.0, max = 90.0, message = "must be between -90 and 90"))]
    pub lat: f64,
    /// Longitude (-180 to 180)
    #[validate(range(min = -180.0, max = 180.0, message = "must be between -180 and 180"))]
    pub lon: f64,
}

/// Forward geocoding parameters
#[derive(Debug, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct AddressQuery {
    /// Free-form address
    pub address: String,
}

/// Place search parameters
#[derive(Debug, Deserialize, Validate, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Search text
    pub query: String,
    /// Focus latitude; used only together with `focusLon`, both range-checked when present
    pub focus_lat: Option<f64>,
    /// Focus longitude; used only together with `focusLat`
    pub focus_lon: Option<f64>,
}

/// Autocomplete parameters
#[derive(Debug, Deserialize, Validate, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AutocompleteQuery {
    /// Partial input
    pub text: String,
    /// Focus latitude; used only together with `focusLon`, both range-checked when present
    pub focus_lat: Option<f64>,
    /// Focus longitude; used only together with `focusLat`
    pub focus_lon: Option<f64>,
    /// Comma-separated layer filter (e.g. `venue,address`)
    pub layers: Option<String>,
    /// Comma-separated source filter (e.g. `osm,wof`)
    pub sources: Option<String>,
    /// Maximum suggestions, 1 to 20 (default 10)
    #[validate(range(min = 1, max = 20, message = "must be between 1 and 20"))]
    pub size: Option<u32>,
}

/// Describe the place at a coordinate pair
#[utoipa::path(
    get,
    path = "/api/geocoding/reverse",
    tag = "geocoding",
    params(ReverseQuery),
    responses(
        (status = 200, description = "Best matching place", body = LocationResult),
        (status = 400, description = "Invalid coordinates", body = crate::error::ErrorResponse),
        (status = 404, description = "No place at these coordinates", body = crate::error::ErrorResponse),
        (status = 502, description = "Provider returned an invalid response", body = crate::error::ErrorResponse),
        (status = 503, description = "Provider unavailable", body = crate::error::ErrorResponse),
        (status = 504, description = "Provider timed out", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_location(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ReverseQuery>,
) -> Result<Json<LocationResult>, ApiError> {
    state
        .geocoding
        .get_location(query.lat, query.lon)
        .await?
        .map(Json)
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "No location found for coordinates ({}, {})",
                query.lat, query.lon
            ))
        })
}

/// Resolve an address to coordinates
#[utoipa::path(
    get,
    path = "/api/geocoding/geocode",
    tag = "geocoding",
    params(AddressQuery),
    responses(
        (status = 200, description = "Coordinates of the best match", body = GeoLocation),
        (status = 400, description = "Missing or blank address", body = crate::error::ErrorResponse),
        (status = 404, description = "Address not found", body = crate::error::ErrorResponse),
        (status = 502, description = "Provider returned an invalid response", body = crate::error::ErrorResponse),
        (status = 503, description = "Provider unavailable", body = crate::error::ErrorResponse),
        (status = 504, description = "Provider timed out", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn geocode_address(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<AddressQuery>,
) -> Result<Json<GeoLocation>, ApiError> {
    state
        .geocoding
        .geocode_address(&query.address)
        .await?
        .map(Json)
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "No coordinates found for address '{}'",
                query.address.trim()
            ))
        })
}

/// Type-ahead suggestions
#[utoipa::path(
    get,
    path = "/api/geocoding/autocomplete",
    tag = "geocoding",
    params(AutocompleteQuery),
    responses(
        (status = 200, description = "Suggestions in provider order, possibly empty", body = Vec<Suggestion>),
        (status = 400, description = "Blank text, bad size or focus", body = crate::error::ErrorResponse),
        (status = 502, description = "Provider returned an invalid response", body = crate::error::ErrorResponse),
        (status = 503, description = "Provider unavailable", body = crate::error::ErrorResponse),
        (status = 504, description = "Provider timed out", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn autocomplete(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<AutocompleteQuery>,
) -> Result<Json<Vec<Suggestion>>, ApiError> {
    let params = AutocompleteParams {
        text: query.text,
        focus_lat: query.focus_lat,
        focus_lon: query.focus_lon,
        layers: query.layers,
        sources: query.sources,
        size: query.size,
    };

    let suggestions = state.geocoding.autocomplete(params).await?;
    debug!(count = suggestions.len(), "Returning suggestions");
    Ok(Json(suggestions))
}

/// Search for places
#[utoipa::path(
    get,
    path = "/api/geocoding/search",
    tag = "geocoding",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching places in provider order", body = Vec<LocationResult>),
        (status = 400, description = "Blank query or bad focus", body = crate::error::ErrorResponse),
        (status = 404, description = "Nothing matched", body = crate::error::ErrorResponse),
        (status = 502, description = "Provider returned an invalid response", body = crate::error::ErrorResponse),
        (status = 503, description = "Provider unavailable", body = crate::error::ErrorResponse),
        (status = 504, description = "Provider timed out", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn search_places(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<SearchQuery>,
) -> Result<Json<Vec<LocationResult>>, ApiError> {
    state
        .geocoding
        .search_places(&query.query, query.focus_lat, query.focus_lon)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("No places found for '{}'", query.query.trim())))
}

/// Search for places, answered as suggestions
#[utoipa::path(
    get,
    path = "/api/geocoding/search/suggestions",
    tag = "geocoding",
    params(SearchQuery),
    responses(
        (status = 200, description = "Suggestions in provider order, possibly empty", body = Vec<Suggestion>),
        (status = 400, description = "Blank query or bad focus", body = crate::error::ErrorResponse),
        (status = 502, description = "Provider returned an invalid response", body = crate::error::ErrorResponse),
        (status = 503, description = "Provider unavailable", body = crate::error::ErrorResponse),
        (status = 504, description = "Provider timed out", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn search_suggestions(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<SearchQuery>,
) -> Result<Json<Vec<Suggestion>>, ApiError> {
    let suggestions = state
        .geocoding
        .search_suggestions(&query.query, query.focus_lat, query.focus_lon)
        .await?;
    Ok(Json(suggestions))
}
