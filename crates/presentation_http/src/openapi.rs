//! OpenAPI documentation module
//!
//! Provides OpenAPI 3.0 documentation for the GeoGateway HTTP API and serves
//! it through Swagger UI.

// Allow clippy warnings from macro-generated code in utoipa derive
#![allow(clippy::needless_for_each)]

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{handlers, state::AppState};

/// Path of the generated OpenAPI document
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI documentation for GeoGateway
#[derive(OpenApi)]
#[openapi(
    info(
        title = "GeoGateway API",
        description = "Geocoding, place search and distance API in front of a Pelias provider",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "health", description = "Liveness endpoint"),
        (name = "geocoding", description = "Forward and reverse geocoding, search and autocomplete"),
        (name = "distance", description = "Great-circle distance calculation")
    ),
    paths(
        handlers::health::health_check,
        handlers::geocoding::get_location,
        handlers::geocoding::geocode_address,
        handlers::geocoding::autocomplete,
        handlers::geocoding::search_places,
        handlers::geocoding::search_suggestions,
        handlers::distance::calculate_distance,
    ),
    components(
        schemas(
            handlers::health::HealthResponse,
            handlers::distance::DistanceRequest,
            handlers::distance::PointBody,
            domain::GeoLocation,
            domain::LocationResult,
            domain::Suggestion,
            domain::DistanceResult,
            crate::error::ErrorResponse,
        )
    )
)]
#[derive(Debug)]
pub struct ApiDoc;

/// Create OpenAPI documentation routes
///
/// Adds the following routes:
/// - `/api-docs/openapi.json` - OpenAPI specification (used by Swagger UI)
/// - `/swagger-ui/*` - Swagger UI interactive documentation
pub fn create_openapi_routes() -> Router<AppState> {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_spec_is_valid() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_string_pretty(&doc).expect("Failed to serialize OpenAPI spec");
        assert!(json.contains("GeoGateway API"));
        assert!(json.contains("/health"));
        assert!(json.contains("/api/geocoding/reverse"));
        assert!(json.contains("/api/geocoding/search/suggestions"));
        assert!(json.contains("/api/distance"));
    }

    #[test]
    fn openapi_has_all_tags() {
        let doc = ApiDoc::openapi();
        let tags: Vec<&str> = doc
            .tags
            .as_ref()
            .map(|t| t.iter().map(|tag| tag.name.as_str()).collect())
            .unwrap_or_default();

        assert_eq!(tags, vec!["health", "geocoding", "distance"]);
    }

    #[test]
    fn query_params_use_camel_case() {
        let json = serde_json::to_string(&ApiDoc::openapi()).unwrap();
        assert!(json.contains("\"focusLat\""));
        assert!(json.contains("\"focusLon\""));
    }

    #[test]
    fn openapi_has_result_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("Missing components").schemas;
        assert!(schemas.contains_key("LocationResult"));
        assert!(schemas.contains_key("Suggestion"));
        assert!(schemas.contains_key("DistanceResult"));
        assert!(schemas.contains_key("ErrorResponse"));
    }
}
