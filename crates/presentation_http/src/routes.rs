//! Route definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use infrastructure::ServerConfig;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{handlers, middleware, openapi, state::AppState};

/// Create the API router without cross-cutting layers
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health::health_check))
        // Geocoding API
        .route("/api/geocoding/reverse", get(handlers::geocoding::get_location))
        .route("/api/geocoding/geocode", get(handlers::geocoding::geocode_address))
        .route("/api/geocoding/autocomplete", get(handlers::geocoding::autocomplete))
        .route("/api/geocoding/search", get(handlers::geocoding::search_places))
        .route(
            "/api/geocoding/search/suggestions",
            get(handlers::geocoding::search_suggestions),
        )
        // Distance API
        .route("/api/distance", post(handlers::distance::calculate_distance))
        // API documentation
        .merge(openapi::create_openapi_routes())
        // Attach state
        .with_state(state)
}

/// CORS policy from server settings
///
/// An empty origin list allows any origin.
pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

/// Full application: routes plus request id, tracing, body limit and CORS
pub fn create_app(state: AppState) -> Router {
    let server = state.config.server.clone();

    let app = create_router(state).layer(
        ServiceBuilder::new()
            .layer(middleware::set_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(middleware::make_request_span))
            .layer(middleware::propagate_request_id_layer())
            .layer(DefaultBodyLimit::max(server.max_body_size_json_bytes)),
    );

    if server.cors_enabled {
        app.layer(cors_layer(&server))
    } else {
        app
    }
}
