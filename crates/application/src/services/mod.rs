//! Application services - Use case implementations

mod distance_service;
mod geocoding_service;

pub use distance_service::calculate_distance;
pub use geocoding_service::{
    AutocompleteParams, DEFAULT_SUGGESTION_SIZE, GeocodingService, MAX_SUGGESTION_SIZE,
    MIN_SUGGESTION_SIZE,
};
