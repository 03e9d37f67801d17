//! Result of a local distance calculation

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::distance::km_to_miles;
use crate::value_objects::GeoLocation;

/// Great-circle distance between two points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DistanceResult {
    /// Start point
    pub origin: GeoLocation,
    /// End point
    pub destination: GeoLocation,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Distance in miles, derived from `distance_km`
    pub distance_miles: f64,
}

impl DistanceResult {
    /// Compute the distance between two validated locations
    #[must_use]
    pub fn between(origin: GeoLocation, destination: GeoLocation) -> Self {
        let distance_km = origin.distance_km(&destination);
        Self {
            origin,
            destination,
            distance_km,
            distance_miles: km_to_miles(distance_km),
        }
    }
}
