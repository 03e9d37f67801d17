//! Distance calculation use case
//!
//! Purely local; never touches the geocoding provider.

use domain::{DistanceResult, DomainError, GeoLocation};
use tracing::debug;

use crate::error::ApplicationError;

/// Great-circle distance between two raw coordinate pairs
///
/// # Errors
///
/// Returns a domain error if either point is out of range.
pub fn calculate_distance(
    origin: (f64, f64),
    destination: (f64, f64),
) -> Result<DistanceResult, ApplicationError> {
    let origin = GeoLocation::new(origin.0, origin.1).map_err(DomainError::from)?;
    let destination =
        GeoLocation::new(destination.0, destination.1).map_err(DomainError::from)?;

    let result = DistanceResult::between(origin, destination);
    debug!(%origin, %destination, km = result.distance_km, "Distance calculated");
    Ok(result)
}
