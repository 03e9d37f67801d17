//! Great-circle distance
//!
//! Haversine formula on a spherical Earth. Inputs are not range-checked here;
//! callers validate coordinates before calling.

/// Mean Earth radius used for all distance calculations
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Fixed kilometer to statute mile factor
pub const KM_TO_MILES: f64 = 0.621_371;

/// Haversine distance between two points given in degrees, in kilometers
#[must_use]
pub fn haversine_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (lat1_rad.cos() * lat2_rad.cos()).mul_add(
        (delta_lon / 2.0).sin().powi(2),
        (delta_lat / 2.0).sin().powi(2),
    )
    .min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Convert a kilometer distance to miles
#[must_use]
pub fn km_to_miles(km: f64) -> f64 {
    km * KM_TO_MILES
}
