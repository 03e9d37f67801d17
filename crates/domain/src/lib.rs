//! Domain layer for GeoGateway
//!
//! Contains the coordinate value object, the locally-owned result records
//! that provider responses are projected into, and the great-circle distance
//! calculation. This layer performs no I/O.

pub mod distance;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use distance::{EARTH_RADIUS_KM, KM_TO_MILES, haversine_distance_km, km_to_miles};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
