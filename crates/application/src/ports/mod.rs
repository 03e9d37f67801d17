//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod geocoding_port;

pub use geocoding_port::{AutocompleteRequest, GeocodingPort};
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
