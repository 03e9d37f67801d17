//! Request-scoped result records
//!
//! Every record here is built fresh for a single request from a provider
//! response (or a local computation) and dropped once the response is sent.

mod distance_result;
mod location_result;
mod suggestion;

pub use distance_result::DistanceResult;
pub use location_result::LocationResult;
pub use suggestion::{Suggestion, UNKNOWN_LOCATION_LABEL};
