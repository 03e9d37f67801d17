//! Autocomplete suggestion record

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Label shown when the provider returns a feature without a label
pub const UNKNOWN_LOCATION_LABEL: &str = "Unknown Location";

/// One type-ahead candidate, in provider ranking order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Display label
    pub label: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Provider layer
    pub layer: String,
    /// Provider data source
    pub source: String,
    /// City, town or village
    pub locality: String,
    /// State, province or equivalent
    pub region: String,
    /// Country name
    pub country: String,
}
