//! Flattened place record for single- and multi-result lookups

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A place resolved by the geocoding provider
///
/// Optional provider properties are flattened to empty strings, never null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationResult {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Human-readable label (e.g. "Pike Place Market, Seattle, WA, USA")
    pub label: String,
    /// City, town or village
    pub locality: String,
    /// State, province or equivalent
    pub region: String,
    /// Country name
    pub country: String,
    /// Postal code
    pub postal_code: String,
    /// Provider layer (address, venue, locality, ...)
    pub layer: String,
    /// Provider data source (osm, openaddresses, ...)
    pub source: String,
    /// Provider confidence score, 0 when not reported
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case() {
        let result = LocationResult {
            latitude: 47.61,
            longitude: -122.33,
            label: "Seattle, WA, USA".to_string(),
            locality: "Seattle".to_string(),
            region: "Washington".to_string(),
            country: "United States".to_string(),
            postal_code: "98101".to_string(),
            layer: "locality".to_string(),
            source: "whosonfirst".to_string(),
            confidence: 1.0,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["postalCode"], "98101");
        assert_eq!(json["latitude"], 47.61);
        assert!(json.get("postal_code").is_none());
    }
}
