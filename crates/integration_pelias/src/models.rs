//! Pelias GeoJSON response models
//!
//! Only the fields GeoGateway projects are modelled; everything else in the
//! provider envelope (bbox, geocoding metadata, addendum) is ignored.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Ordered feature list as returned by the provider
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeatureCollection {
    /// Candidate matches, best first
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// One candidate match
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feature {
    /// Point geometry
    pub geometry: Geometry,
    /// Descriptive properties
    #[serde(default)]
    pub properties: FeatureProperties,
}

/// GeoJSON point geometry
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Geometry {
    /// Provider order: `[longitude, latitude]`
    pub coordinates: [f64; 2],
}

impl Geometry {
    /// Longitude (first GeoJSON component)
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    /// Latitude (second GeoJSON component)
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

/// Feature properties used by the projections
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeatureProperties {
    pub label: Option<String>,
    pub locality: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub postalcode: Option<String>,
    pub layer: Option<String>,
    pub source: Option<String>,
    pub confidence: Option<f64>,
}

impl FeatureCollection {
    /// Parse a provider response body
    ///
    /// Object keys are matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the body is not valid JSON or does not have
    /// the feature-collection shape.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        serde_json::from_value(lowercase_keys(value))
    }

    /// Whether the provider returned no candidates
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Number of candidates
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Best match, if any
    #[must_use]
    pub fn first(&self) -> Option<&Feature> {
        self.features.first()
    }
}

fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k.to_lowercase(), lowercase_keys(v)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}
