//! Projection of provider features into local result records
//!
//! Pure functions, no I/O. Provider geometry is `[longitude, latitude]`;
//! every projection swaps it into `(latitude, longitude)`.

use domain::{GeoLocation, LocationResult, Suggestion, UNKNOWN_LOCATION_LABEL};

use crate::models::{Feature, FeatureCollection};

/// Coordinates of a feature in local order
#[must_use]
pub const fn coordinates(feature: &Feature) -> GeoLocation {
    GeoLocation::new_unchecked(feature.geometry.latitude(), feature.geometry.longitude())
}

/// Flatten one feature into a [`LocationResult`]
///
/// `fallback_label` is used when the provider omits the label.
#[must_use]
pub fn to_location_result(feature: &Feature, fallback_label: &str) -> LocationResult {
    let props = &feature.properties;
    LocationResult {
        latitude: feature.geometry.latitude(),
        longitude: feature.geometry.longitude(),
        label: props
            .label
            .clone()
            .unwrap_or_else(|| fallback_label.to_string()),
        locality: props.locality.clone().unwrap_or_default(),
        region: props.region.clone().unwrap_or_default(),
        country: props.country.clone().unwrap_or_default(),
        postal_code: props.postalcode.clone().unwrap_or_default(),
        layer: props.layer.clone().unwrap_or_default(),
        source: props.source.clone().unwrap_or_default(),
        confidence: props.confidence.unwrap_or(0.0),
    }
}

/// Flatten one feature into a [`Suggestion`]
#[must_use]
pub fn to_suggestion(feature: &Feature) -> Suggestion {
    let props = &feature.properties;
    Suggestion {
        label: props
            .label
            .clone()
            .unwrap_or_else(|| UNKNOWN_LOCATION_LABEL.to_string()),
        latitude: feature.geometry.latitude(),
        longitude: feature.geometry.longitude(),
        layer: props.layer.clone().unwrap_or_default(),
        source: props.source.clone().unwrap_or_default(),
        locality: props.locality.clone().unwrap_or_default(),
        region: props.region.clone().unwrap_or_default(),
        country: props.country.clone().unwrap_or_default(),
    }
}

/// Best match as a [`LocationResult`], `None` when the collection is empty
#[must_use]
pub fn first_location(collection: &FeatureCollection, fallback_label: &str) -> Option<LocationResult> {
    collection
        .first()
        .map(|feature| to_location_result(feature, fallback_label))
}

/// Coordinates of the best match, `None` when the collection is empty
#[must_use]
pub fn first_coordinates(collection: &FeatureCollection) -> Option<GeoLocation> {
    collection.first().map(coordinates)
}

/// Every feature as a [`LocationResult`], in provider order
#[must_use]
pub fn all_locations(collection: &FeatureCollection, fallback_label: &str) -> Vec<LocationResult> {
    collection
        .features
        .iter()
        .map(|feature| to_location_result(feature, fallback_label))
        .collect()
}

/// Every feature as a [`Suggestion`], in provider order
#[must_use]
pub fn suggestions(collection: &FeatureCollection) -> Vec<Suggestion> {
    collection.features.iter().map(to_suggestion).collect()
}
