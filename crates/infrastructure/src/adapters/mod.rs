//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod pelias_adapter;

pub use pelias_adapter::PeliasGeocodingAdapter;
