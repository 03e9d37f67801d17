//! Pelias geocoding integration for GeoGateway
//!
//! Talks to a [Pelias](https://github.com/pelias/documentation) API instance
//! (self-hosted or a hosted offering such as geocode.earth) and reshapes its
//! GeoJSON responses into the flattened records of the `domain` crate.
//!
//! # Architecture
//!
//! [`GeocodeClient`] defines the four provider operations, implemented by
//! [`PeliasClient`]. Every operation builds a [`GeocodeQuery`], which renders
//! itself into a [`QueryParams`] set; the client issues exactly one GET per
//! call and returns the raw [`FeatureCollection`]. The [`projection`] module
//! turns that collection into [`domain::LocationResult`] and
//! [`domain::Suggestion`] values.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_pelias::{GeocodeClient, PeliasClient, PeliasConfig, projection};
//!
//! let client = PeliasClient::new(&PeliasConfig::default())?;
//! let features = client.geocode("1600 Pennsylvania Ave NW, Washington", None).await?;
//! let best = projection::first_location(&features, "1600 Pennsylvania Ave NW");
//! ```

mod client;
mod config;
mod error;
mod models;
pub mod projection;
mod query;

pub use client::{GeocodeClient, PeliasClient};
pub use config::PeliasConfig;
pub use error::{ClientBuildError, PeliasError};
pub use models::{Feature, FeatureCollection, FeatureProperties, Geometry};
pub use query::{
    AutocompleteOptions, DEFAULT_AUTOCOMPLETE_SIZE, GeocodeQuery, MAX_AUTOCOMPLETE_SIZE,
    MIN_AUTOCOMPLETE_SIZE, QueryParams,
};
