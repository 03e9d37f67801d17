//! GeoGateway HTTP presentation layer
//!
//! This crate provides the HTTP API for GeoGateway.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use middleware::{ValidatedJson, ValidatedQuery, ValidationError};
pub use routes::{create_app, create_router};
pub use state::AppState;
