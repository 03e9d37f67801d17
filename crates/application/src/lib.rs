//! Application layer - Use cases and orchestration
//!
//! Defines the geocoding port the HTTP boundary talks to and the services
//! that apply boundary validation and result semantics on top of it.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
