//! Logging infrastructure
//!
//! Sets up the global `tracing` subscriber with an `EnvFilter` and either a
//! human-readable or a JSON formatter.

mod logging;

pub use logging::{LoggingConfig, TelemetryError, init_tracing};
