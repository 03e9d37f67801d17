//! HTTP request handlers

pub mod distance;
pub mod geocoding;
pub mod health;
