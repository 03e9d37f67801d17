//! Health check handlers

use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

/// Liveness check - is the server running?
///
/// Never contacts the geocoding provider.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Healthy".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_check_reports_healthy() {
        let Json(resp) = health_check().await;
        assert_eq!(resp.status, "Healthy");
        assert_eq!(resp.version, env!("CARGO_PKG_VERSION"));
        assert!(Utc::now() >= resp.timestamp);
    }

    #[test]
    fn health_response_serializes_timestamp() {
        let resp = HealthResponse {
            status: "Healthy".to_string(),
            timestamp: DateTime::<Utc>::UNIX_EPOCH,
            version: "0.1.0".to_string(),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"], "Healthy");
        assert_eq!(json["timestamp"], "1970-01-01T00:00:00Z");
    }
}
