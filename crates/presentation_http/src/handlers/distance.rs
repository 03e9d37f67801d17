//! Distance handler
//!
//! Local great-circle calculation; no provider call.

use axum::Json;
use domain::DistanceResult;
use serde::Deserialize;
use tracing::instrument;
use utoipa::ToSchema;
use validator::Validate;

use crate::{error::ApiError, middleware::ValidatedJson};

/// One endpoint of a distance request
#[derive(Debug, Clone, Copy, Deserialize, Validate, ToSchema)]
#[schema(example = json!({"latitude": 47.6062, "longitude": -122.3321}))]
pub struct PointBody {
    /// Latitude (-90 to 90)
    #[validate(range(min = -90.0, max = 90.0, message = "must be between -90 and 90"))]
    pub latitude: f64,
    /// Longitude (-180 to 180)
    #[validate(range(min = -180.0, max = 180.0, message = "must be between -180 and 180"))]
    pub longitude: f64,
}

/// Distance request body
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DistanceRequest {
    #[validate(nested)]
    pub origin: PointBody,
    #[validate(nested)]
    pub destination: PointBody,
}

/// Great-circle distance between two points
#[utoipa::path(
    post,
    path = "/api/distance",
    tag = "distance",
    request_body = DistanceRequest,
    responses(
        (status = 200, description = "Distance in kilometers and miles", body = DistanceResult),
        (status = 400, description = "Malformed body or coordinates out of range", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(request))]
pub async fn calculate_distance(
    ValidatedJson(request): ValidatedJson<DistanceRequest>,
) -> Result<Json<DistanceResult>, ApiError> {
    let result = application::calculate_distance(
        (request.origin.latitude, request.origin.longitude),
        (request.destination.latitude, request.destination.longitude),
    )?;
    Ok(Json(result))
}
