//! Request validation
//!
//! `ValidatedJson` and `ValidatedQuery` deserialize a request part and run
//! the `validator` rules on it. Every failure is answered with a 400 and the
//! usual [`ErrorResponse`](crate::error::ErrorResponse) body.

use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Query, Request,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::error::ErrorResponse;

/// Validation error type
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] JsonRejection),
    #[error("Invalid query string: {0}")]
    QueryError(#[from] QueryRejection),
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::JsonError(e) => e.body_text(),
            Self::QueryError(e) => e.body_text(),
            Self::ValidationFailed(msg) => msg.clone(),
        };

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("bad_request", message)),
        )
            .into_response()
    }
}

/// Flatten nested validation errors into `path: message` entries
fn collect_messages(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(errors) => {
                out.extend(errors.iter().map(|error| {
                    format!(
                        "{path}: {}",
                        error
                            .message
                            .as_ref()
                            .map_or_else(|| error.code.to_string(), ToString::to_string)
                    )
                }));
            },
            ValidationErrorsKind::Struct(inner) => collect_messages(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_messages(&format!("{path}[{index}]"), inner, out);
                }
            },
        }
    }
}

fn validate<T: Validate>(value: &T) -> Result<(), ValidationError> {
    value.validate().map_err(|e| {
        let mut messages = Vec::new();
        collect_messages("", &e, &mut messages);
        messages.sort();
        ValidationError::ValidationFailed(messages.join("; "))
    })
}

/// A JSON extractor that also validates the request body
///
/// # Example
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct PointBody {
///     #[validate(range(min = -90.0, max = 90.0))]
///     latitude: f64,
/// }
///
/// async fn handler(ValidatedJson(body): ValidatedJson<PointBody>) {}
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        validate(&value)?;
        Ok(Self(value))
    }
}

/// A query-string extractor that also validates the parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        validate(&value)?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::{Body, to_bytes},
        routing::{self, post},
    };
    use serde::Deserialize;
    use tower::ServiceExt;
    use validator::Validate;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct Point {
        #[validate(range(min = -90.0, max = 90.0, message = "must be between -90 and 90"))]
        latitude: f64,
    }

    #[derive(Debug, Deserialize, Validate)]
    struct Route {
        #[validate(nested)]
        origin: Point,
    }

    #[derive(Debug, Deserialize, Validate)]
    struct SizeQuery {
        #[validate(range(min = 1, max = 20))]
        size: Option<u32>,
    }

    async fn json_handler(ValidatedJson(route): ValidatedJson<Route>) -> String {
        route.origin.latitude.to_string()
    }

    async fn query_handler(ValidatedQuery(query): ValidatedQuery<SizeQuery>) -> String {
        format!("{:?}", query.size)
    }

    fn create_test_app() -> Router {
        Router::new()
            .route("/json", post(json_handler))
            .route("/query", routing::get(query_handler))
    }

    async fn send(request: axum::http::Request<Body>) -> (StatusCode, String) {
        let response = create_test_app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn post_json(body: &'static str) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .method("POST")
            .uri("/json")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn get(uri: &str) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn valid_body_passes() {
        let (status, body) = send(post_json(r#"{"origin": {"latitude": 45.5}}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "45.5");
    }

    #[tokio::test]
    async fn nested_field_error_names_path() {
        let (status, body) = send(post_json(r#"{"origin": {"latitude": 95.0}}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("origin.latitude: must be between -90 and 90"));
        assert!(body.contains("bad_request"));
    }

    #[tokio::test]
    async fn invalid_json_rejected() {
        let (status, _) = send(post_json(r#"{"origin": not valid json}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_field_rejected() {
        let (status, _) = send(post_json(r#"{"origin": {}}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn valid_query_passes() {
        let (status, body) = send(get("/query?size=5")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Some(5)");

        let (status, body) = send(get("/query")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "None");
    }

    #[tokio::test]
    async fn query_out_of_range_rejected() {
        let (status, body) = send(get("/query?size=21")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("size: range"));
    }

    #[tokio::test]
    async fn unparsable_query_rejected() {
        let (status, _) = send(get("/query?size=many")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn validation_error_debug() {
        let error = ValidationError::ValidationFailed("test".to_string());
        let debug = format!("{error:?}");
        assert!(debug.contains("ValidationFailed"));
    }
}
