//! API error type with HTTP response mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

use child_health_booklet_domain::services::{BookletError, RecordServiceError};

use crate::entities::common::PublicErrorResponse;

/// API-level error type that maps to HTTP responses
#[derive(Debug)]
pub enum ApiError {
    /// Missing, mistyped or empty fields
    Validation(String),
    /// Request body rejected before it could be parsed
    Rejected(StatusCode, String),
    /// Unknown health identifier, with the status to answer with
    NotFound(StatusCode),
    /// Anything else; the cause is logged, never returned
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(message) => {
                warn!("Rejected invalid record: {}", message);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    PublicErrorResponse::new("validation_error", message),
                )
            }
            ApiError::Rejected(status, message) => {
                warn!("Rejected request body: {}", message);
                (status, PublicErrorResponse::new("bad_request", message))
            }
            ApiError::NotFound(status) => (status, PublicErrorResponse::not_found()),
            ApiError::Internal(cause) => {
                error!("Internal server error: {}", cause);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    PublicErrorResponse::new("internal_error", "An unexpected error occurred"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection.status() {
            StatusCode::UNPROCESSABLE_ENTITY => ApiError::Validation(rejection.body_text()),
            status => ApiError::Rejected(status, rejection.body_text()),
        }
    }
}

impl From<RecordServiceError> for ApiError {
    fn from(err: RecordServiceError) -> Self {
        match err {
            RecordServiceError::ValidationError(message) => ApiError::Validation(message),
            RecordServiceError::NotFound(_) => ApiError::NotFound(StatusCode::NOT_FOUND),
            RecordServiceError::RepositoryError(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<BookletError> for ApiError {
    fn from(err: BookletError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_errors_map_to_statuses() {
        let cases = [
            (RecordServiceError::ValidationError("x".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (RecordServiceError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (RecordServiceError::RepositoryError("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }

    #[tokio::test]
    async fn test_validation_body_is_error_and_message_only() {
        let response = ApiError::Validation("name must not be empty".into()).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "error": "validation_error",
                "message": "name must not be empty"
            })
        );
    }
}
