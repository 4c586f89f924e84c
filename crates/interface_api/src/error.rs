//! API error handling
//!
//! Maps the domain error taxonomy onto HTTP responses: validation,
//! reference, and duplicate-ID failures are client errors (400), a missing
//! target record is 404, storage faults are 500, and authentication
//! rejections are 401.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use core_kernel::CoreError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// A store operation failed with one of the domain error kinds
    #[error(transparent)]
    Domain(#[from] CoreError),

    /// Login failed
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Something unexpected happened below the domain layer
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error kind
    pub error: String,
    /// Human-readable message
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::Domain(core) => {
                let (status, kind) = match &core {
                    CoreError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
                    CoreError::ReferenceNotFound(_) => {
                        (StatusCode::BAD_REQUEST, "reference_not_found")
                    }
                    CoreError::DuplicateId(_) => (StatusCode::BAD_REQUEST, "duplicate_id"),
                    CoreError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
                    CoreError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_error"),
                };
                (status, kind, core.message().to_string())
            }
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "Invalid credentials".to_string(),
            ),
            ApiError::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
