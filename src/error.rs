//! Error types for the relay
//!
//! Every failure ends the request with exactly one JSON response of the
//! form `{"error": ...}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::error;

/// Message returned when no usable credential is configured
pub const CONFIGURATION_ERROR_MESSAGE: &str =
    "Configuration Error: Authentication token not set or invalid.";

/// Message returned for every internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Inference API token is missing or is a placeholder")]
    MissingCredential,

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Upstream answered with a non-success status
    #[error("Upstream error {status}: {error}")]
    Upstream { status: StatusCode, error: Value },

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: Value,
}

impl ErrorResponse {
    fn message(message: impl Into<String>) -> Self {
        Self {
            error: Value::String(message.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::MissingCredential => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::message(CONFIGURATION_ERROR_MESSAGE),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::message(msg)),
            AppError::Upstream { status, error } => (status, ErrorResponse { error }),
            internal @ (AppError::HttpError(_) | AppError::Internal(_)) => {
                error!(error = %internal, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::message(INTERNAL_ERROR_MESSAGE),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
