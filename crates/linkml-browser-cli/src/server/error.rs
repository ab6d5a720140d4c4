//! API error types and handling.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use linkml_browser::BrowserError;
use serde::Serialize;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// The served folder is not a loadable browser.
    Invalid(BrowserError),
    /// Any other library failure.
    Internal(BrowserError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::Invalid(e) => (StatusCode::UNPROCESSABLE_ENTITY, "invalid_gallery", e.to_string()),
            ApiError::Internal(e) => (StatusCode::INTERNAL_SERVER_ERROR, "internal", e.to_string()),
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<BrowserError> for ApiError {
    fn from(err: BrowserError) -> Self {
        match err {
            BrowserError::GalleryCheck(_) => ApiError::Invalid(err),
            other => ApiError::Internal(other),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Invalid(e) => write!(f, "Invalid gallery: {}", e),
            ApiError::Internal(e) => write!(f, "Internal error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}
