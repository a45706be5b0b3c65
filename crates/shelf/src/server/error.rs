//! Error responses for the HTTP server.
//!
//! Every failure is rendered as `{ "error": "<message>" }` with a matching status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use shelfapp::error::ShelfError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing admin cookie (401)
    #[error("Unauthorized")]
    Unauthorized,

    /// Wrong username or password (401)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Admin credentials are not set in the environment (500)
    #[error("Admin credentials not configured")]
    NotConfigured,

    /// Missing or malformed input (400)
    #[error("{0}")]
    Validation(String),

    /// Nothing matched (404)
    #[error("{0}")]
    NotFound(String),

    /// The operation failed; the message is safe to show to clients (500)
    #[error("{0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Map a store error, logging the detail and exposing only `public` for server faults.
    pub fn from_store(err: ShelfError, public: &str) -> Self {
        match err {
            ShelfError::Validation(msg) => AppError::Validation(msg),
            other => {
                tracing::error!(error = %other, "{public}");
                AppError::Internal(public.to_string())
            }
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::NotConfigured | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_keep_their_message() {
        let err = AppError::from_store(
            ShelfError::Validation("Name, affiliateLink, and category are required".into()),
            "Failed to add product",
        );
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("affiliateLink"));
    }

    #[test]
    fn write_failures_hide_details() {
        let err = AppError::from_store(
            ShelfError::WriteFailure("disk full".into()),
            "Failed to add product",
        );
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to add product");
    }
}
