//! Error types for Gramsnap
//!
//! All errors in the application are converted to `AppError`,
//! which implements `IntoResponse` for proper HTTP error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Application-wide error type
///
/// This enum represents all possible errors that can occur
/// in the application. It implements `IntoResponse` to
/// automatically convert errors to appropriate HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Username query parameter missing or blank (400)
    #[error("Username parameter is required")]
    MissingUsername,

    /// Profile does not exist upstream (404)
    #[error("Profile does not exist")]
    ProfileNotFound,

    /// Profile is private and not followed (403)
    #[error("This is a private account. Data access is restricted")]
    PrivateProfile,

    /// Profile lookup failed for any other reason (500)
    #[error("{0}")]
    Upstream(String),

    /// Artifact I/O error (500)
    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV log error (500)
    #[error("CSV log error: {0}")]
    Csv(#[from] csv::Error),

    /// HTTP client error (500)
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Configuration error (500)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server error (500)
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl IntoResponse for AppError {
    /// Convert error to HTTP response
    ///
    /// Maps each error variant to appropriate HTTP status code
    /// and JSON error body. The 500 family carries the underlying
    /// message so the caller sees what the fetch actually hit.
    fn into_response(self) -> Response {
        use axum::Json;

        let (status, error_type) = match &self {
            AppError::MissingUsername => (StatusCode::BAD_REQUEST, "invalid_request"),
            AppError::ProfileNotFound => (StatusCode::NOT_FOUND, "not_found"),
            AppError::PrivateProfile => (StatusCode::FORBIDDEN, "forbidden"),
            AppError::Upstream(_) => (StatusCode::INTERNAL_SERVER_ERROR, "upstream"),
            AppError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "io"),
            AppError::Csv(_) => (StatusCode::INTERNAL_SERVER_ERROR, "csv"),
            AppError::HttpClient(_) => (StatusCode::INTERNAL_SERVER_ERROR, "http_client"),
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        };

        // Record error metric
        use crate::metrics::ERRORS_TOTAL;
        ERRORS_TOTAL
            .with_label_values(&[error_type, "unknown"])
            .inc();

        let body = Json(serde_json::json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
