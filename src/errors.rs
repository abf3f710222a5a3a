//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("{0}")]
    NotFound(String),

    // Validation
    #[error("Error on validation attributes")]
    Validation {
        path: String,
        errors: Vec<FieldError>,
    },

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // External service errors
    #[error("Database error")]
    Database(#[from] mongodb::error::Error),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// A single field-level validation failure.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field_name: String,
    pub message: String,
}

/// Error response body shared by all error variants.
///
/// Validation failures additionally carry the `errors` list and the
/// request path that was rejected.
#[derive(Debug, Serialize)]
struct ErrorBody {
    timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    status: u16,
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<FieldError>,
}

impl AppError {
    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation { .. } | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short reason phrase for the `error` field
    fn reason(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "Not Found",
            AppError::Validation { .. } => "Validation error",
            AppError::BadRequest(_) => "Bad Request",
            AppError::Database(_) | AppError::Internal(_) => "Internal Server Error",
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            // Hide details for internal errors
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Show full message for client errors
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.reason().to_string();
        let message = self.user_message();
        let (path, errors) = match self {
            AppError::Validation { path, errors } => (Some(path), errors),
            _ => (None, Vec::new()),
        };

        let body = ErrorBody {
            timestamp: Utc::now(),
            path,
            status: status.as_u16(),
            error,
            message,
            errors,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn not_found(id: &str, entity: &str) -> Self {
        AppError::NotFound(format!("Object not found. Id: {}, Type {}", id, entity))
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
