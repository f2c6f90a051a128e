//! Application error types with HTTP response conversion.

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::models::Collection;

/// Application-level errors for MythRealms.
#[derive(Error, Debug)]
pub enum AppError {
    // Input errors
    #[error("Validation error on '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("Malformed upload: {0}")]
    MalformedUpload(String),

    // Domain errors
    #[error("{} not found: {id}", collection.singular())]
    NotFound { collection: Collection, id: String },

    // Storage errors
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Storage query error: {message}")]
    Query { message: String, query: String },

    // Asset store errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Shorthand for a field-level validation failure.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a missing record.
    pub fn not_found(collection: Collection, id: impl Into<String>) -> Self {
        AppError::NotFound {
            collection,
            id: id.into(),
        }
    }

    /// HTTP status and stable error code for this error.
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            AppError::MalformedUpload(_) => (StatusCode::BAD_REQUEST, "MALFORMED_UPLOAD"),
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::StorageUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "STORAGE_UNAVAILABLE")
            }
            AppError::Query { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "QUERY_ERROR"),
            AppError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

/// JSON error body returned to HTTP callers.
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    code: &'static str,
    detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'a str>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();

        match &self {
            AppError::Query { query, .. } => {
                tracing::error!(error = %self, query = %query, "Storage query failed");
            }
            _ if status.is_server_error() => tracing::error!(error = %self, "Request failed"),
            AppError::NotFound { .. } => tracing::debug!(error = %self, "Request failed"),
            _ => tracing::warn!(error = %self, "Request rejected"),
        }

        // Server-side details stay in the logs.
        let detail = match &self {
            AppError::Validation { message, .. } => message.clone(),
            AppError::Query { .. } | AppError::Internal(_) | AppError::Config(_) => {
                "Internal server error".to_string()
            }
            AppError::Io(_) => "Failed to access asset storage".to_string(),
            other => other.to_string(),
        };

        let field = match &self {
            AppError::Validation { field, .. } => Some(field.as_str()),
            _ => None,
        };

        (status, Json(ErrorBody { code, detail, field })).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation("body", rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::validation("query", rejection.body_text())
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::MalformedUpload(rejection.body_text())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::MalformedUpload(err.body_text())
    }
}
