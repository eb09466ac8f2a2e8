//! REST API error types
//!
//! Every failure becomes a flat JSON body `{"code", "message", "field"?}`
//! with the matching HTTP status code.

use pa_core::CoreError;
use pa_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Missing required field or malformed identifier (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Unreadable body or rejected insert (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Handler did not finish in time (504)
    #[error("Timeout: {message} {location}")]
    Timeout {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    /// Validation failure with a caller-chosen message, tagged with the
    /// field the core check rejected
    #[track_caller]
    pub fn missing_fields(error: CoreError, message: &str) -> Self {
        ApiError::Validation {
            message: message.to_string(),
            field: Some(error.field().to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// A failed insert is the client's fault: bad reference or bad values
    #[track_caller]
    pub fn rejected_insert(error: DbError) -> Self {
        ApiError::BadRequest {
            message: error.message(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let status = self.status_code();
        let body = match self {
            ApiError::NotFound { message, .. } => ApiErrorBody {
                code: "NOT_FOUND".into(),
                message,
                field: None,
            },
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                message,
                field,
            },
            ApiError::BadRequest { message, .. } => ApiErrorBody {
                code: "BAD_REQUEST".into(),
                message,
                field: None,
            },
            ApiError::Internal { message, .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message,
                field: None,
            },
            ApiError::Timeout { message, .. } => ApiErrorBody {
                code: "TIMEOUT".into(),
                message,
                field: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert pa-db errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if e.is_constraint_violation() {
            return ApiError::BadRequest {
                message: e.message(),
                location,
            };
        }

        ApiError::Internal {
            message: e.message(),
            location,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
