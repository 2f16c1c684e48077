//! HTTP-facing error type.
//!
//! Core errors ([`UrlError`]) and request validation errors are mapped onto
//! [`AppError`], which renders as a JSON body:
//!
//! ```json
//! { "error": { "code": "invalid_url", "message": "...", "details": { "input": "http://" } } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::error::{InvalidUrlReason, UrlError};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload, also embedded in batch results.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    InvalidUrl { message: String, details: Value },
    InvalidBaseUrl { message: String, details: Value },
    Validation { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl { .. }
            | AppError::InvalidBaseUrl { .. }
            | AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its serializable payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::InvalidUrl { message, details } => ("invalid_url", message, details),
            AppError::InvalidBaseUrl { message, details } => {
                ("invalid_base_url", message, details)
            }
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl From<UrlError> for AppError {
    fn from(err: UrlError) -> Self {
        let message = err.to_string();
        match err {
            UrlError::InvalidUrl { input, reason } => AppError::InvalidUrl {
                message,
                details: json!({
                    "input": input,
                    "reason": match reason {
                        InvalidUrlReason::NotFullyQualified => "not_fully_qualified",
                        InvalidUrlReason::AbsoluteWithBase => "absolute_with_base",
                    },
                }),
            },
            UrlError::InvalidBaseUrl { input, problem } => AppError::InvalidBaseUrl {
                message,
                details: json!({ "input": input, "problem": problem.as_str() }),
            },
            UrlError::InternalConsistency(_) => {
                tracing::error!(error = %message, "URL core invariant violated");
                AppError::internal("Internal error", json!({}))
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Request validation failed", details)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}
