//! Application error type shared by services, repositories, and handlers.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// JSON error payload returned to clients.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error description embedded in [`ErrorBody`].
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Typed error surfaced by every fallible operation in the crate.
///
/// The variants map one-to-one onto HTTP status codes at the API boundary:
///
/// - [`Validation`](Self::Validation) → 400 — a required input is missing,
///   empty, or structurally invalid; raised before any storage access
/// - [`NotFound`](Self::NotFound) → 404 — an owner-scoped lookup or a code
///   lookup matched nothing
/// - [`Unauthorized`](Self::Unauthorized) → 401 — no valid session token
/// - [`Conflict`](Self::Conflict) → 409 — unique-constraint violation
///   (duplicate username, short-code backstop)
/// - [`Internal`](Self::Internal) → 500 — storage failures pass through
///   unclassified
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Unauthorized { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
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

    /// Converts the error into the wire-format [`ErrorInfo`].
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = self.parts();
        ErrorInfo {
            code,
            message,
            details,
        }
    }

    fn parts(&self) -> (&'static str, String, Value) {
        match self {
            AppError::Validation { message, details } => {
                ("validation_error", message.clone(), details.clone())
            }
            AppError::NotFound { message, details } => {
                ("not_found", message.clone(), details.clone())
            }
            AppError::Unauthorized { message, details } => {
                ("unauthorized", message.clone(), details.clone())
            }
            AppError::Conflict { message, details } => {
                ("conflict", message.clone(), details.clone())
            }
            AppError::Internal { message, details } => {
                ("internal_error", message.clone(), details.clone())
            }
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        let mut response = (status, Json(body)).into_response();

        // RFC 6750: challenge header on 401 responses.
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Request validation failed",
            json!({ "errors": e.to_string() }),
        )
    }
}
