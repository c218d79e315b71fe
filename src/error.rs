use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Application-wide error taxonomy.
///
/// Every fallible operation in the service resolves to one of these variants;
/// the [`IntoResponse`] impl maps them onto HTTP status codes and a uniform
/// JSON error envelope.
#[derive(Debug)]
pub enum AppError {
    /// Malformed input: bad URL, out-of-range expiry, bad custom-key format.
    Validation { message: String, details: Value },
    /// The requested record does not exist and never did.
    NotFound { message: String, details: Value },
    /// The key existed but is inactive or expired. Used only by redirect
    /// resolution, distinct from [`AppError::NotFound`].
    Gone { message: String, details: Value },
    /// A short key is already taken (custom key, or a generated-key race).
    Conflict { message: String, details: Value },
    /// The record is already inactive; a second deactivation is a caller error.
    AlreadyDeactivated { message: String, details: Value },
    /// Key generation exhausted its collision-retry budget.
    KeyGenerationExhausted { message: String, details: Value },
    /// The store is temporarily unreachable; safe to retry.
    Unavailable { message: String, details: Value },
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
    pub fn gone(message: impl Into<String>, details: Value) -> Self {
        Self::Gone {
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
    pub fn already_deactivated(message: impl Into<String>, details: Value) -> Self {
        Self::AlreadyDeactivated {
            message: message.into(),
            details,
        }
    }
    pub fn key_generation_exhausted(message: impl Into<String>, details: Value) -> Self {
        Self::KeyGenerationExhausted {
            message: message.into(),
            details,
        }
    }
    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
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

    fn message(&self) -> &str {
        match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Gone { message, .. }
            | AppError::Conflict { message, .. }
            | AppError::AlreadyDeactivated { message, .. }
            | AppError::KeyGenerationExhausted { message, .. }
            | AppError::Unavailable { message, .. }
            | AppError::Internal { message, .. } => message,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Gone { message, details } => (StatusCode::GONE, "gone", message, details),
            AppError::Conflict { message, details } => {
                (StatusCode::CONFLICT, "conflict", message, details)
            }
            AppError::AlreadyDeactivated { message, details } => (
                StatusCode::CONFLICT,
                "already_deactivated",
                message,
                details,
            ),
            AppError::KeyGenerationExhausted { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "key_generation_exhausted",
                message,
                details,
            ),
            AppError::Unavailable { message, details } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "store_unavailable",
                message,
                details,
            ),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Translates a driver error into the application taxonomy.
///
/// Unique-constraint violations become [`AppError::Conflict`] so that insert
/// races on `short_key` surface as a duplicate-key conflict rather than a
/// server failure. Connection-level failures become [`AppError::Unavailable`].
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return AppError::conflict(
                "Short key already exists",
                json!({ "constraint": db.constraint() }),
            );
        }
        if db.is_foreign_key_violation() {
            return AppError::bad_request(
                "Referenced short URL does not exist",
                json!({ "constraint": db.constraint() }),
            );
        }
    }

    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            AppError::unavailable("Store unavailable", json!({}))
        }
        _ => AppError::internal("Database error", json!({})),
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Request validation failed",
            serde_json::to_value(&e).unwrap_or_else(|_| json!({})),
        )
    }
}
