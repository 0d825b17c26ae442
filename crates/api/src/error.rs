use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hms_core::error::CoreError;

use crate::response::error_body;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the API's
/// `{ "success": false, "errors": [{ "msg": ... }] }` error envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `hms_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Field validation failures answered with 400, one message per field.
    #[error("Validation failed")]
    Validation(Vec<String>),

    /// Field validation failures answered with 422 (the attendance
    /// endpoints alone use this status for malformed input).
    #[error("Validation failed")]
    Unprocessable(Vec<String>),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, messages) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    vec![format!("{entity} with id {id} not found")],
                ),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, vec![msg.clone()]),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, vec![msg.clone()]),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, vec![msg.clone()]),
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, vec![msg.clone()]),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        vec!["Server error".to_string()],
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, vec![msg.clone()]),
            AppError::Validation(msgs) => (StatusCode::BAD_REQUEST, msgs.clone()),
            AppError::Unprocessable(msgs) => (StatusCode::UNPROCESSABLE_ENTITY, msgs.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec!["Server error".to_string()],
                )
            }
        };

        (status, axum::Json(error_body(messages))).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and messages.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`)
///   map to 409.
/// - Everything else maps to 500 with a sanitized message; the detail is
///   logged but never leaked to the caller.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, Vec<String>) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            vec!["Resource not found".to_string()],
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        vec![format!(
                            "Duplicate value violates unique constraint: {constraint}"
                        )],
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                vec!["Server error".to_string()],
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                vec!["Server error".to_string()],
            )
        }
    }
}

/// Flatten `validator` failures into one human-readable message per field.
pub fn validation_messages(errors: &validator::ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    for (field, errs) in errors.field_errors() {
        for err in errs {
            match &err.message {
                Some(msg) => messages.push(msg.to_string()),
                None => messages.push(format!("{field} is invalid")),
            }
        }
    }
    messages.sort();
    messages
}
