use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use talentdesk_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{ "error", "code" }` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `talentdesk_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A malformed request (unparsable JSON, wrong content type).
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

fn classify_core_error(core: &CoreError) -> (StatusCode, &'static str, String) {
    match core {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::UnknownReference { .. } => {
            tracing::warn!(error = %core, "Rejected unknown reference");
            (
                StatusCode::BAD_REQUEST,
                "UNKNOWN_REFERENCE",
                core.to_string(),
            )
        }
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Conflict(msg) => {
            tracing::warn!(error = %msg, "Rejected duplicate value");
            (StatusCode::BAD_REQUEST, "CONFLICT", msg.clone())
        }
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
        CoreError::Forbidden(msg) => {
            tracing::warn!(error = %msg, "Rejected forbidden request");
            (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone())
        }
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique violations (`23505`) on a `uq_` constraint map to 400 `CONFLICT`.
/// - Foreign key violations (`23503`) map to 400 `UNKNOWN_REFERENCE`.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.code().as_deref() {
                Some("23505") if constraint.starts_with("uq_") => {
                    tracing::warn!(constraint, "Unique constraint violated");
                    (
                        StatusCode::BAD_REQUEST,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    )
                }
                Some("23503") => {
                    tracing::warn!(constraint, "Foreign key constraint violated");
                    (
                        StatusCode::BAD_REQUEST,
                        "UNKNOWN_REFERENCE",
                        format!("Referenced record does not exist: {constraint}"),
                    )
                }
                _ => {
                    tracing::error!(error = %db_err, "Database error");
                    internal()
                }
            }
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
