//! HTTP error type shared by every handler and extractor.
//!
//! All failures leave the service as `{ "error": <message>, "code": <CODE> }`.
//! Anything that maps to a 500 is logged with its detail and answered with
//! the same generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use famous_core::error::CoreError;
use famous_payments::PaymentError;
use serde::Serialize;
use validator::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Gateway failures are logged and reported as a generic 500.
    #[error("Payment gateway error: {0}")]
    Payment(#[from] PaymentError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(errors.to_string()))
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

const INTERNAL_MESSAGE: &str = "An internal error occurred";

type Parts = (StatusCode, &'static str, String);

fn internal_error() -> Parts {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_MESSAGE.to_string(),
    )
}

impl AppError {
    /// Status, machine-readable code and client-facing message.
    fn parts(&self) -> Parts {
        match self {
            AppError::Core(core) => core_parts(core),
            AppError::Database(err) => database_parts(err),
            AppError::Payment(err) => {
                tracing::error!(error = %err, "Payment gateway call failed");
                internal_error()
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal_error()
            }
        }
    }
}

fn core_parts(err: &CoreError) -> Parts {
    let status = match err {
        CoreError::NotFound { .. } | CoreError::NotFoundByKey { .. } => StatusCode::NOT_FOUND,
        CoreError::Validation(_) => StatusCode::BAD_REQUEST,
        CoreError::Conflict(_) => StatusCode::CONFLICT,
        CoreError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        CoreError::Forbidden(_) => StatusCode::FORBIDDEN,
        CoreError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            return internal_error();
        }
    };
    let code = match err {
        CoreError::NotFound { .. } | CoreError::NotFoundByKey { .. } => "NOT_FOUND",
        CoreError::Validation(_) => "VALIDATION_ERROR",
        CoreError::Conflict(_) => "CONFLICT",
        CoreError::Unauthorized(_) => "UNAUTHORIZED",
        CoreError::Forbidden(_) => "FORBIDDEN",
        CoreError::Unavailable(_) => "UNAVAILABLE",
        CoreError::Internal(_) => "INTERNAL_ERROR",
    };
    (status, code, client_message(err))
}

fn client_message(err: &CoreError) -> String {
    match err {
        CoreError::NotFound { entity, id } => format!("{entity} with id {id} not found"),
        CoreError::NotFoundByKey { entity, key } => format!("{entity} '{key}' not found"),
        CoreError::Validation(msg)
        | CoreError::Conflict(msg)
        | CoreError::Unauthorized(msg)
        | CoreError::Forbidden(msg)
        | CoreError::Unavailable(msg)
        | CoreError::Internal(msg) => msg.clone(),
    }
}

/// `RowNotFound` is a 404 and a unique violation on a `uq_*` constraint is
/// a 409. Every other sqlx error is a logged 500.
fn database_parts(err: &sqlx::Error) -> Parts {
    if let sqlx::Error::RowNotFound = err {
        return (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        );
    }

    if let Some(db_err) = err.as_database_error() {
        let constraint = db_err.constraint().unwrap_or_default();
        if db_err.is_unique_violation() && constraint.starts_with("uq_") {
            return (
                StatusCode::CONFLICT,
                "CONFLICT",
                format!("Duplicate value violates unique constraint: {constraint}"),
            );
        }
    }

    tracing::error!(error = %err, "Database error");
    internal_error()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, error) = self.parts();
        (status, Json(ErrorBody { error, code })).into_response()
    }
}
