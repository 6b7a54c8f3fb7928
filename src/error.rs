use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::validation::ValidationErrorResponse;

/// Application error taxonomy. Every terminal failure of the request
/// pipeline maps onto exactly one variant, and each variant onto one HTTP
/// status.
#[derive(Debug)]
pub enum AppError {
    /// A path or query parameter failed a precondition.
    BadRequest(String),
    /// One or more field constraints were violated; all violations are
    /// reported together.
    Validation(ValidationErrorResponse),
    /// A uniqueness precondition failed.
    AlreadyExists(String),
    /// The target row or a referenced parent does not exist.
    NotFound(String),
    /// The storage layer failed in a way the pipeline does not model.
    Database(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({
                    "error": "Validation failed",
                    "details": details.errors,
                }),
            ),
            AppError::BadRequest(msg) | AppError::AlreadyExists(msg) => {
                (StatusCode::BAD_REQUEST, serde_json::json!({ "error": msg }))
            }
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, serde_json::json!({ "error": msg }))
            }
            AppError::Database(msg) | AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": msg }),
            ),
        };
        (status, Json(body)).into_response()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::Validation(details) => {
                write!(f, "Validation Error: {} violations", details.errors.len())
            }
            AppError::AlreadyExists(msg) => write!(f, "Already Exists: {msg}"),
            AppError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            AppError::Database(msg) => write!(f, "Database Error: {msg}"),
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
        }
    }
}

/// The storage layer is the final authority on uniqueness: a constraint
/// violation that slips past the optimistic pre-check surfaces as
/// `AlreadyExists`, not as a crash.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Entity not found".into()),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::AlreadyExists("Resource already exists".into())
            }
            other => AppError::Database(other.to_string()),
        }
    }
}
