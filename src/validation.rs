//! Request-time validation: a JSON extractor that runs the field constraint
//! checks before a handler ever sees the payload, and helpers shared with
//! the services for entity-level validation.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use crate::error::AppError;

/// A single field-level violation.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub code: String,
}

/// Payload of `AppError::Validation`: every failing constraint, not just
/// the first one.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

/// JSON body extractor that validates the deserialized value.
///
/// Rejects with 400 carrying the full violation list, so a client can fix
/// all problems in one round trip.
pub struct Validated<T>(pub T);

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|err| AppError::BadRequest(err.to_string()))?;
        validate(&value)?;
        Ok(Validated(value))
    }
}

/// Runs a value's constraint checks, collecting every violation.
pub fn validate(value: &impl Validate) -> Result<(), AppError> {
    value
        .validate()
        .map_err(|errors| AppError::Validation(convert(errors)))
}

/// Path and query identifiers must be positive; checked before any storage
/// access.
pub fn require_positive(id: i64) -> Result<(), AppError> {
    if id <= 0 {
        return Err(AppError::BadRequest(format!(
            "ID must be a positive number, got: {id}"
        )));
    }
    Ok(())
}

fn convert(errors: validator::ValidationErrors) -> ValidationErrorResponse {
    let mut fields = Vec::new();
    for (field, violations) in errors.field_errors() {
        for violation in violations {
            fields.push(FieldError {
                field: field.to_string(),
                message: violation
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| violation.code.to_string()),
                code: violation.code.to_string(),
            });
        }
    }
    ValidationErrorResponse { errors: fields }
}
