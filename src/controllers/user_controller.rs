use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::error::AppError;
use crate::models::user::{AddressForm, UserRegistrationForm, UserResponse};
use crate::services::UserService;
use crate::state::AppState;
use crate::validation::{require_positive, Validated};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(get_all).post(create))
        .route("/users/{id}", get(get_by_id).delete(delete_by_id))
        .route("/users/{id}/address", axum::routing::put(update_address))
}

async fn get_all(
    State(service): State<UserService>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    service.get_all().await.map(Json)
}

async fn get_by_id(
    State(service): State<UserService>,
    Path(id): Path<i64>,
) -> Result<Json<UserResponse>, AppError> {
    require_positive(id)?;
    service.get_by_id(id).await.map(Json)
}

async fn create(
    State(service): State<UserService>,
    Validated(form): Validated<UserRegistrationForm>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = service.register(form).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn update_address(
    State(service): State<UserService>,
    Path(id): Path<i64>,
    Validated(form): Validated<AddressForm>,
) -> Result<Json<UserResponse>, AppError> {
    require_positive(id)?;
    service.update_address(id, form).await.map(Json)
}

async fn delete_by_id(
    State(service): State<UserService>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    require_positive(id)?;
    service.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
