use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::error::AppError;
use crate::models::author::{AuthorRegistrationForm, AuthorShortResponse, AuthorUsernameForm};
use crate::services::AuthorService;
use crate::state::AppState;
use crate::validation::{require_positive, Validated};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/authors", get(get_all).post(create))
        .route(
            "/authors/{id}",
            get(get_by_id).put(update_username).delete(delete_by_id),
        )
}

async fn get_all(
    State(service): State<AuthorService>,
) -> Result<Json<Vec<AuthorShortResponse>>, AppError> {
    service.get_all().await.map(Json)
}

async fn get_by_id(
    State(service): State<AuthorService>,
    Path(id): Path<i64>,
) -> Result<Json<AuthorShortResponse>, AppError> {
    require_positive(id)?;
    service.get_by_id(id).await.map(Json)
}

async fn create(
    State(service): State<AuthorService>,
    Validated(form): Validated<AuthorRegistrationForm>,
) -> Result<(StatusCode, Json<AuthorShortResponse>), AppError> {
    let author = service.register(form).await?;
    Ok((StatusCode::CREATED, Json(author)))
}

async fn update_username(
    State(service): State<AuthorService>,
    Path(id): Path<i64>,
    Validated(form): Validated<AuthorUsernameForm>,
) -> Result<Json<AuthorShortResponse>, AppError> {
    require_positive(id)?;
    service.update_username(id, form.username).await.map(Json)
}

async fn delete_by_id(
    State(service): State<AuthorService>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    require_positive(id)?;
    service.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
