use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::error::AppError;
use crate::models::artwork::{ArtworkRegistrationForm, ArtworkResponse};
use crate::services::ArtworkService;
use crate::state::AppState;
use crate::validation::{require_positive, Validated};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/artworks", get(get_all).post(create))
        .route("/artworks/{id}", get(get_by_id).delete(delete_by_id))
}

async fn get_all(
    State(service): State<ArtworkService>,
) -> Result<Json<Vec<ArtworkResponse>>, AppError> {
    service.get_all().await.map(Json)
}

async fn get_by_id(
    State(service): State<ArtworkService>,
    Path(id): Path<i64>,
) -> Result<Json<ArtworkResponse>, AppError> {
    require_positive(id)?;
    service.get_by_id(id).await.map(Json)
}

async fn create(
    State(service): State<ArtworkService>,
    Validated(form): Validated<ArtworkRegistrationForm>,
) -> Result<(StatusCode, Json<ArtworkResponse>), AppError> {
    let artwork = service.save(form).await?;
    Ok((StatusCode::CREATED, Json(artwork)))
}

async fn delete_by_id(
    State(service): State<ArtworkService>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    require_positive(id)?;
    service.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
