use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::error::AppError;
use crate::models::artist::{ArtistRegistrationForm, ArtistResponse};
use crate::services::ArtistService;
use crate::state::AppState;
use crate::validation::{require_positive, Validated};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(get_all).post(create))
        .route("/artists/{id}", get(get_by_id).delete(delete_by_id))
}

async fn get_all(
    State(service): State<ArtistService>,
) -> Result<Json<Vec<ArtistResponse>>, AppError> {
    service.get_all().await.map(Json)
}

async fn get_by_id(
    State(service): State<ArtistService>,
    Path(id): Path<i64>,
) -> Result<Json<ArtistResponse>, AppError> {
    require_positive(id)?;
    service.get_by_id(id).await.map(Json)
}

async fn create(
    State(service): State<ArtistService>,
    Validated(form): Validated<ArtistRegistrationForm>,
) -> Result<(StatusCode, Json<ArtistResponse>), AppError> {
    let artist = service.register(form).await?;
    Ok((StatusCode::CREATED, Json(artist)))
}

async fn delete_by_id(
    State(service): State<ArtistService>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    require_positive(id)?;
    service.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
