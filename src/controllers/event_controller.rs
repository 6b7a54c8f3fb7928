use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::error::AppError;
use crate::models::event::{EventPublishingForm, EventWithBody, EventWithoutBody};
use crate::services::EventService;
use crate::state::AppState;
use crate::validation::{require_positive, Validated};

// Events expose no update endpoint; status transitions are out of scope.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(get_all).post(create))
        .route("/events/{id}", get(get_by_id).delete(delete_by_id))
}

async fn get_all(
    State(service): State<EventService>,
) -> Result<Json<Vec<EventWithoutBody>>, AppError> {
    service.get_all_without_body().await.map(Json)
}

async fn get_by_id(
    State(service): State<EventService>,
    Path(id): Path<i64>,
) -> Result<Json<EventWithBody>, AppError> {
    require_positive(id)?;
    service.get_by_id(id).await.map(Json)
}

async fn create(
    State(service): State<EventService>,
    Validated(form): Validated<EventPublishingForm>,
) -> Result<(StatusCode, Json<EventWithBody>), AppError> {
    let event = service.publish(form).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

async fn delete_by_id(
    State(service): State<EventService>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    require_positive(id)?;
    service.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
