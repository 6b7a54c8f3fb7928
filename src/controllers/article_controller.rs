use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::error::AppError;
use crate::models::article::{
    ArticlePublishingForm, ArticleUpdateForm, ArticleWithContent, ArticleWithoutContent,
};
use crate::services::ArticleService;
use crate::state::AppState;
use crate::validation::{require_positive, Validated};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/articles", get(get_all).post(create))
        .route(
            "/articles/{id}",
            get(get_by_id).put(update).delete(delete_by_id),
        )
}

async fn get_all(
    State(service): State<ArticleService>,
) -> Result<Json<Vec<ArticleWithoutContent>>, AppError> {
    service.get_all_without_content().await.map(Json)
}

async fn get_by_id(
    State(service): State<ArticleService>,
    Path(id): Path<i64>,
) -> Result<Json<ArticleWithContent>, AppError> {
    require_positive(id)?;
    service.get_by_id(id).await.map(Json)
}

async fn create(
    State(service): State<ArticleService>,
    Validated(form): Validated<ArticlePublishingForm>,
) -> Result<(StatusCode, Json<ArticleWithContent>), AppError> {
    let article = service.publish(form).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

async fn update(
    State(service): State<ArticleService>,
    Path(id): Path<i64>,
    Validated(form): Validated<ArticleUpdateForm>,
) -> Result<Json<ArticleWithContent>, AppError> {
    require_positive(id)?;
    service.update(id, form).await.map(Json)
}

async fn delete_by_id(
    State(service): State<ArticleService>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    require_positive(id)?;
    service.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
