use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::services::{
    ArticleService, ArtistService, ArtworkService, AuthorService, EventService, UserService,
};

/// Shared application state: the pool plus one service per aggregate.
/// `FromRef` lets handlers extract the service they need directly.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub pool: SqlitePool,
    pub user_service: UserService,
    pub author_service: AuthorService,
    pub article_service: ArticleService,
    pub event_service: EventService,
    pub artist_service: ArtistService,
    pub artwork_service: ArtworkService,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            user_service: UserService::new(pool.clone()),
            author_service: AuthorService::new(pool.clone()),
            article_service: ArticleService::new(pool.clone()),
            event_service: EventService::new(pool.clone()),
            artist_service: ArtistService::new(pool.clone()),
            artwork_service: ArtworkService::new(pool.clone()),
            pool,
        }
    }
}
