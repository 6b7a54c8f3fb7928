//! museum-api: REST CRUD service for a museum and gallery domain.
//!
//! The request pipeline is uniform across aggregates: a form DTO is
//! validated against the shared constraint tables, referenced parents are
//! resolved by id, uniqueness preconditions are checked inside the write
//! transaction, and the persisted row is re-read as an outbound projection.

pub mod config;
pub mod controllers;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod validation;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Assembles the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(controllers::user_controller::routes())
        .merge(controllers::author_controller::routes())
        .merge(controllers::article_controller::routes())
        .merge(controllers::event_controller::routes())
        .merge(controllers::artist_controller::routes())
        .merge(controllers::artwork_controller::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Initialises the global tracing subscriber. `RUST_LOG` controls the
/// filter; defaults to `info`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
