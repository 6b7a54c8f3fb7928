use museum_api::config::AppConfig;
use museum_api::state::AppState;
use museum_api::{app, db, init_tracing, MIGRATOR};

#[tokio::main]
async fn main() {
    init_tracing();

    let config = AppConfig::from_env();
    let pool = db::connect(&config.database_url)
        .await
        .expect("Failed to connect to SQLite");

    MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to apply database migrations");
    tracing::info!("Database migrations applied");

    let state = AppState::new(pool);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind address");
    tracing::info!(addr = %config.bind_addr, "museum-api listening");

    axum::serve(listener, app(state)).await.expect("Server error");
}
