use std::sync::Arc;

use notes_api_rust::config::AppConfig;
use notes_api_rust::database::postgres::{self, PgNoteStore, PgUserStore};
use notes_api_rust::state::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    tracing::info!("Starting notes API in {:?} mode", config.environment);

    if config.security.jwt_secret.is_empty() {
        tracing::warn!("JWT_SECRET is empty; every sign/verify attempt will fail");
    }

    let pool = postgres::connect(&config.database)
        .await
        .unwrap_or_else(|e| panic!("failed to connect database: {}", e));
    postgres::migrate(&pool)
        .await
        .unwrap_or_else(|e| panic!("failed to run migrations: {}", e));

    let users = Arc::new(PgUserStore::new(pool.clone()));
    let notes = Arc::new(PgNoteStore::new(pool));

    let port = config.server.port;
    let app = notes_api_rust::app(AppState::new(config, users, notes));

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("notes API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
