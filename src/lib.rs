pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod state;
pub mod validate;

use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Assemble the full router. Cross-origin requests are allowed from any
/// origin; this mirrors the development posture of the service.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Auth routes (createUser/login public, getuser behind the gate)
        .merge(auth_routes(state.clone()))
        // Notes API, entirely behind the gate
        .merge(notes_routes(state))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn auth_routes(state: AppState) -> Router {
    use axum::routing::post;
    use handlers::auth;

    let protected = Router::new()
        .route("/api/auth/getuser", post(auth::get_user))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::require_auth,
        ));

    Router::new()
        .route("/api/auth/createUser", post(auth::create_user))
        .route("/api/auth/login", post(auth::login))
        .merge(protected)
        .with_state(state)
}

fn notes_routes(state: AppState) -> Router {
    use axum::routing::{delete, post, put};
    use handlers::notes;

    Router::new()
        .route("/api/notes/fetchAllNotes", get(notes::fetch_all_notes))
        .route("/api/notes/createNote", post(notes::create_note))
        .route("/api/notes/updatenote/:id", put(notes::update_note))
        .route("/api/notes/deleteNote/:id", delete(notes::delete_note))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::require_auth,
        ))
        .with_state(state)
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Notes API (Rust)",
            "version": version,
            "description": "JWT-authenticated personal notes backend built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "auth": "/api/auth/createUser, /api/auth/login (public - token acquisition)",
                "getuser": "/api/auth/getuser (protected)",
                "notes": "/api/notes/* (protected)",
            }
        }
    }))
}

async fn health() -> axum::response::Json<Value> {
    axum::response::Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now(),
        }
    }))
}
