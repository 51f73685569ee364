// handlers/auth/create_user.rs - POST /api/auth/createUser handler

use axum::{extract::State, response::Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

/// Missing fields fall back to empty strings so they fail the length rules
/// rather than the JSON deserializer.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /api/auth/createUser - Register a new account and receive a token
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<Value>, ApiError> {
    let token = state
        .auth_service()
        .register(&payload.name, &payload.email, &payload.password)
        .await?;

    Ok(Json(json!({ "success": true, "authToken": token })))
}
