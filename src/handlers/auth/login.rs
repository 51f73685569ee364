// handlers/auth/login.rs - POST /api/auth/login handler

use axum::{extract::State, response::Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /api/auth/login - Verify credentials and receive a token
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let token = state
        .auth_service()
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(json!({ "success": true, "authToken": token })))
}
