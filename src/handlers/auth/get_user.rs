// handlers/auth/get_user.rs - POST /api/auth/getuser handler

use axum::{extract::State, response::Json, Extension};

use crate::database::models::User;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// POST /api/auth/getuser - Return the authenticated caller's record.
/// The password hash is skipped at serialization, never here.
pub async fn get_user(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
) -> Result<Json<User>, ApiError> {
    let user = state.auth_service().who_am_i(caller.id).await?;
    Ok(Json(user))
}
