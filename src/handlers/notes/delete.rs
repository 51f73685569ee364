// handlers/notes/delete.rs - DELETE /api/notes/deleteNote/:id handler

use axum::{
    extract::{Path, State},
    response::Json,
    Extension,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// DELETE /api/notes/deleteNote/:id - Permanently remove an owned note,
/// returning its last known state alongside a confirmation message.
pub async fn delete_note(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let note = state
        .notes
        .find_by_id(id)
        .await?
        .ok_or(ApiError::not_found("Note not found"))?;

    if note.user_id != caller.id {
        return Err(ApiError::NotAuthorized);
    }

    let deleted = state
        .notes
        .delete(id)
        .await?
        .ok_or(ApiError::not_found("Note not found"))?;

    Ok(Json(json!({
        "success": "Note has been deleted",
        "note": deleted,
    })))
}
