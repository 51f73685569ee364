// handlers/notes/fetch_all.rs - GET /api/notes/fetchAllNotes handler

use axum::{extract::State, response::Json, Extension};

use crate::database::models::Note;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /api/notes/fetchAllNotes - Every note owned by the caller, no pagination
pub async fn fetch_all_notes(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = state.notes.find_by_owner(caller.id).await?;
    Ok(Json(notes))
}
