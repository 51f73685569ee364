// handlers/notes/update.rs - PUT /api/notes/updatenote/:id handler

use axum::{
    extract::{Path, State},
    response::Json,
    Extension,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::Note;
use crate::database::NoteChanges;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tag: Option<String>,
}

/// PUT /api/notes/updatenote/:id - Partial update of an owned note.
/// Only provided fields are replaced; an empty string counts as absent,
/// same as a missing field. Updated fields are not re-validated.
pub async fn update_note(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateNoteRequest>,
) -> Result<Json<Note>, ApiError> {
    let note = state
        .notes
        .find_by_id(id)
        .await?
        .ok_or(ApiError::not_found("Note not found"))?;

    if note.user_id != caller.id {
        return Err(ApiError::NotAuthorized);
    }

    let changes = NoteChanges {
        title: payload.title.filter(|s| !s.is_empty()),
        description: payload.description.filter(|s| !s.is_empty()),
        tag: payload.tag.filter(|s| !s.is_empty()),
    };

    // The ownership check and this write are separate store calls; a
    // concurrent request for the same note can interleave between them.
    let updated = state
        .notes
        .update(id, changes)
        .await?
        .ok_or(ApiError::not_found("Note not found"))?;

    Ok(Json(updated))
}
