// handlers/notes/create.rs - POST /api/notes/createNote handler

use axum::{extract::State, response::Json, Extension};
use serde::Deserialize;

use crate::database::models::Note;
use crate::database::NewNote;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;
use crate::validate;

#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub tag: Option<String>,
}

/// POST /api/notes/createNote - Create a note owned by the caller.
/// The owner is always the authenticated identity; a client-supplied owner
/// field is not even deserialized.
pub async fn create_note(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Json(payload): Json<CreateNoteRequest>,
) -> Result<Json<Note>, ApiError> {
    let errors = validate::create_note_errors(&payload.title, &payload.description);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let note = state
        .notes
        .create(NewNote {
            title: payload.title,
            description: payload.description,
            tag: payload.tag,
            user_id: caller.id,
        })
        .await?;

    Ok(Json(note))
}
