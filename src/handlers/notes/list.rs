use axum::{extract::State, Extension, Json};
use serde::Serialize;

use crate::database::models::Note;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct NoteListResponse {
    pub success: bool,
    pub notes: Vec<Note>,
}

/// GET /api/notes/fetchallnotes - all notes owned by the caller. Login required.
pub async fn fetch_all_notes(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<NoteListResponse>, ApiError> {
    let notes = state.notes.list_by_owner(auth.user_id).await?;
    Ok(Json(NoteListResponse {
        success: true,
        notes,
    }))
}
