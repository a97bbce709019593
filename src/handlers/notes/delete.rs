use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DeleteNoteResponse {
    pub success: bool,
    pub message: &'static str,
}

/// DELETE /api/notes/deletenote/:id - permanently remove an owned note.
/// Login required; same NotFound/AccessDenied ordering as update, so a
/// second delete of the same id is a 404.
pub async fn delete_note(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteNoteResponse>, ApiError> {
    state.notes.delete(id, auth.user_id).await?;
    Ok(Json(DeleteNoteResponse {
        success: true,
        message: "Note has been deleted",
    }))
}
