use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Deserialize;
use uuid::Uuid;

use super::NoteResponse;
use crate::database::NoteChanges;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// All fields optional; only supplied ones change.
#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tag: Option<String>,
}

impl From<UpdateNoteRequest> for NoteChanges {
    fn from(req: UpdateNoteRequest) -> Self {
        NoteChanges {
            title: req.title,
            description: req.description,
            tag: req.tag,
        }
    }
}

/// PUT /api/notes/updatenote/:id - partial update of an owned note. Login
/// required; 404 when the note does not exist, 401 when it belongs to
/// someone else.
pub async fn update_note(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateNoteRequest>,
) -> Result<Json<NoteResponse>, ApiError> {
    let note = state
        .notes
        .update(id, auth.user_id, payload.into())
        .await?;

    Ok(Json(NoteResponse {
        success: true,
        note,
    }))
}
