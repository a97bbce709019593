use axum::{extract::State, Extension, Json};
use serde::Deserialize;

use super::NoteResponse;
use crate::error::{ApiError, FieldError};
use crate::middleware::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub description: String,
    pub tag: Option<String>,
}

impl CreateNoteRequest {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = Vec::new();
        if self.title.chars().count() < 3 {
            errors.push(FieldError::new("title", "Enter a valid title"));
        }
        if self.description.chars().count() < 5 {
            errors.push(FieldError::new(
                "description",
                "Description must be at least 5 characters",
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation(errors))
        }
    }
}

/// POST /api/notes/addnote - create a note owned by the caller. Login required.
pub async fn add_note(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<CreateNoteRequest>,
) -> Result<Json<NoteResponse>, ApiError> {
    payload.validate()?;

    let note = state
        .notes
        .create(
            auth.user_id,
            &payload.title,
            &payload.description,
            payload.tag.as_deref(),
        )
        .await?;

    Ok(Json(NoteResponse {
        success: true,
        note,
    }))
}
