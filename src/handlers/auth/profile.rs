use axum::{extract::State, Extension, Json};
use serde::Serialize;

use crate::database::models::UserProfile;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub user: UserProfile,
}

/// POST /api/auth/getuser - details of the logged-in user. Login required.
pub async fn get_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = state.credentials.find_profile(auth.user_id).await?;
    Ok(Json(ProfileResponse {
        success: true,
        user,
    }))
}
