use axum::{extract::State, Json};
use serde::Deserialize;

use super::{is_valid_email, AuthTokenResponse};
use crate::error::{ApiError, FieldError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = Vec::new();
        if !is_valid_email(&self.email) {
            errors.push(FieldError::new("email", "Enter a valid email"));
        }
        if self.password.is_empty() {
            errors.push(FieldError::new("password", "Password cannot be blank"));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation(errors))
        }
    }
}

/// POST /api/auth/login - authenticate a user. No login required.
///
/// Unknown email and wrong password produce the identical
/// "Invalid credentials" rejection.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthTokenResponse>, ApiError> {
    payload.validate()?;

    let user = state
        .credentials
        .verify_credentials(&payload.email, &payload.password)
        .await?;

    let authtoken = state.tokens.issue(user.id)?;
    Ok(Json(AuthTokenResponse {
        success: true,
        authtoken,
    }))
}
