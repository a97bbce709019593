use axum::{extract::State, Json};
use serde::Deserialize;

use super::{is_valid_email, AuthTokenResponse};
use crate::error::{ApiError, FieldError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = Vec::new();
        if self.name.chars().count() < 3 {
            errors.push(FieldError::new("name", "Enter a valid name"));
        }
        if !is_valid_email(&self.email) {
            errors.push(FieldError::new("email", "Enter a valid email"));
        }
        if self.password.chars().count() < 5 {
            errors.push(FieldError::new(
                "password",
                "Password must be at least 5 characters",
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation(errors))
        }
    }
}

/// POST /api/auth/createuser - register a new user. No login required.
///
/// Returns `{success: true, authtoken}` so the client is logged in
/// immediately after registration.
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<AuthTokenResponse>, ApiError> {
    payload.validate()?;

    let user = state
        .credentials
        .register(&payload.name, &payload.email, &payload.password)
        .await?;

    let authtoken = state.tokens.issue(user.id)?;
    Ok(Json(AuthTokenResponse {
        success: true,
        authtoken,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(request("Ann", "a@x.com", "secret").validate().is_ok());
    }

    #[test]
    fn collects_every_failing_field() {
        let err = request("Al", "not-an-email", "pw").validate().unwrap_err();
        match err {
            ApiError::Validation(errors) => {
                let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
                assert_eq!(fields, vec!["name", "email", "password"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn password_of_exactly_five_chars_passes() {
        assert!(request("Ann", "a@x.com", "12345").validate().is_ok());
    }
}
