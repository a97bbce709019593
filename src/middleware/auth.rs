use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Request header carrying the identity assertion.
pub const AUTH_TOKEN_HEADER: &str = "auth-token";

/// Single rejection message for both a missing and an invalid token; the
/// distinction is never exposed to the caller.
pub const AUTH_REQUIRED_MESSAGE: &str = "Please authenticate using a valid token";

/// Authenticated caller context, injected into request extensions for
/// downstream handlers.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: Uuid,
}

/// Auth gate: runs once per request ahead of every protected handler.
/// Absent header short-circuits immediately; otherwise the token is verified
/// and the resolved identity attached to the request.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTH_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::unauthorized(AUTH_REQUIRED_MESSAGE))?;

    let user_id = state
        .tokens
        .verify(token)
        .map_err(|_| ApiError::unauthorized(AUTH_REQUIRED_MESSAGE))?;

    request.extensions_mut().insert(AuthUser { user_id });
    Ok(next.run(request).await)
}
