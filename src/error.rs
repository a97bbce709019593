// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::{json, Value};

/// One entry of a structured validation failure, mirroring the
/// `{field, message}` list clients of the original backend expect.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// HTTP API error with appropriate status codes and client-safe messages.
///
/// Everything a handler can fail with collapses into one of these variants;
/// internal detail (SQL errors, hash failures, token decode reasons) is logged
/// server-side and never reaches the response body.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    Validation(Vec<FieldError>),
    BadRequest(String),

    // 401 Unauthorized (missing/invalid token, and ownership denial)
    Unauthorized(String),

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error
    InternalServerError,
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::Validation(_) => "Invalid input",
            ApiError::BadRequest(msg) => msg,
            ApiError::Unauthorized(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::InternalServerError => "Internal Server Error",
        }
    }

    /// Convert to the `{success: false, ...}` JSON body the API speaks
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::Validation(errors) => json!({
                "success": false,
                "errors": errors,
            }),
            _ => json!({
                "success": false,
                "error": self.message(),
            }),
        }
    }

    pub fn validation(errors: Vec<FieldError>) -> Self {
        ApiError::Validation(errors)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }
}

// Convert lower-layer error types to ApiError

impl From<crate::database::StoreError> for ApiError {
    fn from(err: crate::database::StoreError) -> Self {
        use crate::database::StoreError;
        match err {
            StoreError::NotFound(what) => ApiError::not_found(what),
            StoreError::AccessDenied => ApiError::unauthorized("Access Denied"),
            StoreError::DuplicateEmail => {
                ApiError::bad_request("User with this email already exists")
            }
            StoreError::Sqlx(e) => {
                // Don't expose internal SQL errors to clients
                tracing::error!("storage failure: {}", e);
                ApiError::InternalServerError
            }
        }
    }
}

impl From<crate::services::credential::CredentialError> for ApiError {
    fn from(err: crate::services::credential::CredentialError) -> Self {
        use crate::services::credential::CredentialError;
        match err {
            CredentialError::DuplicateEmail => {
                ApiError::bad_request("User with this email already exists")
            }
            CredentialError::InvalidCredentials => ApiError::bad_request("Invalid credentials"),
            CredentialError::Hash(e) => {
                tracing::error!("password hashing failure: {}", e);
                ApiError::InternalServerError
            }
            CredentialError::Store(e) => e.into(),
        }
    }
}

impl From<crate::auth::TokenError> for ApiError {
    fn from(err: crate::auth::TokenError) -> Self {
        use crate::auth::TokenError;
        match err {
            TokenError::InvalidToken => {
                ApiError::unauthorized(crate::middleware::AUTH_REQUIRED_MESSAGE)
            }
            TokenError::Generation(msg) => {
                tracing::error!("token generation failure: {}", msg);
                ApiError::InternalServerError
            }
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
