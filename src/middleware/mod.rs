pub mod auth;

pub use auth::{require_auth, AuthUser, AUTH_REQUIRED_MESSAGE, AUTH_TOKEN_HEADER};
