use sqlx::PgPool;

use crate::auth::TokenService;
use crate::config::AppConfig;
use crate::database::{self, NoteRepository, UserRepository};
use crate::services::CredentialService;

/// Shared application state cloned into every handler. Everything here is
/// read-only after construction; per-request state lives in the store.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub notes: NoteRepository,
    pub credentials: CredentialService,
    pub tokens: TokenService,
}

impl AppState {
    /// Fails only on an unusable connection string; reachability of the
    /// store is checked lazily per request.
    pub fn new(config: &AppConfig) -> Result<Self, sqlx::Error> {
        let pool = database::connect(&config.database)?;
        let users = UserRepository::new(pool.clone());
        Ok(Self {
            notes: NoteRepository::new(pool.clone()),
            credentials: CredentialService::new(users, config.security.bcrypt_cost),
            tokens: TokenService::new(&config.security),
            pool,
        })
    }
}
