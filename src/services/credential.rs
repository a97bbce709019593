use thiserror::Error;
use uuid::Uuid;

use crate::database::manager::StoreError;
use crate::database::models::{User, UserProfile};
use crate::database::users::UserRepository;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("user with this email already exists")]
    DuplicateEmail,

    /// Returned for unknown email and wrong password alike, so callers cannot
    /// tell which accounts exist.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Credential store: registration, credential verification, profile lookup.
/// The bcrypt cost factor is fixed at construction; hashing is intentionally
/// CPU-expensive and dominates latency on the register/login paths.
#[derive(Clone)]
pub struct CredentialService {
    users: UserRepository,
    bcrypt_cost: u32,
}

impl CredentialService {
    pub fn new(users: UserRepository, bcrypt_cost: u32) -> Self {
        Self { users, bcrypt_cost }
    }

    /// Register a new user, salting and hashing the raw password. The
    /// returned user carries the hash internally; handlers must expose only
    /// the issued token or a [`UserProfile`].
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        raw_password: &str,
    ) -> Result<User, CredentialError> {
        if self.users.find_by_email(email).await?.is_some() {
            return Err(CredentialError::DuplicateEmail);
        }

        let password_hash = hash_password(raw_password, self.bcrypt_cost)?;

        match self.users.insert(name, email, &password_hash).await {
            Ok(user) => Ok(user),
            // Lost a registration race after the pre-check
            Err(StoreError::DuplicateEmail) => Err(CredentialError::DuplicateEmail),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn verify_credentials(
        &self,
        email: &str,
        raw_password: &str,
    ) -> Result<User, CredentialError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(CredentialError::InvalidCredentials)?;

        if !verify_password(raw_password, &user.password_hash)? {
            return Err(CredentialError::InvalidCredentials);
        }
        Ok(user)
    }

    /// Profile lookup for the authenticated caller; never exposes the hash.
    pub async fn find_profile(&self, id: Uuid) -> Result<UserProfile, CredentialError> {
        Ok(self.users.find_by_id(id).await?.into())
    }
}

/// Hash a password with a fresh per-user random salt.
pub fn hash_password(raw_password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(raw_password, cost)
}

/// Compare a raw password against a stored bcrypt hash.
pub fn verify_password(raw_password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(raw_password, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum cost keeps the hashing tests fast
    const TEST_COST: u32 = 4;

    #[test]
    fn hash_then_verify_succeeds() {
        let hash = hash_password("secret", TEST_COST).unwrap();
        assert!(verify_password("secret", &hash).unwrap());
    }

    #[test]
    fn wrong_password_fails_verification() {
        let hash = hash_password("secret", TEST_COST).unwrap();
        assert!(!verify_password("not-secret", &hash).unwrap());
    }

    #[test]
    fn salts_are_per_hash() {
        let a = hash_password("secret", TEST_COST).unwrap();
        let b = hash_password("secret", TEST_COST).unwrap();
        assert_ne!(a, b);
        assert!(verify_password("secret", &a).unwrap());
        assert!(verify_password("secret", &b).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("secret", "not-a-bcrypt-hash").is_err());
    }
}
