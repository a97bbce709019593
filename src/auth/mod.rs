use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::SecurityConfig;

/// JWT claims. The `user: { id }` nesting is the wire shape the original
/// backend issued, kept so existing tokens and clients stay compatible.
/// `exp` is new relative to the original, which signed tokens with no expiry.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user: UserClaim,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserClaim {
    pub id: Uuid,
}

impl Claims {
    pub fn new(user_id: Uuid, expiry_hours: u64) -> Self {
        let now = Utc::now();
        Self {
            user: UserClaim { id: user_id },
            iat: now.timestamp(),
            exp: (now + Duration::hours(expiry_hours as i64)).timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token generation error: {0}")]
    Generation(String),

    /// Covers malformed structure, bad signature, wrong key, and expiry alike.
    /// Callers get no distinction between the causes.
    #[error("invalid token")]
    InvalidToken,
}

/// Issues and verifies the signed identity assertion carried by callers.
/// Holds the process-wide signing secret; constructed once at startup from
/// [`SecurityConfig`] and cloned into the router state.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_hours: u64,
}

impl TokenService {
    pub fn new(security: &SecurityConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(security.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(security.jwt_secret.as_bytes()),
            expiry_hours: security.jwt_expiry_hours,
        }
    }

    /// Sign an assertion for the given user id (HS256).
    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        let claims = Claims::new(user_id, self.expiry_hours);
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Generation(e.to_string()))
    }

    /// Verify an assertion and return the user id it asserts.
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| {
                tracing::debug!("token rejected: {}", e);
                TokenError::InvalidToken
            })?;
        Ok(data.claims.user.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(secret: &str) -> TokenService {
        TokenService::new(&SecurityConfig {
            jwt_secret: secret.to_string(),
            jwt_expiry_hours: 1,
            bcrypt_cost: 4,
        })
    }

    #[test]
    fn issue_verify_round_trip() {
        let tokens = service("test-secret");
        let id = Uuid::new_v4();
        let token = tokens.issue(id).unwrap();
        assert_eq!(tokens.verify(&token).unwrap(), id);
    }

    #[test]
    fn rejects_arbitrary_strings() {
        let tokens = service("test-secret");
        assert!(matches!(tokens.verify("not-a-token"), Err(TokenError::InvalidToken)));
        assert!(matches!(tokens.verify(""), Err(TokenError::InvalidToken)));
    }

    #[test]
    fn rejects_tampered_token() {
        let tokens = service("test-secret");
        let token = tokens.issue(Uuid::new_v4()).unwrap();
        let mut tampered = token.clone();
        // Flip a character in the payload segment
        let idx = token.find('.').unwrap() + 2;
        let original = tampered.remove(idx);
        tampered.insert(idx, if original == 'A' { 'B' } else { 'A' });
        assert!(matches!(tokens.verify(&tampered), Err(TokenError::InvalidToken)));
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let id = Uuid::new_v4();
        let token = service("secret-one").issue(id).unwrap();
        assert!(matches!(service("secret-two").verify(&token), Err(TokenError::InvalidToken)));
    }
}
