pub mod login;
pub mod profile;
pub mod register;

pub use login::login;
pub use profile::get_user;
pub use register::create_user;

use serde::Serialize;

/// Response for both registration and login: a fresh identity assertion the
/// client sends back in the `auth-token` header.
#[derive(Debug, Serialize)]
pub struct AuthTokenResponse {
    pub success: bool,
    pub authtoken: String,
}

/// Syntactic email check, intentionally modest: one `@`, non-empty local and
/// domain parts, a dot in the domain, no whitespace.
pub(crate) fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    match (parts.next(), parts.next()) {
        (Some(local), Some(domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email("a@nodot"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a b@x.com"));
    }
}
