use std::env;

/// Process configuration, built once in `main` and handed by reference into
/// the services that need it. Immutable after construction; nothing reads the
/// environment after startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub jwt_expiry_hours: u64,
    pub bcrypt_cost: u32,
}

/// Fallback signing secret, carried over from the original deployment as a
/// known weakness. Anything outside development must set JWT_SECRET.
const DEV_FALLBACK_SECRET: &str = "defaultsecret";

const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/jotbook";

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = environment_from(env::var("APP_ENV").ok().as_deref());

        let port = env::var("JOTBOOK_API_PORT")
            .ok()
            .or_else(|| env::var("PORT").ok())
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                tracing::warn!("DATABASE_URL not set, falling back to {}", DEFAULT_DATABASE_URL);
                DEFAULT_DATABASE_URL.to_string()
            }
        };

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!("JWT_SECRET not set, using the development fallback secret");
                DEV_FALLBACK_SECRET.to_string()
            }
        };

        Self {
            environment,
            server: ServerConfig { port },
            database: DatabaseConfig {
                url,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            },
            security: SecurityConfig {
                jwt_secret,
                jwt_expiry_hours: env::var("JWT_EXPIRY_HOURS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(24 * 7),
                bcrypt_cost: env::var("BCRYPT_COST")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(bcrypt::DEFAULT_COST),
            },
        }
    }
}

fn environment_from(value: Option<&str>) -> Environment {
    match value {
        Some("production") | Some("prod") => Environment::Production,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_development() {
        assert_eq!(environment_from(None), Environment::Development);
        assert_eq!(environment_from(Some("staging")), Environment::Development);
    }

    #[test]
    fn recognizes_production() {
        assert_eq!(environment_from(Some("production")), Environment::Production);
        assert_eq!(environment_from(Some("prod")), Environment::Production);
    }
}
