//! Token signing configuration.
//!
//! # Environment Variables
//!
//! - `JWT_SECRET`: HMAC signing secret. Falls back to [`DEFAULT_JWT_SECRET`],
//!   which is only acceptable for local development.
//! - `JWT_EXPIRY`: token lifetime in seconds (default: 7 days)

use std::env;

use anyhow::bail;

use crate::server::ServerConfig;

pub const DEFAULT_JWT_SECRET: &str = "dev-secret";
pub const DEFAULT_TOKEN_EXPIRY_SECS: i64 = 7 * 24 * 60 * 60;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_JWT_SECRET.to_string()),
            access_token_expiry: env::var("JWT_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TOKEN_EXPIRY_SECS),
        }
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }

    /// Refuses the built-in secret in production and warns about it elsewhere.
    pub fn check_secret(&self, server: &ServerConfig) -> anyhow::Result<()> {
        if !self.uses_default_secret() {
            return Ok(());
        }

        if server.is_production() {
            bail!("JWT_SECRET must be set when ENVIRONMENT=production");
        }

        tracing::warn!(
            environment = %server.environment,
            "JWT_SECRET is not set; tokens are signed with the built-in development secret"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(environment: &str) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: environment.to_string(),
        }
    }

    fn jwt(secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            access_token_expiry: DEFAULT_TOKEN_EXPIRY_SECS,
        }
    }

    #[test]
    fn test_default_lifetime_is_seven_days() {
        assert_eq!(DEFAULT_TOKEN_EXPIRY_SECS, 604_800);
    }

    #[test]
    fn test_default_secret_rejected_in_production() {
        assert!(jwt(DEFAULT_JWT_SECRET).check_secret(&server("production")).is_err());
        assert!(jwt(DEFAULT_JWT_SECRET).check_secret(&server("PRODUCTION")).is_err());
    }

    #[test]
    fn test_default_secret_tolerated_in_development() {
        let config = jwt(DEFAULT_JWT_SECRET);
        assert!(config.uses_default_secret());
        assert!(config.check_secret(&server("development")).is_ok());
    }

    #[test]
    fn test_custom_secret_accepted_everywhere() {
        let config = jwt("a-long-random-secret");
        assert!(!config.uses_default_secret());
        assert!(config.check_secret(&server("production")).is_ok());
    }
}
