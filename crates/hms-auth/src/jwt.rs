//! JWT (JSON Web Token) utilities for authentication.
//!
//! # Example
//!
//! ```ignore
//! use hms_auth::{create_access_token, verify_token};
//! use hms_config::JwtConfig;
//! use hms_core::Role;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(user_id, Role::Doctor, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.role, Role::Doctor);
//! ```

use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use hms_config::JwtConfig;
use hms_core::{AppError, Role};

use crate::claims::Claims;

/// Message carried by every token rejection. Expired, tampered and garbled
/// tokens are reported identically.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Creates an access token for an identity, valid for the configured lifetime.
///
/// # Errors
///
/// Returns an internal error if token encoding fails.
pub fn create_access_token(
    user_id: i64,
    role: Role,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    create_token_with_lifetime(user_id, role, jwt_config.access_token_expiry, jwt_config)
}

/// Creates a token expiring `lifetime_secs` after now. A negative lifetime
/// yields a token that is already expired.
pub fn create_token_with_lifetime(
    user_id: i64,
    role: Role,
    lifetime_secs: i64,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();

    let claims = Claims {
        sub: user_id.to_string(),
        role,
        iat: now,
        exp: now + lifetime_secs,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create token: {}", e)))
}

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation
}

/// Verifies a token and returns the embedded claims.
///
/// # Errors
///
/// Returns an unauthorized error if the token is malformed, its signature does
/// not match, it has expired, or it carries an unknown role.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation(),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!(error = %e, "Token verification failed");
        AppError::unauthorized(anyhow!(UNAUTHORIZED_MESSAGE))
    })
}
