//! Password hashing with bcrypt.
//!
//! Each call to [`hash_password`] draws a fresh random salt which is embedded
//! in the returned digest, so hashing the same password twice yields two
//! different digests that both verify.

use anyhow::anyhow;
use bcrypt::{hash, verify};

use crate::errors::AppError;

/// Work factor used for every stored digest.
pub const BCRYPT_COST: u32 = 10;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    if password.is_empty() {
        return Err(AppError::bad_request(anyhow!("password is required")));
    }

    hash(password, BCRYPT_COST)
        .map_err(|e| AppError::internal(anyhow!("Failed to hash password: {}", e)))
}

/// Returns `Ok(false)` on mismatch and an error only when `digest` is not a
/// bcrypt digest at all.
pub fn verify_password(password: &str, digest: &str) -> Result<bool, AppError> {
    verify(password, digest)
        .map_err(|e| AppError::internal(anyhow!("Failed to verify password: {}", e)))
}
