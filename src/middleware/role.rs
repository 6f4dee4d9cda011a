//! Role checks inside handlers.
//!
//! The auth gate already enforces the role table; these extractors state a
//! handler's own requirement so it holds even if the handler is mounted
//! somewhere else.

use anyhow::anyhow;
use axum::{extract::FromRequestParts, http::request::Parts};

use hms_core::{AppError, Role};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Fails with 403 unless the caller holds one of `allowed`.
pub fn require_roles(auth_user: &AuthUser, allowed: &[Role]) -> Result<(), AppError> {
    if allowed.contains(&auth_user.role()) {
        Ok(())
    } else {
        Err(AppError::forbidden(anyhow!(
            "Forbidden: role '{}' may not access this resource",
            auth_user.role()
        )))
    }
}

/// Extractor for administrator-only handlers.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;

        if !auth_user.is_admin() {
            return Err(AppError::forbidden(anyhow!("Forbidden: Admins only")));
        }

        Ok(RequireAdmin(auth_user))
    }
}
