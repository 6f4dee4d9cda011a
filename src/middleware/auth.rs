//! The auth gate and the authenticated-identity extractor.

use anyhow::anyhow;
use axum::{
    extract::{FromRequestParts, MatchedPath, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};

use hms_auth::{Claims, jwt::UNAUTHORIZED_MESSAGE, verify_token};
use hms_core::{AppError, Role, permissions};

use crate::middleware::role::require_roles;
use crate::state::AppState;

/// The verified identity behind a request.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> Result<i64, AppError> {
        self.0
            .user_id()
            .ok_or_else(|| AppError::unauthorized(anyhow!(UNAUTHORIZED_MESSAGE)))
    }

    /// Role as recorded in the token when it was issued.
    pub fn role(&self) -> Role {
        self.0.role
    }

    pub fn is_admin(&self) -> bool {
        self.0.role.is_admin()
    }
}

fn unauthorized() -> AppError {
    AppError::unauthorized(anyhow!(UNAUTHORIZED_MESSAGE))
}

/// Token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn authenticate(headers: &HeaderMap, state: &AppState) -> Result<AuthUser, AppError> {
    let token = bearer_token(headers).ok_or_else(unauthorized)?;
    let claims = verify_token(token, &state.jwt_config)?;
    Ok(AuthUser(claims))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(auth_user) = parts.extensions.get::<AuthUser>() {
            return Ok(auth_user.clone());
        }

        authenticate(&parts.headers, state)
    }
}

/// Gate in front of every protected route.
///
/// Verifies the bearer token, then checks the caller's role against the
/// role authorization table for the matched route. Operations missing from
/// the table are refused. On success the identity is stored in the request
/// extensions for handlers to pick up through [`AuthUser`].
pub async fn auth_gate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_user = authenticate(req.headers(), &state)?;

    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    match permissions::table().allowed_roles(req.method(), &path) {
        None => {
            tracing::warn!(method = %req.method(), path = %path, "Route missing from role table");
            return Err(AppError::forbidden(anyhow!(
                "Forbidden: operation is not permitted"
            )));
        }
        Some(roles) => require_roles(&auth_user, roles).inspect_err(|_| {
            tracing::debug!(
                role = %auth_user.role(),
                method = %req.method(),
                path = %path,
                "Role not allowed"
            );
        })?,
    }

    req.extensions_mut().insert(auth_user);
    Ok(next.run(req).await)
}
