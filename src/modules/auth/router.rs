use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{get_current_user, login_user, register_user};

/// Routes reachable without a token.
pub fn init_public_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login_user))
}

/// Routes behind the auth gate.
pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_user))
        .route("/me", get(get_current_user))
}
