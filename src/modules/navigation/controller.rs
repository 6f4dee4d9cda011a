use axum::Json;
use tracing::instrument;

use hms_core::navigation::{FALLBACK_ROUTE, visible_links};
use hms_models::navigation::{NavigationLink, NavigationResponse};

use crate::docs::ErrorResponse;
use crate::middleware::auth::AuthUser;

/// Sidebar links for the caller's role
///
/// Purely presentational; every API call is still checked by the server.
#[utoipa::path(
    get,
    path = "/api/navigation",
    responses(
        (status = 200, description = "Links visible to the caller", body = NavigationResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Navigation",
    security(("bearer_auth" = []))
)]
#[instrument(skip(auth_user), fields(role = %auth_user.role()))]
pub async fn get_navigation(auth_user: AuthUser) -> Json<NavigationResponse> {
    let role = auth_user.role();
    Json(NavigationResponse {
        role,
        links: visible_links(role).iter().map(NavigationLink::from).collect(),
        fallback: FALLBACK_ROUTE.to_string(),
    })
}
