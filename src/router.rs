use anyhow::anyhow;
use axum::http::{HeaderValue, Method};
use axum::{Router, middleware, routing::get};
use hms_core::AppError;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::auth::auth_gate;
use crate::modules::appointments::router::init_appointments_router;
use crate::modules::auth::router::{init_auth_router, init_public_auth_router};
use crate::modules::health::health_check;
use crate::modules::navigation::router::init_navigation_router;
use crate::modules::records::router::{
    init_doctors_router, init_invoices_router, init_lab_tests_router, init_medicines_router,
    init_patients_router, init_staff_router,
};
use crate::modules::reports::router::init_reports_router;
use crate::state::AppState;

async fn route_not_found() -> AppError {
    AppError::not_found(anyhow!("Route not found"))
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true)
}

/// Builds the application.
///
/// Everything under `/api` except login and health sits behind the auth gate,
/// which enforces the role authorization table. `route_layer` only wraps the
/// routes present when it is called, so the public login route is merged in
/// after the gate is applied.
pub fn init_router(state: AppState) -> Router {
    let gate = middleware::from_fn_with_state(state.clone(), auth_gate);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .route("/health", get(health_check))
                .nest(
                    "/auth",
                    init_auth_router()
                        .route_layer(gate.clone())
                        .merge(init_public_auth_router()),
                )
                .nest("/navigation", init_navigation_router().route_layer(gate.clone()))
                .nest("/patients", init_patients_router().route_layer(gate.clone()))
                .nest("/doctors", init_doctors_router().route_layer(gate.clone()))
                .nest(
                    "/appointments",
                    init_appointments_router().route_layer(gate.clone()),
                )
                .nest("/medicines", init_medicines_router().route_layer(gate.clone()))
                .nest("/lab-tests", init_lab_tests_router().route_layer(gate.clone()))
                .nest("/invoices", init_invoices_router().route_layer(gate.clone()))
                .nest("/staff", init_staff_router().route_layer(gate.clone()))
                .nest("/reports", init_reports_router().route_layer(gate)),
        )
        .fallback(route_not_found)
        .with_state(state.clone())
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(logging_middleware))
}
