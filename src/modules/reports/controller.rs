use axum::{Json, extract::State};
use tracing::instrument;

use hms_core::AppError;
use hms_models::reports::ReportSummary;

use super::service::ReportService;
use crate::docs::ErrorResponse;
use crate::state::AppState;

/// Record counts and invoice totals
#[utoipa::path(
    get,
    path = "/api/reports/summary",
    responses(
        (status = 200, description = "Hospital-wide summary", body = ReportSummary),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Administrators only", body = ErrorResponse)
    ),
    tag = "Reports",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_summary(State(state): State<AppState>) -> Result<Json<ReportSummary>, AppError> {
    Ok(Json(ReportService::summary(&state.db).await?))
}
