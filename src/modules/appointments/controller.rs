use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;

use hms_core::AppError;
use hms_models::DeleteResponse;
use hms_models::appointments::{Appointment, AppointmentPayload, AppointmentWithNames};

use super::service::AppointmentService;
use crate::docs::ErrorResponse;
use crate::state::AppState;
use crate::validator::{PathId, ValidatedJson};

#[utoipa::path(
    get,
    path = "/api/appointments",
    responses(
        (status = 200, description = "Appointments with patient and doctor names", body = Vec<AppointmentWithNames>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Role not allowed", body = ErrorResponse)
    ),
    tag = "Appointments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_appointments(
    State(state): State<AppState>,
) -> Result<Json<Vec<AppointmentWithNames>>, AppError> {
    Ok(Json(AppointmentService::list(&state.db).await?))
}

/// Book an appointment
///
/// `time` and `notes` default to empty and `status` to `scheduled`.
#[utoipa::path(
    post,
    path = "/api/appointments",
    request_body = AppointmentPayload,
    responses(
        (status = 201, description = "Appointment booked", body = Appointment),
        (status = 400, description = "Invalid input or unknown patient/doctor", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Role not allowed", body = ErrorResponse)
    ),
    tag = "Appointments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_appointment(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<AppointmentPayload>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let appointment = AppointmentService::create(&state.db, &dto).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

#[utoipa::path(
    get,
    path = "/api/appointments/{id}",
    params(("id" = i64, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "The appointment", body = AppointmentWithNames),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Role not allowed", body = ErrorResponse),
        (status = 404, description = "Appointment not found", body = ErrorResponse)
    ),
    tag = "Appointments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_appointment(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Json<AppointmentWithNames>, AppError> {
    Ok(Json(AppointmentService::get(&state.db, id).await?))
}

#[utoipa::path(
    put,
    path = "/api/appointments/{id}",
    params(("id" = i64, Path, description = "Appointment ID")),
    request_body = AppointmentPayload,
    responses(
        (status = 200, description = "Appointment replaced", body = Appointment),
        (status = 400, description = "Invalid input or unknown patient/doctor", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Role not allowed", body = ErrorResponse),
        (status = 404, description = "Appointment not found", body = ErrorResponse)
    ),
    tag = "Appointments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_appointment(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(dto): ValidatedJson<AppointmentPayload>,
) -> Result<Json<Appointment>, AppError> {
    Ok(Json(AppointmentService::update(&state.db, id, &dto).await?))
}

#[utoipa::path(
    delete,
    path = "/api/appointments/{id}",
    params(("id" = i64, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment cancelled", body = DeleteResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Role not allowed", body = ErrorResponse),
        (status = 404, description = "Appointment not found", body = ErrorResponse)
    ),
    tag = "Appointments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_appointment(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Json<DeleteResponse>, AppError> {
    AppointmentService::delete(&state.db, id).await?;
    Ok(Json(DeleteResponse::ok()))
}
