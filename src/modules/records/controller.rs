//! HTTP handlers for the business records.
//!
//! Every record type gets the same five handlers, generated by
//! [`record_controller!`] into a module named after the collection. Access
//! is decided by the auth gate before any of them runs.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;

use hms_core::AppError;
use hms_models::DeleteResponse;
use hms_models::doctors::{Doctor, DoctorPayload};
use hms_models::invoices::{Invoice, InvoicePayload};
use hms_models::lab_tests::{LabTest, LabTestPayload};
use hms_models::medicines::{Medicine, MedicinePayload};
use hms_models::patients::{Patient, PatientPayload};
use hms_models::staff::{StaffMember, StaffPayload};

use super::service::RecordService;
use crate::docs::ErrorResponse;
use crate::state::AppState;
use crate::validator::{PathId, ValidatedJson};

macro_rules! record_controller {
    (
        $module:ident,
        resource = $resource:ident,
        payload = $payload:ident,
        path = $path:tt,
        item_path = $item_path:tt,
        tag = $tag:tt
    ) => {
        pub mod $module {
            use super::*;

            #[utoipa::path(
                get,
                path = $path,
                responses(
                    (status = 200, description = "All records, newest first", body = Vec<$resource>),
                    (status = 401, description = "Unauthorized", body = ErrorResponse),
                    (status = 403, description = "Role not allowed", body = ErrorResponse)
                ),
                tag = $tag,
                security(("bearer_auth" = []))
            )]
            #[instrument(skip(state))]
            pub async fn list(
                State(state): State<AppState>,
            ) -> Result<Json<Vec<$resource>>, AppError> {
                let records = RecordService::<$resource>::list(&state.db).await?;
                Ok(Json(records))
            }

            #[utoipa::path(
                post,
                path = $path,
                request_body = $payload,
                responses(
                    (status = 201, description = "Record created", body = $resource),
                    (status = 400, description = "Invalid input or unknown reference", body = ErrorResponse),
                    (status = 401, description = "Unauthorized", body = ErrorResponse),
                    (status = 403, description = "Role not allowed", body = ErrorResponse)
                ),
                tag = $tag,
                security(("bearer_auth" = []))
            )]
            #[instrument(skip(state, payload))]
            pub async fn create(
                State(state): State<AppState>,
                ValidatedJson(payload): ValidatedJson<$payload>,
            ) -> Result<(StatusCode, Json<$resource>), AppError> {
                let record = RecordService::<$resource>::create(&state.db, &payload).await?;
                Ok((StatusCode::CREATED, Json(record)))
            }

            #[utoipa::path(
                get,
                path = $item_path,
                params(("id" = i64, Path, description = "Record ID")),
                responses(
                    (status = 200, description = "The record", body = $resource),
                    (status = 401, description = "Unauthorized", body = ErrorResponse),
                    (status = 403, description = "Role not allowed", body = ErrorResponse),
                    (status = 404, description = "Not found", body = ErrorResponse)
                ),
                tag = $tag,
                security(("bearer_auth" = []))
            )]
            #[instrument(skip(state))]
            pub async fn get_one(
                State(state): State<AppState>,
                PathId(id): PathId,
            ) -> Result<Json<$resource>, AppError> {
                let record = RecordService::<$resource>::get(&state.db, id).await?;
                Ok(Json(record))
            }

            #[utoipa::path(
                put,
                path = $item_path,
                params(("id" = i64, Path, description = "Record ID")),
                request_body = $payload,
                responses(
                    (status = 200, description = "Record replaced", body = $resource),
                    (status = 400, description = "Invalid input or unknown reference", body = ErrorResponse),
                    (status = 401, description = "Unauthorized", body = ErrorResponse),
                    (status = 403, description = "Role not allowed", body = ErrorResponse),
                    (status = 404, description = "Not found", body = ErrorResponse)
                ),
                tag = $tag,
                security(("bearer_auth" = []))
            )]
            #[instrument(skip(state, payload))]
            pub async fn update(
                State(state): State<AppState>,
                PathId(id): PathId,
                ValidatedJson(payload): ValidatedJson<$payload>,
            ) -> Result<Json<$resource>, AppError> {
                let record = RecordService::<$resource>::update(&state.db, id, &payload).await?;
                Ok(Json(record))
            }

            #[utoipa::path(
                delete,
                path = $item_path,
                params(("id" = i64, Path, description = "Record ID")),
                responses(
                    (status = 200, description = "Record deleted", body = DeleteResponse),
                    (status = 401, description = "Unauthorized", body = ErrorResponse),
                    (status = 403, description = "Role not allowed", body = ErrorResponse),
                    (status = 404, description = "Not found", body = ErrorResponse)
                ),
                tag = $tag,
                security(("bearer_auth" = []))
            )]
            #[instrument(skip(state))]
            pub async fn delete(
                State(state): State<AppState>,
                PathId(id): PathId,
            ) -> Result<Json<DeleteResponse>, AppError> {
                RecordService::<$resource>::delete(&state.db, id).await?;
                Ok(Json(DeleteResponse::ok()))
            }
        }
    };
}

record_controller!(
    patients,
    resource = Patient,
    payload = PatientPayload,
    path = "/api/patients",
    item_path = "/api/patients/{id}",
    tag = "Patients"
);

record_controller!(
    doctors,
    resource = Doctor,
    payload = DoctorPayload,
    path = "/api/doctors",
    item_path = "/api/doctors/{id}",
    tag = "Doctors"
);

record_controller!(
    medicines,
    resource = Medicine,
    payload = MedicinePayload,
    path = "/api/medicines",
    item_path = "/api/medicines/{id}",
    tag = "Pharmacy"
);

record_controller!(
    staff,
    resource = StaffMember,
    payload = StaffPayload,
    path = "/api/staff",
    item_path = "/api/staff/{id}",
    tag = "Staff"
);

record_controller!(
    lab_tests,
    resource = LabTest,
    payload = LabTestPayload,
    path = "/api/lab-tests",
    item_path = "/api/lab-tests/{id}",
    tag = "Laboratory"
);

record_controller!(
    invoices,
    resource = Invoice,
    payload = InvoicePayload,
    path = "/api/invoices",
    item_path = "/api/invoices/{id}",
    tag = "Billing"
);
