use serde::Serialize;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

use hms_core::Role;
use hms_models::appointments::{Appointment, AppointmentPayload, AppointmentWithNames};
use hms_models::doctors::{Doctor, DoctorPayload};
use hms_models::invoices::{Invoice, InvoicePayload};
use hms_models::lab_tests::{LabTest, LabTestPayload};
use hms_models::medicines::{Medicine, MedicinePayload};
use hms_models::navigation::{NavigationLink, NavigationResponse};
use hms_models::patients::{Patient, PatientPayload};
use hms_models::reports::ReportSummary;
use hms_models::staff::{StaffMember, StaffPayload};
use hms_models::{DeleteResponse, LoginRequest, LoginResponse, RegisterRequest, User, UserEnvelope};

use crate::modules::health::HealthResponse;

/// Body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Unauthorized")]
    pub error: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::health_check,
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::get_current_user,
        crate::modules::navigation::controller::get_navigation,
        crate::modules::reports::controller::get_summary,
        crate::modules::appointments::controller::get_appointments,
        crate::modules::appointments::controller::create_appointment,
        crate::modules::appointments::controller::get_appointment,
        crate::modules::appointments::controller::update_appointment,
        crate::modules::appointments::controller::delete_appointment,
        crate::modules::records::controller::patients::list,
        crate::modules::records::controller::patients::create,
        crate::modules::records::controller::patients::get_one,
        crate::modules::records::controller::patients::update,
        crate::modules::records::controller::patients::delete,
        crate::modules::records::controller::doctors::list,
        crate::modules::records::controller::doctors::create,
        crate::modules::records::controller::doctors::get_one,
        crate::modules::records::controller::doctors::update,
        crate::modules::records::controller::doctors::delete,
        crate::modules::records::controller::medicines::list,
        crate::modules::records::controller::medicines::create,
        crate::modules::records::controller::medicines::get_one,
        crate::modules::records::controller::medicines::update,
        crate::modules::records::controller::medicines::delete,
        crate::modules::records::controller::staff::list,
        crate::modules::records::controller::staff::create,
        crate::modules::records::controller::staff::get_one,
        crate::modules::records::controller::staff::update,
        crate::modules::records::controller::staff::delete,
        crate::modules::records::controller::lab_tests::list,
        crate::modules::records::controller::lab_tests::create,
        crate::modules::records::controller::lab_tests::get_one,
        crate::modules::records::controller::lab_tests::update,
        crate::modules::records::controller::lab_tests::delete,
        crate::modules::records::controller::invoices::list,
        crate::modules::records::controller::invoices::create,
        crate::modules::records::controller::invoices::get_one,
        crate::modules::records::controller::invoices::update,
        crate::modules::records::controller::invoices::delete,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            Role,
            User,
            UserEnvelope,
            LoginRequest,
            LoginResponse,
            RegisterRequest,
            NavigationLink,
            NavigationResponse,
            ReportSummary,
            DeleteResponse,
            Appointment,
            AppointmentWithNames,
            AppointmentPayload,
            Patient,
            PatientPayload,
            Doctor,
            DoctorPayload,
            Medicine,
            MedicinePayload,
            StaffMember,
            StaffPayload,
            LabTest,
            LabTestPayload,
            Invoice,
            InvoicePayload,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness check"),
        (name = "Authentication", description = "Login, account creation and current identity"),
        (name = "Navigation", description = "Role-filtered client navigation"),
        (name = "Patients", description = "Patient records"),
        (name = "Doctors", description = "Doctor directory"),
        (name = "Appointments", description = "Appointment scheduling"),
        (name = "Pharmacy", description = "Medicine inventory"),
        (name = "Laboratory", description = "Lab test orders"),
        (name = "Billing", description = "Invoices"),
        (name = "Staff", description = "Staff roster"),
        (name = "Reports", description = "Administrative summaries")
    ),
    info(
        title = "HMS API",
        version = "0.1.0",
        description = "Hospital management REST API built with Rust, Axum and SQLite, with JWT authentication and role-based access control.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
