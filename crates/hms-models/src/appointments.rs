//! Appointment models.
//!
//! An appointment links a patient to a doctor. Both references are required
//! and deleting either record deletes its appointments.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

pub const DEFAULT_STATUS: &str = "scheduled";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Appointment {
    pub id: i64,
    pub patient_id: i64,
    pub doctor_id: i64,
    #[schema(example = "2025-03-14")]
    pub date: String,
    #[schema(example = "10:30")]
    pub time: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    #[schema(value_type = String)]
    pub created_at: NaiveDateTime,
}

/// Listing row with the names of the linked patient and doctor.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AppointmentWithNames {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub appointment: Appointment,
    pub patient_name: Option<String>,
    pub doctor_name: Option<String>,
}

/// Body for creating or replacing an appointment.
///
/// Omitted `time` and `notes` are stored as empty strings and an omitted
/// `status` as `scheduled`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AppointmentPayload {
    pub patient_id: i64,
    pub doctor_id: i64,
    #[validate(length(min = 1, message = "date is required"))]
    pub date: String,
    pub time: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl AppointmentPayload {
    pub fn time_or_default(&self) -> &str {
        self.time.as_deref().unwrap_or_default()
    }

    pub fn status_or_default(&self) -> &str {
        self.status
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_STATUS)
    }

    pub fn notes_or_default(&self) -> &str {
        self.notes.as_deref().unwrap_or_default()
    }
}
