use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::records::{RecordPayload, RecordResource, SqlValue};

/// A doctor in the hospital directory. Not tied to a login identity.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialty: Option<String>,
    pub availability: Option<String>,
    #[schema(value_type = String)]
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct DoctorPayload {
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Dr. Gregory House")]
    pub name: String,
    #[schema(example = "Diagnostics")]
    pub specialty: Option<String>,
    #[schema(example = "Mon-Fri 09:00-17:00")]
    pub availability: Option<String>,
}

impl RecordPayload for DoctorPayload {
    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.name.clone().into(),
            self.specialty.clone().into(),
            self.availability.clone().into(),
        ]
    }
}

impl RecordResource for Doctor {
    const TABLE: &'static str = "doctors";
    const COLUMNS: &'static [&'static str] = &["name", "specialty", "availability"];
    const LABEL: &'static str = "Doctor";

    type Payload = DoctorPayload;
}
