use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::records::{RecordPayload, RecordResource, SqlValue};

/// A staff roster entry. `role` is a job title, unrelated to login roles.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct StaffMember {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub shift: Option<String>,
    #[schema(value_type = String)]
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct StaffPayload {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "role is required"))]
    #[schema(example = "Ward Nurse")]
    pub role: String,
    #[schema(example = "night")]
    pub shift: Option<String>,
}

impl RecordPayload for StaffPayload {
    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.name.clone().into(),
            self.role.clone().into(),
            self.shift.clone().into(),
        ]
    }
}

impl RecordResource for StaffMember {
    const TABLE: &'static str = "staff";
    const COLUMNS: &'static [&'static str] = &["name", "role", "shift"];
    const LABEL: &'static str = "Staff member";

    type Payload = StaffPayload;
}
