use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::records::{RecordPayload, RecordResource, SqlValue};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub contact: Option<String>,
    #[schema(value_type = String)]
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct PatientPayload {
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "John Smith")]
    pub name: String,
    #[validate(range(min = 0, max = 150, message = "age must be between 0 and 150"))]
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub contact: Option<String>,
}

impl RecordPayload for PatientPayload {
    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.name.clone().into(),
            self.age.into(),
            self.gender.clone().into(),
            self.contact.clone().into(),
        ]
    }
}

impl RecordResource for Patient {
    const TABLE: &'static str = "patients";
    const COLUMNS: &'static [&'static str] = &["name", "age", "gender", "contact"];
    const LABEL: &'static str = "Patient";

    type Payload = PatientPayload;
}
