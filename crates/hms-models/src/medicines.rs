use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::records::{RecordPayload, RecordResource, SqlValue};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Medicine {
    pub id: i64,
    pub name: String,
    pub stock: Option<i64>,
    pub price: Option<f64>,
    #[schema(value_type = String)]
    pub created_at: NaiveDateTime,
}

/// Stock and price fall back to zero when omitted.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct MedicinePayload {
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Paracetamol 500mg")]
    pub name: String,
    #[serde(default)]
    #[validate(range(min = 0, message = "stock cannot be negative"))]
    pub stock: i64,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "price cannot be negative"))]
    pub price: f64,
}

impl RecordPayload for MedicinePayload {
    fn values(&self) -> Vec<SqlValue> {
        vec![self.name.clone().into(), self.stock.into(), self.price.into()]
    }
}

impl RecordResource for Medicine {
    const TABLE: &'static str = "medicines";
    const COLUMNS: &'static [&'static str] = &["name", "stock", "price"];
    const LABEL: &'static str = "Medicine";

    type Payload = MedicinePayload;
}
