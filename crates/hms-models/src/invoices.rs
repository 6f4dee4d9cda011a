use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::records::{RecordPayload, RecordResource, SqlValue};

/// Invoice status that counts as settled in reports.
pub const PAID_STATUS: &str = "paid";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Invoice {
    pub id: i64,
    pub patient_id: Option<i64>,
    pub total: Option<f64>,
    pub status: String,
    #[schema(value_type = String)]
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct InvoicePayload {
    pub patient_id: Option<i64>,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "total cannot be negative"))]
    pub total: f64,
    #[validate(length(min = 1, message = "status is required"))]
    #[schema(example = "unpaid")]
    pub status: String,
}

impl RecordPayload for InvoicePayload {
    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.patient_id.into(),
            self.total.into(),
            self.status.clone().into(),
        ]
    }
}

impl RecordResource for Invoice {
    const TABLE: &'static str = "invoices";
    const COLUMNS: &'static [&'static str] = &["patient_id", "total", "status"];
    const LABEL: &'static str = "Invoice";

    type Payload = InvoicePayload;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::tests::assert_values_match_columns;

    #[test]
    fn test_payload_covers_columns() {
        let payload: InvoicePayload = serde_json::from_str(r#"{"status":"unpaid"}"#).unwrap();
        assert_eq!(payload.total, 0.0);
        assert_values_match_columns::<Invoice>(&payload);
    }
}
