use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Hospital-wide figures for the administrator dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ReportSummary {
    pub users: i64,
    pub patients: i64,
    pub doctors: i64,
    pub appointments: i64,
    pub scheduled_appointments: i64,
    pub medicines: i64,
    pub lab_tests: i64,
    pub invoices: i64,
    pub staff: i64,
    /// Sum of all invoice totals.
    pub billed_total: f64,
    /// Sum of totals of invoices not marked paid.
    pub outstanding_total: f64,
}
