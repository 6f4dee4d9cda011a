//! The contract behind the generic CRUD routes.
//!
//! A business record that can be listed, read, created, fully updated and
//! deleted implements [`RecordResource`]. Table and column identifiers are
//! compile-time constants; request values only ever reach the database as
//! bound parameters, in the order of [`RecordResource::COLUMNS`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::sqlite::SqliteRow;
use utoipa::ToSchema;
use validator::Validate;

/// A bindable column value.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(Option<String>),
    Integer(Option<i64>),
    Real(Option<f64>),
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(Some(value))
    }
}

impl From<Option<String>> for SqlValue {
    fn from(value: Option<String>) -> Self {
        SqlValue::Text(value)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Integer(Some(value))
    }
}

impl From<Option<i64>> for SqlValue {
    fn from(value: Option<i64>) -> Self {
        SqlValue::Integer(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Real(Some(value))
    }
}

impl From<Option<f64>> for SqlValue {
    fn from(value: Option<f64>) -> Self {
        SqlValue::Real(value)
    }
}

/// Request body accepted for create and full update.
pub trait RecordPayload: DeserializeOwned + Validate + Send + Sync + 'static {
    /// Values for every writable column, in [`RecordResource::COLUMNS`] order.
    fn values(&self) -> Vec<SqlValue>;
}

pub trait RecordResource:
    for<'r> FromRow<'r, SqliteRow> + Serialize + ToSchema + Send + Sync + Unpin + 'static
{
    /// Table name.
    const TABLE: &'static str;
    /// Writable columns. `id` and `created_at` are managed by the database.
    const COLUMNS: &'static [&'static str];
    /// Human readable name used in error messages, e.g. `"Patient"`.
    const LABEL: &'static str;

    type Payload: RecordPayload + ToSchema;
}

/// Body returned by every delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub success: bool,
}

impl DeleteResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
