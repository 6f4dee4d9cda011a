//! Identity models.

use chrono::NaiveDateTime;
use hms_core::Role;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// An identity as exposed to callers. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
    #[schema(value_type = String, example = "2025-01-01 08:00:00")]
    pub created_at: NaiveDateTime,
}

/// An identity row together with its stored password digest.
///
/// Only the login flow reads this; it is never serialized.
#[derive(Debug, Clone, FromRow)]
pub struct UserCredentials {
    #[sqlx(flatten)]
    pub user: User,
    pub password_hash: String,
}
