//! Administrator account creation.

use anyhow::{Context, bail};
use hms_core::{Role, hash_password};
use sqlx::SqlitePool;

/// Creates an administrator and returns its id.
///
/// Fails if the email is already registered; an existing account is never
/// modified.
pub async fn create_admin(
    db: &SqlitePool,
    name: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<i64> {
    if name.trim().is_empty() || email.trim().is_empty() {
        bail!("Name and email are required");
    }

    let password_hash = hash_password(password)
        .map_err(|e| e.error)
        .context("Failed to hash password")?;

    let id: Option<i64> = sqlx::query_scalar(
        r#"INSERT INTO users (name, email, password_hash, role)
           VALUES (?, ?, ?, ?)
           ON CONFLICT (email) DO NOTHING
           RETURNING id"#,
    )
    .bind(name.trim())
    .bind(email.trim())
    .bind(&password_hash)
    .bind(Role::Admin.as_str())
    .fetch_optional(db)
    .await?;

    match id {
        Some(id) => Ok(id),
        None => bail!("User with this email already exists"),
    }
}
