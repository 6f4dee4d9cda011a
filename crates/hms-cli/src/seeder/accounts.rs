//! Demo logins, one per non-admin role.

use hms_core::{Role, hash_password};
use sqlx::SqlitePool;

pub const ACCOUNT_DOMAIN: &str = "hms.local";

pub fn account_email(role: Role) -> String {
    format!("{}@{}", role.as_str().replace('_', "."), ACCOUNT_DOMAIN)
}

/// Creates `<role>@hms.local` for every non-admin role, skipping addresses
/// that already exist. Returns the number of accounts created.
pub async fn seed_role_accounts(db: &SqlitePool, password: &str) -> anyhow::Result<usize> {
    let password_hash = hash_password(password).map_err(|e| e.error)?;

    let mut created = 0;
    for role in Role::ALL.into_iter().filter(|role| !role.is_admin()) {
        let result = sqlx::query(
            r#"INSERT INTO users (name, email, password_hash, role)
               VALUES (?, ?, ?, ?)
               ON CONFLICT (email) DO NOTHING"#,
        )
        .bind(format!("Demo {}", role.as_str().replace('_', " ")))
        .bind(account_email(role))
        .bind(&password_hash)
        .bind(role.as_str())
        .execute(db)
        .await?;
        created += result.rows_affected() as usize;
    }

    Ok(created)
}
