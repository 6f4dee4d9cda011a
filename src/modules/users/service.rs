use anyhow::anyhow;
use hms_core::{AppError, Role};
use hms_models::{User, UserCredentials};
use sqlx::SqlitePool;
use tracing::instrument;

pub const EMAIL_TAKEN_MESSAGE: &str = "Email already registered";

pub struct UserService;

impl UserService {
    /// Email lookup is exact: addresses are compared as stored.
    #[instrument(skip(db))]
    pub async fn find_credentials_by_email(
        db: &SqlitePool,
        email: &str,
    ) -> Result<Option<UserCredentials>, AppError> {
        let credentials = sqlx::query_as::<_, UserCredentials>(
            r#"SELECT id, name, email, role, created_at, password_hash
               FROM users WHERE email = ? LIMIT 1"#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;

        Ok(credentials)
    }

    #[instrument(skip(db))]
    pub async fn find_by_id(db: &SqlitePool, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, role, created_at FROM users WHERE id = ? LIMIT 1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn email_exists(db: &SqlitePool, email: &str) -> Result<bool, AppError> {
        let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE email = ? LIMIT 1")
            .bind(email)
            .fetch_optional(db)
            .await?;

        Ok(existing.is_some())
    }

    /// Inserts a new identity. A duplicate email, including one inserted
    /// concurrently after the caller's own check, yields 409.
    #[instrument(skip(db, password_hash))]
    pub async fn create_user(
        db: &SqlitePool,
        name: &str,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            r#"INSERT INTO users (name, email, password_hash, role)
               VALUES (?, ?, ?, ?)
               RETURNING id, name, email, role, created_at"#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(role.as_str())
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::conflict(anyhow!(EMAIL_TAKEN_MESSAGE));
            }
            AppError::from(e)
        })
    }
}
