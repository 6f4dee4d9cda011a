//! # HMS DB
//!
//! Database pool and bootstrap for the HMS API.
//!
//! The application keeps all of its state in a single SQLite file. This crate
//! opens the connection pool (creating the file and its directory on first
//! run), applies the embedded migrations and seeds the default administrator.
//!
//! # Example
//!
//! ```ignore
//! use hms_config::DatabaseConfig;
//! use hms_db::{init_db_pool, run_migrations, seed_default_admin};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//! run_migrations(&pool).await?;
//! seed_default_admin(&pool).await?;
//! ```

use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use hms_config::DatabaseConfig;
use hms_core::{Role, hash_password};

// Re-export SqlitePool for convenience
pub use sqlx::SqlitePool;

pub const DEFAULT_ADMIN_NAME: &str = "Admin";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@hms.local";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Opens the SQLite pool described by `config`.
///
/// The database file and its parent directory are created when missing.
/// Foreign key enforcement is switched on for every connection.
pub async fn init_db_pool(config: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    if let Some(parent) = config
        .file_path()
        .and_then(|path| Path::new(path).parent())
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create database directory {}", parent.display()))?;
    }

    let options = SqliteConnectOptions::from_str(&config.url)
        .with_context(|| format!("Invalid DATABASE_URL: {}", config.url))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    tracing::info!(url = %config.url, "Database pool ready");
    Ok(pool)
}

/// Opens a private in-memory database holding a single connection.
///
/// Each in-memory SQLite connection is its own database, so the pool never
/// grows past one connection and never recycles it.
pub async fn init_in_memory_pool() -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .context("Failed to open in-memory database")?;

    Ok(pool)
}

/// Applies the embedded schema migrations.
pub async fn run_migrations(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")?;
    Ok(())
}

/// Creates the default administrator unless an admin already exists.
///
/// Returns `true` when an account was created.
pub async fn seed_default_admin(pool: &SqlitePool) -> anyhow::Result<bool> {
    let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE role = ? LIMIT 1")
        .bind(Role::Admin.as_str())
        .fetch_optional(pool)
        .await?;

    if existing.is_some() {
        return Ok(false);
    }

    let password_hash = hash_password(DEFAULT_ADMIN_PASSWORD).map_err(|e| e.error)?;

    sqlx::query("INSERT INTO users (name, email, password_hash, role) VALUES (?, ?, ?, ?)")
        .bind(DEFAULT_ADMIN_NAME)
        .bind(DEFAULT_ADMIN_EMAIL)
        .bind(password_hash)
        .bind(Role::Admin.as_str())
        .execute(pool)
        .await
        .context("Failed to seed default admin")?;

    tracing::warn!(
        email = DEFAULT_ADMIN_EMAIL,
        "Seeded default admin account; change its password before going live"
    );
    Ok(true)
}
