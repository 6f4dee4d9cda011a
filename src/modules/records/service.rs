use std::marker::PhantomData;

use anyhow::anyhow;
use hms_core::AppError;
use hms_models::{RecordPayload, RecordResource, SqlValue};
use sqlx::error::ErrorKind;
use sqlx::query::QueryAs;
use sqlx::sqlite::{Sqlite, SqliteArguments};
use sqlx::SqlitePool;
use tracing::instrument;

/// Binds `values` in order.
pub fn bind_values<'q, O>(
    mut query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    values: Vec<SqlValue>,
) -> QueryAs<'q, Sqlite, O, SqliteArguments<'q>> {
    for value in values {
        query = match value {
            SqlValue::Text(v) => query.bind(v),
            SqlValue::Integer(v) => query.bind(v),
            SqlValue::Real(v) => query.bind(v),
        };
    }
    query
}

/// Maps constraint failures on insert/update to client errors.
pub fn map_write_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        match db_err.kind() {
            ErrorKind::ForeignKeyViolation => {
                return AppError::bad_request(anyhow!("Referenced record does not exist"));
            }
            ErrorKind::NotNullViolation => {
                return AppError::bad_request(anyhow!("A required field is missing"));
            }
            ErrorKind::UniqueViolation => {
                return AppError::conflict(anyhow!("Record already exists"));
            }
            _ => {}
        }
    }
    AppError::from(e)
}

pub fn not_found<R: RecordResource>() -> AppError {
    AppError::not_found(anyhow!("{} not found", R::LABEL))
}

fn insert_sql<R: RecordResource>() -> String {
    let placeholders = vec!["?"; R::COLUMNS.len()].join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
        R::TABLE,
        R::COLUMNS.join(", "),
        placeholders
    )
}

fn update_sql<R: RecordResource>() -> String {
    let assignments = R::COLUMNS
        .iter()
        .map(|column| format!("{} = ?", column))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE {} SET {} WHERE id = ? RETURNING *",
        R::TABLE,
        assignments
    )
}

/// List, read, create, replace and delete for any [`RecordResource`].
pub struct RecordService<R>(PhantomData<R>);

impl<R: RecordResource> RecordService<R> {
    /// Newest first.
    #[instrument(skip(db), fields(table = R::TABLE))]
    pub async fn list(db: &SqlitePool) -> Result<Vec<R>, AppError> {
        let sql = format!("SELECT * FROM {} ORDER BY id DESC", R::TABLE);
        let records = sqlx::query_as::<_, R>(&sql).fetch_all(db).await?;
        Ok(records)
    }

    #[instrument(skip(db), fields(table = R::TABLE))]
    pub async fn get(db: &SqlitePool, id: i64) -> Result<R, AppError> {
        let sql = format!("SELECT * FROM {} WHERE id = ?", R::TABLE);
        sqlx::query_as::<_, R>(&sql)
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(not_found::<R>)
    }

    #[instrument(skip(db, payload), fields(table = R::TABLE))]
    pub async fn create(db: &SqlitePool, payload: &R::Payload) -> Result<R, AppError> {
        let sql = insert_sql::<R>();
        let record = bind_values(sqlx::query_as::<_, R>(&sql), payload.values())
            .fetch_one(db)
            .await
            .map_err(map_write_error)?;
        Ok(record)
    }

    /// Replaces every writable column.
    #[instrument(skip(db, payload), fields(table = R::TABLE))]
    pub async fn update(db: &SqlitePool, id: i64, payload: &R::Payload) -> Result<R, AppError> {
        let sql = update_sql::<R>();
        bind_values(sqlx::query_as::<_, R>(&sql), payload.values())
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(map_write_error)?
            .ok_or_else(not_found::<R>)
    }

    #[instrument(skip(db), fields(table = R::TABLE))]
    pub async fn delete(db: &SqlitePool, id: i64) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {} WHERE id = ?", R::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(db).await?;

        if result.rows_affected() == 0 {
            return Err(not_found::<R>());
        }
        Ok(())
    }
}
