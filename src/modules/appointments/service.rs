use hms_core::AppError;
use hms_models::appointments::{Appointment, AppointmentPayload, AppointmentWithNames};
use sqlx::SqlitePool;
use tracing::instrument;

use crate::modules::records::service::map_write_error;

fn not_found() -> AppError {
    AppError::not_found(anyhow::anyhow!("Appointment not found"))
}

const SELECT_WITH_NAMES: &str = r#"
    SELECT a.id, a.patient_id, a.doctor_id, a.date, a.time, a.status, a.notes, a.created_at,
           p.name AS patient_name, d.name AS doctor_name
    FROM appointments a
    LEFT JOIN patients p ON p.id = a.patient_id
    LEFT JOIN doctors d ON d.id = a.doctor_id
"#;

pub struct AppointmentService;

impl AppointmentService {
    /// Newest first, with patient and doctor names.
    #[instrument(skip(db))]
    pub async fn list(db: &SqlitePool) -> Result<Vec<AppointmentWithNames>, AppError> {
        let sql = format!("{} ORDER BY a.id DESC", SELECT_WITH_NAMES);
        let appointments = sqlx::query_as::<_, AppointmentWithNames>(&sql)
            .fetch_all(db)
            .await?;
        Ok(appointments)
    }

    #[instrument(skip(db))]
    pub async fn get(db: &SqlitePool, id: i64) -> Result<AppointmentWithNames, AppError> {
        let sql = format!("{} WHERE a.id = ?", SELECT_WITH_NAMES);
        sqlx::query_as::<_, AppointmentWithNames>(&sql)
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(not_found)
    }

    #[instrument(skip(db, dto), fields(patient_id = dto.patient_id, doctor_id = dto.doctor_id))]
    pub async fn create(db: &SqlitePool, dto: &AppointmentPayload) -> Result<Appointment, AppError> {
        let appointment = sqlx::query_as::<_, Appointment>(
            r#"INSERT INTO appointments (patient_id, doctor_id, date, time, status, notes)
               VALUES (?, ?, ?, ?, ?, ?)
               RETURNING *"#,
        )
        .bind(dto.patient_id)
        .bind(dto.doctor_id)
        .bind(&dto.date)
        .bind(dto.time_or_default())
        .bind(dto.status_or_default())
        .bind(dto.notes_or_default())
        .fetch_one(db)
        .await
        .map_err(map_write_error)?;

        Ok(appointment)
    }

    #[instrument(skip(db, dto))]
    pub async fn update(
        db: &SqlitePool,
        id: i64,
        dto: &AppointmentPayload,
    ) -> Result<Appointment, AppError> {
        sqlx::query_as::<_, Appointment>(
            r#"UPDATE appointments
               SET patient_id = ?, doctor_id = ?, date = ?, time = ?, status = ?, notes = ?
               WHERE id = ?
               RETURNING *"#,
        )
        .bind(dto.patient_id)
        .bind(dto.doctor_id)
        .bind(&dto.date)
        .bind(dto.time_or_default())
        .bind(dto.status_or_default())
        .bind(dto.notes_or_default())
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(map_write_error)?
        .ok_or_else(not_found)
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &SqlitePool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = ?")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }
        Ok(())
    }
}
