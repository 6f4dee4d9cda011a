use hms_core::AppError;
use hms_models::appointments::DEFAULT_STATUS;
use hms_models::invoices::PAID_STATUS;
use hms_models::reports::ReportSummary;
use sqlx::SqlitePool;
use tracing::instrument;

pub struct ReportService;

impl ReportService {
    #[instrument(skip(db))]
    pub async fn summary(db: &SqlitePool) -> Result<ReportSummary, AppError> {
        let summary = sqlx::query_as::<_, ReportSummary>(
            r#"SELECT
                (SELECT COUNT(*) FROM users) AS users,
                (SELECT COUNT(*) FROM patients) AS patients,
                (SELECT COUNT(*) FROM doctors) AS doctors,
                (SELECT COUNT(*) FROM appointments) AS appointments,
                (SELECT COUNT(*) FROM appointments WHERE status = ?) AS scheduled_appointments,
                (SELECT COUNT(*) FROM medicines) AS medicines,
                (SELECT COUNT(*) FROM lab_tests) AS lab_tests,
                (SELECT COUNT(*) FROM invoices) AS invoices,
                (SELECT COUNT(*) FROM staff) AS staff,
                (SELECT CAST(COALESCE(SUM(total), 0) AS REAL) FROM invoices) AS billed_total,
                (SELECT CAST(COALESCE(SUM(total), 0) AS REAL) FROM invoices WHERE status <> ?)
                    AS outstanding_total"#,
        )
        .bind(DEFAULT_STATUS)
        .bind(PAID_STATUS)
        .fetch_one(db)
        .await?;

        Ok(summary)
    }
}
