//! Database seeding with fake data for development and demos.

pub mod accounts;
pub mod models;
pub mod records;

use std::time::Instant;

use sqlx::SqlitePool;

pub use models::{SeedConfig, SeedSummary};

/// Password given to every demo account.
pub const DEMO_PASSWORD: &str = "password123";

pub async fn seed_all(db: &SqlitePool, config: SeedConfig) -> anyhow::Result<SeedSummary> {
    let start_time = Instant::now();

    println!("🌱 Seeding database...");
    println!(
        "   - Patients: {}, Doctors: {}, Appointments: {}",
        config.patients, config.doctors, config.appointments
    );
    println!("   - Medicines: {}, Staff: {}", config.medicines, config.staff);

    let patient_ids = records::insert_patients(db, &records::generate_patients(config.patients)).await?;
    let doctor_ids = records::insert_doctors(db, &records::generate_doctors(config.doctors)).await?;
    let medicines =
        records::insert_medicines(db, &records::generate_medicines(config.medicines)).await?;
    let staff = records::insert_staff(db, &records::generate_staff(config.staff)).await?;
    let appointments = records::insert_appointments(
        db,
        &records::generate_appointments(config.appointments, &patient_ids, &doctor_ids),
    )
    .await?;

    let accounts = if config.role_accounts {
        accounts::seed_role_accounts(db, DEMO_PASSWORD).await?
    } else {
        0
    };

    let summary = SeedSummary {
        patients: patient_ids.len(),
        doctors: doctor_ids.len(),
        medicines,
        staff,
        appointments,
        accounts,
    };

    println!("✅ Seeding complete in {:.2?}", start_time.elapsed());
    if accounts > 0 {
        println!(
            "   Demo accounts use the password '{}' (e.g. {})",
            DEMO_PASSWORD,
            accounts::account_email(hms_core::Role::Doctor)
        );
    }

    Ok(summary)
}

/// Deletes all business records. Login accounts are kept.
pub async fn clear_all(db: &SqlitePool) -> anyhow::Result<()> {
    let mut tx = db.begin().await?;
    for table in [
        "appointments",
        "lab_tests",
        "invoices",
        "medicines",
        "staff",
        "patients",
        "doctors",
    ] {
        sqlx::query(&format!("DELETE FROM {}", table))
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    println!("✅ Cleared all records");
    Ok(())
}
