//! Fake business records.

use chrono::{Duration, Utc};
use fake::Fake;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use sqlx::SqlitePool;

use super::models::{AppointmentSeed, DoctorSeed, MedicineSeed, PatientSeed, StaffSeed};

const GENDERS: &[&str] = &["female", "male", "other"];
const SPECIALTIES: &[&str] = &[
    "Cardiology",
    "Dermatology",
    "General Practice",
    "Neurology",
    "Orthopedics",
    "Pediatrics",
    "Radiology",
];
const AVAILABILITY: &[&str] = &["Mon-Fri 09:00-17:00", "Mon-Wed 08:00-14:00", "Weekends", "Nights"];
const MEDICINES: &[&str] = &[
    "Amoxicillin 500mg",
    "Atorvastatin 20mg",
    "Ibuprofen 400mg",
    "Metformin 850mg",
    "Omeprazole 20mg",
    "Paracetamol 500mg",
    "Salbutamol inhaler",
];
const STAFF_ROLES: &[&str] = &["Ward Nurse", "Porter", "Cleaner", "Receptionist", "Pharmacist"];
const SHIFTS: &[&str] = &["morning", "afternoon", "night"];

fn pick<'a>(options: &[&'a str]) -> &'a str {
    options[(0..options.len()).fake::<usize>()]
}

pub fn generate_patients(count: usize) -> Vec<PatientSeed> {
    (0..count)
        .map(|_| PatientSeed {
            name: Name().fake(),
            age: (0..100).fake(),
            gender: pick(GENDERS).to_string(),
            contact: PhoneNumber().fake(),
        })
        .collect()
}

pub fn generate_doctors(count: usize) -> Vec<DoctorSeed> {
    (0..count)
        .map(|_| DoctorSeed {
            name: format!("Dr. {}", Name().fake::<String>()),
            specialty: pick(SPECIALTIES).to_string(),
            availability: pick(AVAILABILITY).to_string(),
        })
        .collect()
}

/// Medicine names repeat once the catalogue is exhausted, with a batch suffix.
pub fn generate_medicines(count: usize) -> Vec<MedicineSeed> {
    (0..count)
        .map(|i| {
            let base = MEDICINES[i % MEDICINES.len()];
            let name = match i / MEDICINES.len() {
                0 => base.to_string(),
                batch => format!("{} (batch {})", base, batch + 1),
            };
            MedicineSeed {
                name,
                stock: (0..500).fake(),
                price: ((50..10_000).fake::<i64>() as f64) / 100.0,
            }
        })
        .collect()
}

pub fn generate_staff(count: usize) -> Vec<StaffSeed> {
    (0..count)
        .map(|_| StaffSeed {
            name: Name().fake(),
            role: pick(STAFF_ROLES).to_string(),
            shift: pick(SHIFTS).to_string(),
        })
        .collect()
}

/// Appointments spread over the next 30 days between 08:00 and 16:45.
pub fn generate_appointments(
    count: usize,
    patient_ids: &[i64],
    doctor_ids: &[i64],
) -> Vec<AppointmentSeed> {
    if patient_ids.is_empty() || doctor_ids.is_empty() {
        return Vec::new();
    }

    let today = Utc::now().date_naive();
    (0..count)
        .map(|_| {
            let date = today + Duration::days((0..30).fake::<i64>());
            AppointmentSeed {
                patient_id: patient_ids[(0..patient_ids.len()).fake::<usize>()],
                doctor_id: doctor_ids[(0..doctor_ids.len()).fake::<usize>()],
                date: date.format("%Y-%m-%d").to_string(),
                time: format!(
                    "{:02}:{:02}",
                    (8..17).fake::<u32>(),
                    15 * (0..4).fake::<u32>()
                ),
            }
        })
        .collect()
}

pub async fn insert_patients(db: &SqlitePool, seeds: &[PatientSeed]) -> anyhow::Result<Vec<i64>> {
    let mut tx = db.begin().await?;
    let mut ids = Vec::with_capacity(seeds.len());
    for seed in seeds {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO patients (name, age, gender, contact) VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(&seed.name)
        .bind(seed.age)
        .bind(&seed.gender)
        .bind(&seed.contact)
        .fetch_one(&mut *tx)
        .await?;
        ids.push(id);
    }
    tx.commit().await?;
    Ok(ids)
}

pub async fn insert_doctors(db: &SqlitePool, seeds: &[DoctorSeed]) -> anyhow::Result<Vec<i64>> {
    let mut tx = db.begin().await?;
    let mut ids = Vec::with_capacity(seeds.len());
    for seed in seeds {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO doctors (name, specialty, availability) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(&seed.name)
        .bind(&seed.specialty)
        .bind(&seed.availability)
        .fetch_one(&mut *tx)
        .await?;
        ids.push(id);
    }
    tx.commit().await?;
    Ok(ids)
}

pub async fn insert_medicines(db: &SqlitePool, seeds: &[MedicineSeed]) -> anyhow::Result<usize> {
    let mut tx = db.begin().await?;
    for seed in seeds {
        sqlx::query("INSERT INTO medicines (name, stock, price) VALUES (?, ?, ?)")
            .bind(&seed.name)
            .bind(seed.stock)
            .bind(seed.price)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    Ok(seeds.len())
}

pub async fn insert_staff(db: &SqlitePool, seeds: &[StaffSeed]) -> anyhow::Result<usize> {
    let mut tx = db.begin().await?;
    for seed in seeds {
        sqlx::query("INSERT INTO staff (name, role, shift) VALUES (?, ?, ?)")
            .bind(&seed.name)
            .bind(&seed.role)
            .bind(&seed.shift)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    Ok(seeds.len())
}

pub async fn insert_appointments(
    db: &SqlitePool,
    seeds: &[AppointmentSeed],
) -> anyhow::Result<usize> {
    let mut tx = db.begin().await?;
    for seed in seeds {
        sqlx::query(
            r#"INSERT INTO appointments (patient_id, doctor_id, date, time, status, notes)
               VALUES (?, ?, ?, ?, 'scheduled', '')"#,
        )
        .bind(seed.patient_id)
        .bind(seed.doctor_id)
        .bind(&seed.date)
        .bind(&seed.time)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;
    Ok(seeds.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_counts() {
        assert_eq!(generate_patients(7).len(), 7);
        assert_eq!(generate_doctors(3).len(), 3);
        assert_eq!(generate_staff(0).len(), 0);
    }

    #[test]
    fn test_patient_fields_in_range() {
        for patient in generate_patients(50) {
            assert!((0..100).contains(&patient.age));
            assert!(GENDERS.contains(&patient.gender.as_str()));
            assert!(!patient.name.is_empty());
        }
    }

    #[test]
    fn test_medicine_names_unique() {
        let medicines = generate_medicines(MEDICINES.len() * 2 + 1);
        let mut names: Vec<&str> = medicines.iter().map(|m| m.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), medicines.len());
        assert!(medicines.iter().all(|m| m.price >= 0.5 && m.stock >= 0));
    }

    #[test]
    fn test_appointments_reference_given_ids() {
        let appointments = generate_appointments(20, &[4, 5], &[9]);
        assert_eq!(appointments.len(), 20);
        for appointment in appointments {
            assert!([4, 5].contains(&appointment.patient_id));
            assert_eq!(appointment.doctor_id, 9);
            assert_eq!(appointment.time.len(), 5);
        }
    }

    #[test]
    fn test_appointments_need_patients_and_doctors() {
        assert!(generate_appointments(5, &[], &[1]).is_empty());
        assert!(generate_appointments(5, &[1], &[]).is_empty());
    }
}
