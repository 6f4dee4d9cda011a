//! Seed rows and seeding configuration.

pub struct PatientSeed {
    pub name: String,
    pub age: i64,
    pub gender: String,
    pub contact: String,
}

pub struct DoctorSeed {
    pub name: String,
    pub specialty: String,
    pub availability: String,
}

pub struct MedicineSeed {
    pub name: String,
    pub stock: i64,
    pub price: f64,
}

pub struct StaffSeed {
    pub name: String,
    pub role: String,
    pub shift: String,
}

pub struct AppointmentSeed {
    pub patient_id: i64,
    pub doctor_id: i64,
    pub date: String,
    pub time: String,
}

/// How many rows of each kind to generate.
#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub patients: usize,
    pub doctors: usize,
    pub medicines: usize,
    pub staff: usize,
    pub appointments: usize,
    /// Also create one login per non-admin role.
    pub role_accounts: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            patients: 50,
            doctors: 10,
            medicines: 30,
            staff: 15,
            appointments: 40,
            role_accounts: false,
        }
    }
}

/// Rows written by a seeding run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub patients: usize,
    pub doctors: usize,
    pub medicines: usize,
    pub staff: usize,
    pub appointments: usize,
    pub accounts: usize,
}
