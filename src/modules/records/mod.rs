//! Generic CRUD over the business records.
//!
//! Patients, doctors, medicines, staff, lab tests and invoices share one
//! implementation parameterized by [`hms_models::RecordResource`].

pub mod controller;
pub mod router;
pub mod service;
