//! # HMS Models
//!
//! Domain models and DTOs for the HMS API.
//!
//! This crate provides the data structures used throughout the application,
//! including database entities, request/response DTOs, and validation schemas.
//!
//! # Modules
//!
//! - [`auth`]: Login and registration payloads
//! - [`users`]: Identities as stored and as returned to callers
//! - [`records`]: The [`RecordResource`] contract behind the generic CRUD routes
//! - [`patients`], [`doctors`], [`medicines`], [`staff`], [`lab_tests`], [`invoices`]:
//!   business records served through [`RecordResource`]
//! - [`appointments`]: Appointments and their joined listing view
//! - [`reports`]: Aggregate figures for administrators
//! - [`navigation`]: Client navigation links
//!
//! # Example
//!
//! ```ignore
//! use hms_models::records::RecordResource;
//! use hms_models::patients::Patient;
//!
//! assert_eq!(Patient::TABLE, "patients");
//! ```

pub mod appointments;
pub mod auth;
pub mod doctors;
pub mod invoices;
pub mod medicines;
pub mod navigation;
pub mod patients;
pub mod records;
pub mod reports;
pub mod staff;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{LoginRequest, LoginResponse, RegisterRequest, UserEnvelope};
pub use records::{DeleteResponse, RecordPayload, RecordResource, SqlValue};
pub use users::{User, UserCredentials};
