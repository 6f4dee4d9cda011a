//! # HMS API
//!
//! REST API for a small hospital: patients, doctors, appointments, pharmacy,
//! laboratory, billing and staff records behind role-based access control.
//! Built with Rust, Axum and SQLite.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Auth gate and identity extractors
//! ├── modules/          # Feature modules
//! │   ├── auth/         # Login, account creation, current identity
//! │   ├── users/        # Credential store
//! │   ├── records/      # Generic CRUD for business records
//! │   ├── appointments/ # Appointment scheduling
//! │   ├── reports/      # Administrative summary
//! │   └── navigation/   # Role-filtered client navigation
//! ├── docs.rs           # OpenAPI document
//! ├── logging.rs        # Tracing setup and request logging
//! ├── router.rs         # Application router
//! ├── state.rs          # Shared application state
//! └── validator.rs      # Validated JSON extractor
//! ```
//!
//! Each feature module is split into `controller.rs` (HTTP handlers),
//! `service.rs` (database access and business rules) and `router.rs`.
//!
//! ## Roles
//!
//! | Role | Access |
//! |------|--------|
//! | admin | Everything, including account creation and reports |
//! | doctor | Patients, doctor directory, appointments, laboratory |
//! | nurse | Patients |
//! | receptionist | Patients, doctor directory, appointments, billing |
//! | pharmacist | Pharmacy |
//! | lab_technician | Laboratory |
//! | patient | Doctor directory, appointments |
//!
//! The full table lives in [`hms_core::permissions`] and is enforced for
//! every protected request by [`middleware::auth::auth_gate`].
//!
//! ## Authentication
//!
//! `POST /api/auth/login` exchanges email and password for a bearer token
//! valid for seven days. Accounts are created only by administrators through
//! `POST /api/auth/register`. On first start the server seeds
//! `admin@hms.local` / `admin123`.
//!
//! ## Configuration
//!
//! ```bash
//! DATABASE_URL=sqlite://data/hms.sqlite
//! JWT_SECRET=change-me
//! JWT_EXPIRY=604800
//! ALLOWED_ORIGINS=http://localhost:5173
//! PORT=4000
//! ```
//!
//! API documentation is served at `/swagger-ui` and `/scalar`.

pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use hms_auth;
pub use hms_config;
pub use hms_core;
pub use hms_db;
pub use hms_models;
