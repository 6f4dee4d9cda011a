//! # HMS CLI
//!
//! Administration and seeding utilities for the HMS database.
//!
//! ## Usage
//!
//! ```ignore
//! use hms_cli::admin::create_admin;
//! use hms_cli::seeder::{SeedConfig, seed_all};
//!
//! create_admin(&pool, "Jane Admin", "jane@hms.local", "s3cret").await?;
//! seed_all(&pool, SeedConfig::default()).await?;
//! ```

pub mod admin;
pub mod seeder;
