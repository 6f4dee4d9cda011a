//! # HMS Core
//!
//! Core types, errors, and utilities for the HMS API.
//!
//! This crate provides foundational types used throughout the application:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: Salted password hashing and verification
//! - [`roles`]: The closed set of identity roles
//! - [`permissions`]: The server-side role authorization table
//! - [`navigation`]: The client navigation mirror of the role table
//!
//! # Example
//!
//! ```ignore
//! use axum::http::Method;
//! use hms_core::{AppError, Role, hash_password, permissions};
//!
//! let hash = hash_password("admin123")?;
//!
//! if !permissions::is_allowed(Role::Nurse, &Method::GET, "/api/staff") {
//!     return Err(AppError::forbidden(anyhow::anyhow!("Forbidden")));
//! }
//! ```

pub mod errors;
pub mod navigation;
pub mod password;
pub mod permissions;
pub mod roles;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{hash_password, verify_password};
pub use roles::Role;
