//! Middleware and extractors for authentication and authorization.
//!
//! # Modules
//!
//! - [`auth`]: The auth gate and the [`auth::AuthUser`] extractor
//! - [`role`]: Role checks for individual handlers
//!
//! # Request Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::auth_gate`] verifies the token (401 on any failure)
//! 3. The gate looks up the matched route in the role authorization table
//!    (403 if the role is not listed or the route is unknown)
//! 4. The handler runs, reading the identity through [`auth::AuthUser`]

pub mod auth;
pub mod role;
