//! # HMS Auth
//!
//! Bearer token issuance and verification.
//!
//! Tokens are HS256 JWTs carrying the identity id and its role at issuance
//! time. They are not stored server-side: a token stays valid until it
//! expires, even if the stored identity's role changes in the meantime.
//!
//! - [`claims`]: The claim set embedded in every token
//! - [`jwt`]: Token creation and verification

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{create_access_token, create_token_with_lifetime, verify_token};
