//! Authentication payloads.
//!
//! Missing fields are reported as `"<field> is required"`; the request
//! extractor turns both missing and empty values into a 400.

use hms_core::Role;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::users::User;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "email is required"))]
    #[schema(example = "admin@hms.local")]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "admin123")]
    pub password: String,
}

/// Successful login: the identity and its bearer token.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

/// Account creation request. Only administrators may submit it.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    #[schema(example = "Dr. Jane Doe")]
    pub name: String,
    #[validate(email(message = "email must be a valid email address"))]
    #[schema(example = "jane.doe@hms.local")]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserEnvelope {
    pub user: User,
}
