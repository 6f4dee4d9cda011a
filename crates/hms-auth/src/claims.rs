//! JWT claim structure for access tokens.

use hms_core::Role;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JWT claims for access tokens.
///
/// # Fields
///
/// - `sub`: Identity ID (subject)
/// - `role`: Role of the identity when the token was issued
/// - `iat`: Token issued-at timestamp
/// - `exp`: Token expiration timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// Identity ID (subject claim)
    pub sub: String,
    /// Role snapshot taken at issuance
    pub role: Role,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: i64,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Identity ID, or `None` if the subject is not numeric.
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_serialize() {
        let claims = Claims {
            sub: "7".to_string(),
            role: Role::LabTechnician,
            iat: 1234567800,
            exp: 1234567890,
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""sub":"7""#));
        assert!(serialized.contains(r#""role":"lab_technician""#));
    }

    #[test]
    fn test_claims_with_unknown_role_rejected() {
        let json = r#"{"sub":"1","role":"root","iat":1,"exp":9999999999}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }

    #[test]
    fn test_user_id() {
        let mut claims = Claims {
            sub: "42".to_string(),
            role: Role::Doctor,
            iat: 0,
            exp: 0,
        };
        assert_eq!(claims.user_id(), Some(42));

        claims.sub = "not-a-number".to_string();
        assert_eq!(claims.user_id(), None);
    }
}
