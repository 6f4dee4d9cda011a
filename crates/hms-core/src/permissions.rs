//! The role authorization table.
//!
//! Every protected operation of the API is identified by its HTTP method and
//! its route pattern (as axum reports it through `MatchedPath`, e.g.
//! `/api/patients/{id}`) and maps to the set of roles allowed to invoke it.
//! The auth gate consults this table for every protected request; an
//! operation that is not listed is denied.
//!
//! # Example
//!
//! ```ignore
//! use axum::http::Method;
//! use hms_core::{Role, permissions};
//!
//! assert!(permissions::is_allowed(Role::Nurse, &Method::GET, "/api/patients"));
//! assert!(!permissions::is_allowed(Role::Nurse, &Method::GET, "/api/staff"));
//! ```

use std::sync::LazyLock;

use axum::http::Method;

use crate::roles::Role;

// =============================================================================
// Route prefixes
// =============================================================================

pub mod paths {
    pub const AUTH_REGISTER: &str = "/api/auth/register";
    pub const AUTH_LOGIN: &str = "/api/auth/login";
    pub const AUTH_ME: &str = "/api/auth/me";
    pub const HEALTH: &str = "/api/health";
    pub const NAVIGATION: &str = "/api/navigation";
    pub const REPORTS_SUMMARY: &str = "/api/reports/summary";

    pub const PATIENTS: &str = "/api/patients";
    pub const DOCTORS: &str = "/api/doctors";
    pub const APPOINTMENTS: &str = "/api/appointments";
    pub const MEDICINES: &str = "/api/medicines";
    pub const LAB_TESTS: &str = "/api/lab-tests";
    pub const INVOICES: &str = "/api/invoices";
    pub const STAFF: &str = "/api/staff";
}

// =============================================================================
// Role sets
// =============================================================================

pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
pub const ALL_ROLES: &[Role] = &Role::ALL;
pub const PATIENT_CARE: &[Role] = &[Role::Admin, Role::Doctor, Role::Nurse, Role::Receptionist];
pub const DOCTOR_DIRECTORY: &[Role] =
    &[Role::Admin, Role::Doctor, Role::Receptionist, Role::Patient];
pub const SCHEDULING: &[Role] = &[Role::Admin, Role::Doctor, Role::Receptionist, Role::Patient];
pub const FRONT_DESK: &[Role] = &[Role::Admin, Role::Receptionist];
pub const PHARMACY: &[Role] = &[Role::Admin, Role::Pharmacist];
pub const LABORATORY: &[Role] = &[Role::Admin, Role::LabTechnician, Role::Doctor];
pub const BILLING: &[Role] = &[Role::Admin, Role::Receptionist];

/// Access policy for a collection exposed as `base` and `base/{id}`.
#[derive(Debug, Clone, Copy)]
struct CollectionPolicy {
    base: &'static str,
    read: &'static [Role],
    create: &'static [Role],
    update: &'static [Role],
    delete: &'static [Role],
}

const COLLECTIONS: &[CollectionPolicy] = &[
    CollectionPolicy {
        base: paths::PATIENTS,
        read: PATIENT_CARE,
        create: PATIENT_CARE,
        update: PATIENT_CARE,
        delete: PATIENT_CARE,
    },
    CollectionPolicy {
        base: paths::DOCTORS,
        read: DOCTOR_DIRECTORY,
        create: ADMIN_ONLY,
        update: ADMIN_ONLY,
        delete: ADMIN_ONLY,
    },
    CollectionPolicy {
        base: paths::APPOINTMENTS,
        read: SCHEDULING,
        create: SCHEDULING,
        update: SCHEDULING,
        delete: FRONT_DESK,
    },
    CollectionPolicy {
        base: paths::MEDICINES,
        read: PHARMACY,
        create: PHARMACY,
        update: PHARMACY,
        delete: PHARMACY,
    },
    CollectionPolicy {
        base: paths::LAB_TESTS,
        read: LABORATORY,
        create: LABORATORY,
        update: LABORATORY,
        delete: LABORATORY,
    },
    CollectionPolicy {
        base: paths::INVOICES,
        read: BILLING,
        create: BILLING,
        update: BILLING,
        delete: BILLING,
    },
    CollectionPolicy {
        base: paths::STAFF,
        read: ADMIN_ONLY,
        create: ADMIN_ONLY,
        update: ADMIN_ONLY,
        delete: ADMIN_ONLY,
    },
];

/// One protected operation and the roles allowed to invoke it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePermission {
    pub method: Method,
    pub path: String,
    pub roles: &'static [Role],
}

impl RoutePermission {
    fn new(method: Method, path: impl Into<String>, roles: &'static [Role]) -> Self {
        Self {
            method,
            path: path.into(),
            roles,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RoleAuthorizationTable {
    entries: Vec<RoutePermission>,
}

impl RoleAuthorizationTable {
    fn build() -> Self {
        let mut entries = vec![
            RoutePermission::new(Method::POST, paths::AUTH_REGISTER, ADMIN_ONLY),
            RoutePermission::new(Method::GET, paths::AUTH_ME, ALL_ROLES),
            RoutePermission::new(Method::GET, paths::NAVIGATION, ALL_ROLES),
            RoutePermission::new(Method::GET, paths::REPORTS_SUMMARY, ADMIN_ONLY),
        ];

        for policy in COLLECTIONS {
            let item = item_path(policy.base);
            entries.push(RoutePermission::new(Method::GET, policy.base, policy.read));
            entries.push(RoutePermission::new(Method::POST, policy.base, policy.create));
            entries.push(RoutePermission::new(Method::GET, item.clone(), policy.read));
            entries.push(RoutePermission::new(Method::PUT, item.clone(), policy.update));
            entries.push(RoutePermission::new(Method::DELETE, item, policy.delete));
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[RoutePermission] {
        &self.entries
    }

    /// Roles allowed for an operation, or `None` if the operation is unknown.
    pub fn allowed_roles(&self, method: &Method, path: &str) -> Option<&'static [Role]> {
        self.entries
            .iter()
            .find(|entry| entry.method == *method && entry.path == path)
            .map(|entry| entry.roles)
    }

    /// Unknown operations are denied.
    pub fn is_allowed(&self, role: Role, method: &Method, path: &str) -> bool {
        self.allowed_roles(method, path)
            .is_some_and(|roles| roles.contains(&role))
    }
}

static TABLE: LazyLock<RoleAuthorizationTable> = LazyLock::new(RoleAuthorizationTable::build);

pub fn table() -> &'static RoleAuthorizationTable {
    &TABLE
}

pub fn is_allowed(role: Role, method: &Method, path: &str) -> bool {
    TABLE.is_allowed(role, method, path)
}

/// Route pattern for a single item below `base`.
pub fn item_path(base: &str) -> String {
    format!("{}/{{id}}", base)
}
