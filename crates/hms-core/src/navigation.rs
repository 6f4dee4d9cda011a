//! Client navigation mirror of the role table.
//!
//! The front end shows a sidebar link and allows a client-side route only for
//! the roles listed here. This table only drives what a user sees; the server
//! enforces access through [`crate::permissions`] on every request regardless.

use axum::http::Method;
use serde::Serialize;

use crate::permissions::{self, paths};
use crate::roles::Role;
use crate::roles::Role::{Admin, Doctor, LabTechnician, Nurse, Patient, Pharmacist, Receptionist};

/// Where the client sends a user who may not open a page.
pub const FALLBACK_ROUTE: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub to: &'static str,
    pub label: &'static str,
    #[serde(skip)]
    pub roles: &'static [Role],
    /// API collection whose listing backs the page, if any.
    #[serde(skip)]
    pub backing: Option<&'static str>,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        to: "/dashboard",
        label: "Dashboard",
        roles: &[Admin, Doctor, Patient],
        backing: None,
    },
    NavLink {
        to: "/register",
        label: "Create Account",
        roles: &[Admin],
        backing: None,
    },
    NavLink {
        to: "/patients",
        label: "Patients",
        roles: &[Admin, Doctor, Nurse, Receptionist],
        backing: Some(paths::PATIENTS),
    },
    NavLink {
        to: "/doctors",
        label: "Doctors",
        roles: &[Admin],
        backing: Some(paths::DOCTORS),
    },
    NavLink {
        to: "/appointments",
        label: "Appointments",
        roles: &[Admin, Doctor, Receptionist, Patient],
        backing: Some(paths::APPOINTMENTS),
    },
    NavLink {
        to: "/pharmacy",
        label: "Pharmacy",
        roles: &[Admin, Pharmacist],
        backing: Some(paths::MEDICINES),
    },
    NavLink {
        to: "/laboratory",
        label: "Laboratory",
        roles: &[Admin, LabTechnician, Doctor],
        backing: Some(paths::LAB_TESTS),
    },
    NavLink {
        to: "/billing",
        label: "Billing",
        roles: &[Admin, Receptionist],
        backing: Some(paths::INVOICES),
    },
    NavLink {
        to: "/staff",
        label: "Staff",
        roles: &[Admin],
        backing: Some(paths::STAFF),
    },
    NavLink {
        to: "/reports",
        label: "Reports",
        roles: &[Admin],
        backing: Some(paths::REPORTS_SUMMARY),
    },
];

pub fn visible_links(role: Role) -> Vec<NavLink> {
    NAV_LINKS
        .iter()
        .filter(|link| link.roles.contains(&role))
        .copied()
        .collect()
}

/// Whether `role` may open the client route `to`. `/login` is always open;
/// unknown routes are closed.
pub fn can_navigate(role: Role, to: &str) -> bool {
    if to == FALLBACK_ROUTE {
        return true;
    }
    NAV_LINKS
        .iter()
        .find(|link| link.to == to)
        .is_some_and(|link| link.roles.contains(&role))
}

/// Client route a navigation attempt ends up on.
pub fn resolve(role: Role, to: &'static str) -> &'static str {
    if can_navigate(role, to) { to } else { FALLBACK_ROUTE }
}

/// Pages whose backing listing the server would refuse for one of the roles
/// the page is shown to.
pub fn inconsistent_links() -> Vec<(&'static str, Role)> {
    NAV_LINKS
        .iter()
        .filter_map(|link| link.backing.map(|backing| (link, backing)))
        .flat_map(|(link, backing)| {
            link.roles
                .iter()
                .filter(move |role| !permissions::is_allowed(**role, &Method::GET, backing))
                .map(move |role| (link.to, *role))
        })
        .collect()
}
