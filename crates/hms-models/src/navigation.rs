use hms_core::Role;
use hms_core::navigation::NavLink;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NavigationLink {
    #[schema(example = "/patients")]
    pub to: String,
    #[schema(example = "Patients")]
    pub label: String,
}

impl From<&NavLink> for NavigationLink {
    fn from(link: &NavLink) -> Self {
        Self {
            to: link.to.to_string(),
            label: link.label.to_string(),
        }
    }
}

/// The sidebar for the caller's role.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NavigationResponse {
    pub role: Role,
    pub links: Vec<NavigationLink>,
    /// Client route used when a page is not available to the role.
    #[schema(example = "/login")]
    pub fallback: String,
}
