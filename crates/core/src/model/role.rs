use std::fmt;

use serde::{Deserialize, Serialize};

/// Account type of the signed-in dashboard user.
///
/// Selects which route tree (and therefore which screens) the dashboard
/// exposes. Resolved once at startup; changing it requires a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Admin,
    SchoolAdmin,
    Collector,
    Assistant,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Admin,
        Role::SchoolAdmin,
        Role::Collector,
        Role::Assistant,
    ];

    /// Resolve a stored `user_type` value.
    ///
    /// Matching is exact and case-sensitive. Missing or unrecognised values
    /// fall back to `Role::Admin`.
    #[must_use]
    pub fn from_user_type(raw: Option<&str>) -> Self {
        match raw {
            Some("SCHOOL_ADMIN") => Role::SchoolAdmin,
            Some("COLLECTOR") => Role::Collector,
            Some("ASSISTANT") => Role::Assistant,
            _ => Role::Admin,
        }
    }

    /// The wire value stored for this role.
    #[must_use]
    pub fn as_user_type(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::SchoolAdmin => "SCHOOL_ADMIN",
            Role::Collector => "COLLECTOR",
            Role::Assistant => "ASSISTANT",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::SchoolAdmin => "School administrator",
            Role::Collector => "Collector",
            Role::Assistant => "Assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_user_type())
    }
}
