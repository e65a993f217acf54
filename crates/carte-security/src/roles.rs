//! Role vocabulary for Carte services.
//!
//! Roles are defined in the identity provider's realm and arrive on the
//! principal as literal strings. [`Role`] pairs each logical name with its
//! literal so membership checks never hardcode (or typo) the wire form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Roles used throughout Carte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Super user with full system access and user management capabilities.
    #[serde(rename = "superUser")]
    SuperUser,

    /// Administrator with elevated privileges.
    #[serde(rename = "admin")]
    Admin,

    /// Standard user with basic access privileges.
    #[serde(rename = "user")]
    User,

    /// Realm management: manage users.
    #[serde(rename = "manage-users")]
    ManageUsers,

    /// Realm management: view users.
    #[serde(rename = "view-users")]
    ViewUsers,

    /// Realm management: query users.
    #[serde(rename = "query-users")]
    QueryUsers,

    /// Realm management: query groups.
    #[serde(rename = "query-groups")]
    QueryGroups,

    /// User-Managed Access authorization role from the identity provider.
    #[serde(rename = "uma_authorization")]
    UmaAuthorization,

    /// Lets refresh tokens keep working while the user is offline.
    #[serde(rename = "offline_access")]
    OfflineAccess,

    /// Composite of the default roles assigned to every realm user.
    #[serde(rename = "default-roles-carte")]
    DefaultRoles,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 10] = [
        Role::SuperUser,
        Role::Admin,
        Role::User,
        Role::ManageUsers,
        Role::ViewUsers,
        Role::QueryUsers,
        Role::QueryGroups,
        Role::UmaAuthorization,
        Role::OfflineAccess,
        Role::DefaultRoles,
    ];

    /// The literal role string as the identity provider emits it.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::SuperUser => "superUser",
            Role::Admin => "admin",
            Role::User => "user",
            Role::ManageUsers => "manage-users",
            Role::ViewUsers => "view-users",
            Role::QueryUsers => "query-users",
            Role::QueryGroups => "query-groups",
            Role::UmaAuthorization => "uma_authorization",
            Role::OfflineAccess => "offline_access",
            Role::DefaultRoles => "default-roles-carte",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

/// A string that is not one of the defined role literals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(String);

impl FromStr for Role {
    type Err = UnknownRole;

    /// Parse a literal role string. Matching is exact and case-sensitive,
    /// like role-membership checks.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_literals() {
        assert_eq!(Role::SuperUser.as_str(), "superUser");
        assert_eq!(Role::ManageUsers.as_str(), "manage-users");
        assert_eq!(Role::UmaAuthorization.as_str(), "uma_authorization");
        assert_eq!(Role::DefaultRoles.as_str(), "default-roles-carte");
    }

    #[test]
    fn test_role_literals_unique() {
        for (i, role) in Role::ALL.iter().enumerate() {
            for other in &Role::ALL[i + 1..] {
                assert_ne!(role.as_str(), other.as_str());
            }
        }
    }

    #[test]
    fn test_role_display_matches_literal() {
        for role in Role::ALL {
            assert_eq!(role.to_string(), role.as_str());
        }
    }

    #[test]
    fn test_role_from_str_round_trip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn test_role_from_str_is_case_sensitive() {
        assert!("superuser".parse::<Role>().is_err());
        assert!("Admin".parse::<Role>().is_err());
        assert!("MANAGE-USERS".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_from_str_rejects_unknown() {
        let err = "auditor".parse::<Role>().unwrap_err();
        assert_eq!(err.to_string(), "unknown role: auditor");
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serde_uses_literals() {
        let json = serde_json::to_string(&Role::ManageUsers).unwrap();
        assert_eq!(json, "\"manage-users\"");

        let role: Role = serde_json::from_str("\"default-roles-carte\"").unwrap();
        assert_eq!(role, Role::DefaultRoles);
    }
}
