//! Principal capabilities and claim lookup.

use serde::{Deserialize, Serialize};

/// Capabilities this layer needs from an authenticated identity.
///
/// Implementors expose their claims as `(type key, value)` string pairs and
/// answer role-membership queries; nothing more. Token validation and
/// principal construction stay with the caller's identity integration, so
/// the trait can sit in front of any of them.
pub trait Principal {
    /// All claims in the principal's native order.
    fn claims(&self) -> impl Iterator<Item = (&str, &str)>;

    /// Whether the principal holds the named role.
    ///
    /// Matching is exact and case-sensitive.
    fn has_role(&self, role: &str) -> bool;

    /// Value of the first claim with the given type key.
    ///
    /// When several claims share a type, the first one in [`claims`]
    /// enumeration order wins; later duplicates are ignored. `None` means the
    /// principal has no claim of that type; it is never an error.
    ///
    /// [`claims`]: Principal::claims
    fn first_claim_value(&self, claim_type: &str) -> Option<&str> {
        self.claims()
            .find(|(key, _)| *key == claim_type)
            .map(|(_, value)| value)
    }
}

/// An ordered, owned claim collection with role memberships.
///
/// `ClaimSet` is the plain-data way to hand an identity to this layer when no
/// richer token type is around. Claims keep their insertion order, so
/// first-match lookup stays well defined even when an upstream integration
/// produces duplicate claim types (merged identities do). Roles live in a
/// separate membership list, mirroring how identity libraries keep the two
/// apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSet {
    #[serde(default)]
    claims: Vec<(String, String)>,
    #[serde(default)]
    roles: Vec<String>,
}

impl ClaimSet {
    /// Create an empty claim set. Every accessor degrades on it: string
    /// lookups return `None`, predicates return `false`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a claim. Earlier claims of the same type stay ahead of it.
    pub fn with_claim(mut self, claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        self.claims.push((claim_type.into(), value.into()));
        self
    }

    /// Add a role membership.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }
}

impl Principal for ClaimSet {
    fn claims(&self) -> impl Iterator<Item = (&str, &str)> {
        self.claims.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim_types;

    #[test]
    fn test_first_claim_value_returns_first_match() {
        let principal = ClaimSet::new()
            .with_claim(claim_types::EMAIL, "a@x.com")
            .with_claim(claim_types::EMAIL, "b@x.com");

        assert_eq!(
            principal.first_claim_value(claim_types::EMAIL),
            Some("a@x.com")
        );
    }

    #[test]
    fn test_first_claim_value_missing_type() {
        let principal = ClaimSet::new().with_claim(claim_types::EMAIL, "a@x.com");

        assert_eq!(principal.first_claim_value(claim_types::TENANT_ID), None);
    }

    #[test]
    fn test_first_claim_value_empty_principal() {
        let principal = ClaimSet::new();

        assert_eq!(principal.first_claim_value(claim_types::EMAIL), None);
        assert_eq!(principal.claims().count(), 0);
    }

    #[test]
    fn test_claims_preserve_insertion_order() {
        let principal = ClaimSet::new()
            .with_claim("c", "3")
            .with_claim("a", "1")
            .with_claim("b", "2");

        let claims: Vec<_> = principal.claims().collect();
        assert_eq!(claims, vec![("c", "3"), ("a", "1"), ("b", "2")]);
    }

    #[test]
    fn test_has_role_exact_match_only() {
        let principal = ClaimSet::new().with_role("admin");

        assert!(principal.has_role("admin"));
        assert!(!principal.has_role("Admin"));
        assert!(!principal.has_role("ADMIN"));
        assert!(!principal.has_role("user"));
    }

    #[test]
    fn test_has_role_empty_principal() {
        assert!(!ClaimSet::new().has_role("admin"));
    }

    #[test]
    fn test_claim_set_serde_round_trip() {
        let principal = ClaimSet::new()
            .with_claim(claim_types::SUB, "user-1")
            .with_claim(claim_types::EMAIL, "user@example.com")
            .with_role("admin");

        let json = serde_json::to_string(&principal).unwrap();
        let parsed: ClaimSet = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, principal);
        assert_eq!(parsed.first_claim_value(claim_types::SUB), Some("user-1"));
        assert!(parsed.has_role("admin"));
    }
}
