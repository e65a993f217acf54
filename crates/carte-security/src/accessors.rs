//! Typed accessors over an authenticated principal.

use carte_claims::{Principal, claim_types};
use tracing::debug;
use uuid::Uuid;

use crate::roles::Role;

/// Typed getters and role predicates for any [`Principal`].
///
/// Every accessor is a pure, idempotent read with fail-safe semantics: a
/// missing or unparseable claim degrades to `None` (strings, identifiers) or
/// `false` (flags, capabilities) instead of raising. An unparseable
/// privilege claim must never read as granted.
///
/// Blanket-implemented for every [`Principal`]; bring the trait into scope
/// and call the getters directly on the principal.
pub trait PrincipalExt: Principal {
    /// Tenant the principal is scoped to.
    ///
    /// `None` when the `tenantId` claim is absent or not a valid UUID.
    fn tenant_id(&self) -> Option<Uuid> {
        let value = self.first_claim_value(claim_types::TENANT_ID)?;
        match value.parse::<Uuid>() {
            Ok(id) => Some(id),
            Err(_) => {
                debug!(
                    "discarding {} claim that is not a UUID: {value:?}",
                    claim_types::TENANT_ID
                );
                None
            }
        }
    }

    /// Preferred username, if the identity provider sent one.
    fn preferred_username(&self) -> Option<&str> {
        self.first_claim_value(claim_types::PREFERRED_USERNAME)
    }

    /// Email address.
    fn email(&self) -> Option<&str> {
        self.first_claim_value(claim_types::EMAIL)
    }

    /// Full name.
    fn full_name(&self) -> Option<&str> {
        self.first_claim_value(claim_types::NAME)
    }

    /// Given (first) name.
    fn given_name(&self) -> Option<&str> {
        self.first_claim_value(claim_types::GIVEN_NAME)
    }

    /// Family (last) name.
    fn family_name(&self) -> Option<&str> {
        self.first_claim_value(claim_types::FAMILY_NAME)
    }

    /// Subject identifier, the provider-unique user id.
    fn subject_id(&self) -> Option<&str> {
        self.first_claim_value(claim_types::SUB)
    }

    /// Best available display name: full name, then preferred username,
    /// then email, then subject id.
    fn display_name(&self) -> Option<&str> {
        self.full_name()
            .or_else(|| self.preferred_username())
            .or_else(|| self.email())
            .or_else(|| self.subject_id())
    }

    /// Whether the principal's email address has been verified.
    ///
    /// True only when the claim value is the literal string `"true"`
    /// (`bool` parsing is case-sensitive and untrimmed, so `"True"`, `"1"`
    /// and `"yes"` all read as unverified).
    fn is_email_verified(&self) -> bool {
        let Some(value) = self.first_claim_value(claim_types::EMAIL_VERIFIED) else {
            return false;
        };
        match value.parse::<bool>() {
            Ok(verified) => verified,
            Err(_) => {
                debug!(
                    "discarding {} claim that is not a boolean: {value:?}",
                    claim_types::EMAIL_VERIFIED
                );
                false
            }
        }
    }

    /// Whether the principal has super user privileges.
    fn is_super_user(&self) -> bool {
        self.has_role(Role::SuperUser.as_str())
    }

    /// Whether the principal has admin privileges.
    fn is_admin(&self) -> bool {
        self.has_role(Role::Admin.as_str())
    }

    /// Whether the principal may manage users. Super users always may.
    fn can_manage_users(&self) -> bool {
        self.has_role(Role::ManageUsers.as_str()) || self.is_super_user()
    }

    /// Whether the principal may view users. Super users always may.
    fn can_view_users(&self) -> bool {
        self.has_role(Role::ViewUsers.as_str()) || self.is_super_user()
    }
}

impl<P: Principal> PrincipalExt for P {}
