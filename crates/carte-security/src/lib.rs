//! Security primitives for Carte services.
//!
//! The gateway validates token signature, issuer, audience and expiry before
//! a request reaches a service. What remains in-process is reading the
//! already-trusted claim set, and that is what this crate covers: the role
//! vocabulary, a [`TokenClaims`] adapter for decoded Keycloak payloads, and
//! the [`PrincipalExt`] accessors shared by every service.
//!
//! ```
//! use carte_security::{ClaimSet, PrincipalExt, Role, claim_types};
//!
//! let principal = ClaimSet::new()
//!     .with_claim(claim_types::EMAIL, "ada@example.com")
//!     .with_role(Role::Admin);
//!
//! assert_eq!(principal.email(), Some("ada@example.com"));
//! assert!(principal.is_admin());
//! assert!(!principal.can_manage_users());
//! ```

mod accessors;
mod roles;
mod token;

pub use accessors::PrincipalExt;
pub use roles::{Role, UnknownRole};
pub use token::{RoleSet, TokenClaims};

// Re-export the shared vocabulary so most services only need this crate.
pub use carte_claims::{ClaimSet, Principal, claim_types};
