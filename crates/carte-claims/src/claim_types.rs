//! Claim type keys used across Carte services.
//!
//! These are the literal keys as they appear in a token's claim set. Most are
//! standard OIDC claims issued by the identity provider; [`TENANT_ID`] and
//! [`IS_SUPER_USER`] are custom claims added by the Carte realm. Every key is
//! fixed for the lifetime of the process.

/// Tenant identifier. Scopes the user to a single Carte tenant.
pub const TENANT_ID: &str = "tenantId";

/// Preferred username from the identity provider.
pub const PREFERRED_USERNAME: &str = "preferred_username";

/// Email address.
pub const EMAIL: &str = "email";

/// Whether the email address has been verified.
pub const EMAIL_VERIFIED: &str = "email_verified";

/// Full display name.
pub const NAME: &str = "name";

/// Given (first) name.
pub const GIVEN_NAME: &str = "given_name";

/// Family (last) name.
pub const FAMILY_NAME: &str = "family_name";

/// Subject identifier, the provider-unique user id.
pub const SUB: &str = "sub";

/// Token issuer.
pub const ISS: &str = "iss";

/// Authorized party the token was issued to.
pub const AZP: &str = "azp";

/// Custom claim flagging super user privileges.
pub const IS_SUPER_USER: &str = "IsSuperUser";

/// Every claim type key this crate defines, in declaration order.
pub const ALL: [&str; 11] = [
    TENANT_ID,
    PREFERRED_USERNAME,
    EMAIL,
    EMAIL_VERIFIED,
    NAME,
    GIVEN_NAME,
    FAMILY_NAME,
    SUB,
    ISS,
    AZP,
    IS_SUPER_USER,
];
