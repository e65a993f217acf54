//! Decoded access-token payload for the Carte realm.

use std::collections::BTreeMap;

use carte_claims::{Principal, claim_types};
use serde::{Deserialize, Deserializer};
use tracing::debug;

/// Claims carried by an access token issued for the Carte realm, after the
/// gateway has validated it.
///
/// Only the claim types this layer reads are modeled; everything else in the
/// payload (`exp`, `iat`, `aud`, ...) is ignored on deserialization because
/// token lifecycle belongs to the gateway. Boolean-valued claims accept both
/// the JSON boolean the identity provider emits and the string form some
/// token mappers re-emit; any other shape degrades to absent rather than
/// failing the whole payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenClaims {
    /// Tenant the token is scoped to, as the raw claim string.
    #[serde(rename = "tenantId")]
    pub tenant_id: Option<String>,

    /// Preferred username.
    pub preferred_username: Option<String>,

    /// Email address.
    pub email: Option<String>,

    /// Email verification flag.
    #[serde(default, deserialize_with = "lenient_email_verified")]
    pub email_verified: Option<bool>,

    /// Full display name.
    pub name: Option<String>,

    /// Given (first) name.
    pub given_name: Option<String>,

    /// Family (last) name.
    pub family_name: Option<String>,

    /// Subject identifier.
    pub sub: Option<String>,

    /// Token issuer.
    pub iss: Option<String>,

    /// Authorized party the token was issued to.
    pub azp: Option<String>,

    /// Custom super-user flag claim added by Carte.
    #[serde(
        rename = "IsSuperUser",
        default,
        deserialize_with = "lenient_is_super_user"
    )]
    pub is_super_user: Option<bool>,

    /// Realm-level roles.
    #[serde(default)]
    pub realm_access: RoleSet,

    /// Client-level roles, keyed by client id.
    #[serde(default)]
    pub resource_access: BTreeMap<String, RoleSet>,
}

/// A `{ "roles": [...] }` container, used for both realm and client roles.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoleSet {
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Principal for TokenClaims {
    /// Present claims in declared field order, boolean claims rendered as
    /// `"true"`/`"false"`. Role containers are memberships, not claims, and
    /// are not enumerated here.
    fn claims(&self) -> impl Iterator<Item = (&str, &str)> {
        [
            (claim_types::TENANT_ID, self.tenant_id.as_deref()),
            (
                claim_types::PREFERRED_USERNAME,
                self.preferred_username.as_deref(),
            ),
            (claim_types::EMAIL, self.email.as_deref()),
            (
                claim_types::EMAIL_VERIFIED,
                self.email_verified.map(bool_str),
            ),
            (claim_types::NAME, self.name.as_deref()),
            (claim_types::GIVEN_NAME, self.given_name.as_deref()),
            (claim_types::FAMILY_NAME, self.family_name.as_deref()),
            (claim_types::SUB, self.sub.as_deref()),
            (claim_types::ISS, self.iss.as_deref()),
            (claim_types::AZP, self.azp.as_deref()),
            (claim_types::IS_SUPER_USER, self.is_super_user.map(bool_str)),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
    }

    /// True when the role appears among the realm roles or any client's
    /// resource roles. The identity provider scopes roles two ways; checks
    /// here see the union, the way the realm's token mapper flattens them
    /// for downstream consumers.
    fn has_role(&self, role: &str) -> bool {
        self.realm_access.roles.iter().any(|r| r == role)
            || self
                .resource_access
                .values()
                .any(|access| access.roles.iter().any(|r| r == role))
    }
}

/// Claim-string form of a boolean value.
fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Accept a JSON boolean or its canonical string form; anything else reads
/// as absent so one odd claim cannot fail the whole payload. Discards are
/// reported at debug level under the claim key.
fn lenient_bool<'de, D>(deserializer: D, claim_type: &str) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Bool(value) => Some(value),
        Raw::Text(text) => match text.parse::<bool>() {
            Ok(value) => Some(value),
            Err(_) => {
                debug!("discarding {claim_type} claim that is not a boolean: {text:?}");
                None
            }
        },
        Raw::Other(_) => {
            debug!("discarding {claim_type} claim that is not a boolean");
            None
        }
    })
}

fn lenient_email_verified<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_bool(deserializer, claim_types::EMAIL_VERIFIED)
}

fn lenient_is_super_user<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_bool(deserializer, claim_types::IS_SUPER_USER)
}
