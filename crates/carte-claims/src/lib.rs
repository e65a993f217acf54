//! Shared claim vocabulary for Carte services.
//!
//! Carte receives authenticated identities from the identity provider by way
//! of the API gateway: by the time code in this workspace sees a request,
//! token signatures and lifetimes have already been checked upstream. What
//! remains is reading values out of the claim set. This crate owns the
//! vocabulary for that:
//!
//! - [`claim_types`]: the literal claim type keys as they appear on the wire,
//!   so no service hardcodes (or typos) them.
//! - [`Principal`]: the capability trait any authenticated-identity
//!   representation can implement (enumerate claims, test role membership).
//! - [`ClaimSet`]: an ordered claim bag for adapting identity libraries that
//!   don't ship their own [`Principal`] impl.
//!
//! Typed accessors over these capabilities (tenant id, email, role
//! predicates) live in `carte-security`.

pub mod claim_types;
mod principal;

pub use principal::{ClaimSet, Principal};
