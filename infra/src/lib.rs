//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Signet token
//! service. It provides the concrete backings for the core repository
//! traits: an in-memory revocation registry and a fixed-list identity
//! provider.
//!
//! Both implementations are process-local by design. Restarting the process
//! clears the registry, which revokes every outstanding refresh token.

pub mod identity;
pub mod registry;

pub use identity::StaticIdentityProvider;
pub use registry::InMemoryRevocationRegistry;
