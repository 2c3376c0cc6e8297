//! Repository interfaces for identity lookup and refresh token revocation.
//!
//! The traits here are the seams between the domain services and whatever
//! backs them. Concrete implementations live in the infrastructure crate;
//! mocks for unit testing live alongside the traits behind `#[cfg(test)]`.

pub mod identity;
pub mod registry;

pub use identity::IdentityProvider;
pub use registry::RevocationRegistry;

#[cfg(test)]
pub use identity::MockIdentityProvider;
#[cfg(test)]
pub use registry::MockRevocationRegistry;
