//! # Signet Core
//!
//! Core domain layer for the Signet token service. This crate contains the
//! domain entities, token services, repository interfaces, and error types
//! behind the HTTP surface: RSA key provisioning, RS256 signing and
//! verification, the refresh token revocation registry, and the
//! authentication service orchestrating the token lifecycle.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
