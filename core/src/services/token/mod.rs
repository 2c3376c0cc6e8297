//! Token service module for RS256 JWT management
//!
//! This module handles all token-related operations including:
//! - RSA key pair provisioning and on-disk persistence
//! - Access and refresh token signing
//! - Signature and expiry verification
//! - Background cleanup of the revocation registry

mod cleanup;
mod config;
mod key_manager;
mod signer;
mod verifier;

#[cfg(test)]
mod tests;

pub use cleanup::{RegistryCleanup, RegistryCleanupConfig};
pub use config::TokenServiceConfig;
pub use key_manager::{KeyPair, RsaKeyManager};
pub use signer::TokenSigner;
pub use verifier::TokenVerifier;
