//! Revocation registry trait defining the interface for refresh token tracking.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::DomainError;

/// Registry trait for tracking which refresh tokens are currently valid.
///
/// A refresh token is only honored while it has an entry in the registry.
/// Logout removes the entry, which revokes the token without waiting for
/// its cryptographic expiry. Tokens are keyed by their full signed string.
///
/// # Security Considerations
/// - Membership must be checked before any cryptographic verification so
///   revoked tokens are rejected regardless of signature validity
/// - Entries for tokens that fail verification should be removed eagerly
///   rather than waiting for a cleanup sweep
#[async_trait]
pub trait RevocationRegistry: Send + Sync {
    /// Register a freshly issued refresh token.
    ///
    /// Inserting a token that is already registered overwrites its record.
    ///
    /// # Arguments
    /// * `token` - The full signed refresh token string
    /// * `record` - Issuance metadata to associate with the token
    ///
    /// # Example
    /// ```no_run
    /// # use signet_core::repositories::RevocationRegistry;
    /// # use signet_core::domain::entities::token::RefreshTokenRecord;
    /// # async fn example(registry: &impl RevocationRegistry) -> Result<(), Box<dyn std::error::Error>> {
    /// registry.insert("signed.token.string", RefreshTokenRecord::new(42)).await?;
    /// # Ok(())
    /// # }
    /// ```
    async fn insert(&self, token: &str, record: RefreshTokenRecord) -> Result<(), DomainError>;

    /// Check whether a refresh token is currently registered.
    ///
    /// # Returns
    /// * `Ok(true)` - Token is registered and may proceed to verification
    /// * `Ok(false)` - Token is unknown or has been revoked
    async fn contains(&self, token: &str) -> Result<bool, DomainError>;

    /// Look up the record associated with a refresh token.
    ///
    /// # Returns
    /// * `Ok(Some(RefreshTokenRecord))` - Token is registered
    /// * `Ok(None)` - Token is unknown or has been revoked
    async fn find(&self, token: &str) -> Result<Option<RefreshTokenRecord>, DomainError>;

    /// Remove a refresh token from the registry, revoking it.
    ///
    /// # Returns
    /// * `Ok(true)` - Token was registered and has been removed
    /// * `Ok(false)` - Token was not registered
    ///
    /// # Example
    /// ```no_run
    /// # use signet_core::repositories::RevocationRegistry;
    /// # async fn example(registry: &impl RevocationRegistry) -> Result<(), Box<dyn std::error::Error>> {
    /// if registry.remove("signed.token.string").await? {
    ///     println!("token revoked");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn remove(&self, token: &str) -> Result<bool, DomainError>;

    /// Remove every entry whose record was created before the cutoff.
    ///
    /// Used by the periodic sweep to drop entries whose tokens must have
    /// expired by now.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of entries removed
    async fn remove_created_before(&self, cutoff: DateTime<Utc>) -> Result<usize, DomainError>;
}
