//! Identity provider trait defining the interface for credential checks.

use async_trait::async_trait;

use crate::domain::entities::identity::Identity;
use crate::errors::DomainError;

/// Provider trait for resolving identities during login and refresh.
///
/// Implementations must not reveal through their return value whether a
/// username exists; a bad username and a bad password both come back as
/// `Ok(None)` so the service can answer with a single ambiguous error.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve an identity from a username and password pair.
    ///
    /// # Arguments
    /// * `username` - The claimed username
    /// * `password` - The plaintext password to check
    ///
    /// # Returns
    /// * `Ok(Some(Identity))` - Credentials matched
    /// * `Ok(None)` - Unknown username or wrong password
    /// * `Err(DomainError)` - Lookup failed
    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Identity>, DomainError>;

    /// Resolve an identity by its id.
    ///
    /// Used during refresh to confirm the token's subject still exists.
    ///
    /// # Returns
    /// * `Ok(Some(Identity))` - Identity found
    /// * `Ok(None)` - No identity with that id
    /// * `Err(DomainError)` - Lookup failed
    async fn find_by_id(&self, id: i64) -> Result<Option<Identity>, DomainError>;
}
