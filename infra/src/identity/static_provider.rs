//! Fixed-list implementation of the IdentityProvider trait.

use async_trait::async_trait;
use constant_time_eq::constant_time_eq;

use signet_core::domain::entities::identity::Identity;
use signet_core::errors::DomainError;
use signet_core::repositories::IdentityProvider;

struct StaticIdentity {
    identity: Identity,
    password: String,
}

/// Identity provider backed by a fixed in-process list
///
/// Password comparison is constant time so response timing does not leak
/// how much of a guess matched. Username lookup is not; the ambiguous
/// credentials error at the service level hides which half failed.
pub struct StaticIdentityProvider {
    identities: Vec<StaticIdentity>,
}

impl StaticIdentityProvider {
    /// Create an empty provider
    pub fn new() -> Self {
        Self {
            identities: Vec::new(),
        }
    }

    /// Add an identity with its password
    pub fn with_identity(mut self, identity: Identity, password: impl Into<String>) -> Self {
        self.identities.push(StaticIdentity {
            identity,
            password: password.into(),
        });
        self
    }

    /// The built-in demo accounts: `admin`/`admin123` with the admin role
    /// and `user`/`user123` with the user role
    pub fn with_demo_identities() -> Self {
        Self::new()
            .with_identity(Identity::new(1, "admin", "admin"), "admin123")
            .with_identity(Identity::new(2, "user", "user"), "user123")
    }
}

impl Default for StaticIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Identity>, DomainError> {
        Ok(self
            .identities
            .iter()
            .find(|entry| {
                entry.identity.username == username
                    && constant_time_eq(entry.password.as_bytes(), password.as_bytes())
            })
            .map(|entry| entry.identity.clone()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Identity>, DomainError> {
        Ok(self
            .identities
            .iter()
            .find(|entry| entry.identity.id == id)
            .map(|entry| entry.identity.clone()))
    }
}
