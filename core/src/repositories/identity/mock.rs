//! Mock implementation of IdentityProvider for testing

use async_trait::async_trait;

use crate::domain::entities::identity::Identity;
use crate::errors::DomainError;

use super::r#trait::IdentityProvider;

/// Mock identity provider backed by a fixed credential list
pub struct MockIdentityProvider {
    identities: Vec<(Identity, String)>,
}

impl MockIdentityProvider {
    /// Create an empty mock provider
    pub fn new() -> Self {
        Self {
            identities: Vec::new(),
        }
    }

    /// Add an identity with its password
    pub fn with_identity(mut self, identity: Identity, password: &str) -> Self {
        self.identities.push((identity, password.to_string()));
        self
    }
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Identity>, DomainError> {
        Ok(self
            .identities
            .iter()
            .find(|(identity, stored)| identity.username == username && stored == password)
            .map(|(identity, _)| identity.clone()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Identity>, DomainError> {
        Ok(self
            .identities
            .iter()
            .find(|(identity, _)| identity.id == id)
            .map(|(identity, _)| identity.clone()))
    }
}
