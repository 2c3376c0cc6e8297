//! Mock implementation of RevocationRegistry for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::DomainError;

use super::r#trait::RevocationRegistry;

/// Mock revocation registry for testing
pub struct MockRevocationRegistry {
    entries: Arc<RwLock<HashMap<String, RefreshTokenRecord>>>,
}

impl MockRevocationRegistry {
    /// Create a new mock registry
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of registered tokens
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl Default for MockRevocationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RevocationRegistry for MockRevocationRegistry {
    async fn insert(&self, token: &str, record: RefreshTokenRecord) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        entries.insert(token.to_string(), record);
        Ok(())
    }

    async fn contains(&self, token: &str) -> Result<bool, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries.contains_key(token))
    }

    async fn find(&self, token: &str) -> Result<Option<RefreshTokenRecord>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries.get(token).cloned())
    }

    async fn remove(&self, token: &str) -> Result<bool, DomainError> {
        let mut entries = self.entries.write().await;
        Ok(entries.remove(token).is_some())
    }

    async fn remove_created_before(&self, cutoff: DateTime<Utc>) -> Result<usize, DomainError> {
        let mut entries = self.entries.write().await;
        let initial_count = entries.len();

        entries.retain(|_, record| record.created_at >= cutoff);

        Ok(initial_count - entries.len())
    }
}
