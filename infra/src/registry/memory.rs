//! In-memory implementation of the RevocationRegistry trait.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use signet_core::domain::entities::token::RefreshTokenRecord;
use signet_core::errors::DomainError;
use signet_core::repositories::RevocationRegistry;

/// In-memory revocation registry
///
/// Entries are keyed by the full refresh token string. The map lives behind
/// an async RwLock so concurrent membership checks do not contend; only
/// insert and remove take the write half.
pub struct InMemoryRevocationRegistry {
    entries: RwLock<HashMap<String, RefreshTokenRecord>>,
}

impl InMemoryRevocationRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of registered tokens
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// True when no tokens are registered
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for InMemoryRevocationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RevocationRegistry for InMemoryRevocationRegistry {
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
