//! Unit tests for the in-memory revocation registry

use chrono::{Duration, Utc};

use signet_core::domain::entities::token::RefreshTokenRecord;
use signet_core::repositories::RevocationRegistry;

use crate::registry::InMemoryRevocationRegistry;

#[tokio::test]
async fn test_starts_empty() {
    let registry = InMemoryRevocationRegistry::new();
    assert!(registry.is_empty().await);
    assert_eq!(registry.len().await, 0);
}

#[tokio::test]
async fn test_insert_contains_find() {
    let registry = InMemoryRevocationRegistry::new();

    registry
        .insert("token_a", RefreshTokenRecord::new(1))
        .await
        .unwrap();

    assert!(registry.contains("token_a").await.unwrap());
    assert_eq!(registry.find("token_a").await.unwrap().unwrap().user_id, 1);
    assert_eq!(registry.len().await, 1);

    assert!(!registry.contains("token_b").await.unwrap());
    assert!(registry.find("token_b").await.unwrap().is_none());
}

#[tokio::test]
async fn test_reinsert_overwrites_record() {
    let registry = InMemoryRevocationRegistry::new();

    registry
        .insert("token_a", RefreshTokenRecord::new(1))
        .await
        .unwrap();
    registry
        .insert("token_a", RefreshTokenRecord::new(2))
        .await
        .unwrap();

    assert_eq!(registry.len().await, 1);
    assert_eq!(registry.find("token_a").await.unwrap().unwrap().user_id, 2);
}

#[tokio::test]
async fn test_remove_reports_prior_membership() {
    let registry = InMemoryRevocationRegistry::new();

    registry
        .insert("token_a", RefreshTokenRecord::new(1))
        .await
        .unwrap();

    assert!(registry.remove("token_a").await.unwrap());
    assert!(!registry.remove("token_a").await.unwrap());
    assert!(!registry.remove("never-inserted").await.unwrap());
    assert!(registry.is_empty().await);
}

#[tokio::test]
async fn test_remove_created_before_cutoff() {
    let registry = InMemoryRevocationRegistry::new();
    let now = Utc::now();

    let mut stale = RefreshTokenRecord::new(1);
    stale.created_at = now - Duration::days(10);

    registry.insert("stale", stale).await.unwrap();
    registry
        .insert("fresh", RefreshTokenRecord::new(2))
        .await
        .unwrap();

    let removed = registry
        .remove_created_before(now - Duration::days(7))
        .await
        .unwrap();

    assert_eq!(removed, 1);
    assert!(!registry.contains("stale").await.unwrap());
    assert!(registry.contains("fresh").await.unwrap());
}
