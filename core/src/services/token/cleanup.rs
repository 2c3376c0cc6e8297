//! Background sweep of the revocation registry
//!
//! Registered refresh tokens only leave the registry through logout or a
//! failed refresh attempt. Entries whose tokens are never presented again
//! would otherwise accumulate forever, so an optional periodic sweep drops
//! every entry old enough that its token must have expired.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{error, info, warn};

use crate::domain::entities::token::REFRESH_TOKEN_EXPIRY_DAYS;
use crate::errors::DomainError;
use crate::repositories::RevocationRegistry;

/// Configuration for the registry sweep
#[derive(Debug, Clone)]
pub struct RegistryCleanupConfig {
    /// How often to run the sweep (in seconds)
    pub interval_seconds: u64,
    /// Entries older than this many days are swept; matches the refresh
    /// token lifetime so only entries for expired tokens are dropped
    pub retention_days: i64,
    /// Whether the background sweep runs at all
    pub enabled: bool,
}

impl Default for RegistryCleanupConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 3600,
            retention_days: REFRESH_TOKEN_EXPIRY_DAYS,
            enabled: false,
        }
    }
}

impl From<&signet_shared::config::CleanupConfig> for RegistryCleanupConfig {
    fn from(config: &signet_shared::config::CleanupConfig) -> Self {
        Self {
            interval_seconds: config.interval_seconds,
            enabled: config.enabled,
            ..Default::default()
        }
    }
}

/// Periodic sweep removing registry entries for expired refresh tokens
pub struct RegistryCleanup<R: RevocationRegistry + 'static> {
    registry: Arc<R>,
    config: RegistryCleanupConfig,
}

impl<R: RevocationRegistry> RegistryCleanup<R> {
    /// Create a new registry sweep
    pub fn new(registry: Arc<R>, config: RegistryCleanupConfig) -> Self {
        Self { registry, config }
    }

    /// Run a single sweep cycle
    ///
    /// Removes every entry created more than the retention period ago. Such
    /// entries belong to tokens that have expired and can never verify
    /// again, so dropping them changes no refresh outcome.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of entries removed
    /// * `Err(DomainError)` - If the registry rejected the removal
    pub async fn run_cleanup(&self) -> Result<usize, DomainError> {
        let cutoff = Utc::now() - Duration::days(self.config.retention_days);
        let removed = self.registry.remove_created_before(cutoff).await?;

        if removed > 0 {
            info!("Removed {} expired registry entries", removed);
        }

        Ok(removed)
    }

    /// Start the sweep as a background task
    ///
    /// This spawns a tokio task that runs cleanup at regular intervals
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("Registry cleanup is disabled");
            return;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds);

        tokio::spawn(async move {
            info!(
                "Registry cleanup started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                if let Err(e) = self.run_cleanup().await {
                    error!("Registry sweep failed: {}", e);
                }
            }
        });
    }
}
