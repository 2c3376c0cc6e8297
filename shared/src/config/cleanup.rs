//! Background registry sweep configuration

use serde::{Deserialize, Serialize};

/// Configuration for the periodic revocation registry sweep
///
/// The sweep is an optional memory bound: the refresh path already prunes
/// dead entries lazily, so this ships disabled by default.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CleanupConfig {
    /// Whether the background sweep runs at all
    pub enabled: bool,

    /// Seconds between sweep passes
    pub interval_seconds: u64,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_seconds: 3600,
        }
    }
}

impl CleanupConfig {
    /// Create from environment variables
    ///
    /// Reads `REGISTRY_CLEANUP_ENABLED` (default `false`) and
    /// `REGISTRY_CLEANUP_INTERVAL_SECONDS` (default 3600).
    pub fn from_env() -> Self {
        let enabled = std::env::var("REGISTRY_CLEANUP_ENABLED")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        let interval_seconds = std::env::var("REGISTRY_CLEANUP_INTERVAL_SECONDS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()
            .unwrap_or(3600);

        Self {
            enabled,
            interval_seconds,
        }
    }
}
