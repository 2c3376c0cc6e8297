//! Configuration module with service-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `server` - HTTP server bind configuration
//! - `token` - Token lifetimes and key storage location
//! - `cleanup` - Background registry sweep configuration

pub mod cleanup;
pub mod server;
pub mod token;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use cleanup::CleanupConfig;
pub use server::ServerConfig;
pub use token::TokenConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Token configuration
    pub token: TokenConfig,

    /// Registry cleanup configuration
    #[serde(default)]
    pub cleanup: CleanupConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            token: TokenConfig::default(),
            cleanup: CleanupConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            token: TokenConfig::from_env(),
            cleanup: CleanupConfig::from_env(),
        }
    }
}
