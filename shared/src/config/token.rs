//! Token lifetime and key storage configuration

use serde::{Deserialize, Serialize};

/// Token configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Directory where the RSA keypair is persisted
    pub key_storage_dir: String,

    /// Access token expiry time in minutes
    pub access_token_expiry_minutes: i64,

    /// Refresh token expiry time in days
    pub refresh_token_expiry_days: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            key_storage_dir: String::from("keys"),
            access_token_expiry_minutes: 15,
            refresh_token_expiry_days: 7,
        }
    }
}

impl TokenConfig {
    /// Create from environment variables
    ///
    /// Reads `KEY_STORAGE_DIR` (default `keys`),
    /// `ACCESS_TOKEN_EXPIRY_MINUTES` (default 15) and
    /// `REFRESH_TOKEN_EXPIRY_DAYS` (default 7).
    pub fn from_env() -> Self {
        let key_storage_dir =
            std::env::var("KEY_STORAGE_DIR").unwrap_or_else(|_| "keys".to_string());
        let access_token_expiry_minutes = std::env::var("ACCESS_TOKEN_EXPIRY_MINUTES")
            .unwrap_or_else(|_| "15".to_string())
            .parse()
            .unwrap_or(15);
        let refresh_token_expiry_days = std::env::var("REFRESH_TOKEN_EXPIRY_DAYS")
            .unwrap_or_else(|_| "7".to_string())
            .parse()
            .unwrap_or(7);

        Self {
            key_storage_dir,
            access_token_expiry_minutes,
            refresh_token_expiry_days,
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry_minutes = minutes;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry_days = days;
        self
    }
}
