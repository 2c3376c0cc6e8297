//! Token claims and registry records for RS256-signed JWTs.

use chrono::{DateTime, Duration, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::identity::Identity;

/// Access token expiration time (15 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Common accessor for claim types carrying an expiry
///
/// Implemented by both claim shapes so the verifier can check the embedded
/// expiry without knowing which kind of token it is decoding.
pub trait TokenClaims: Serialize + DeserializeOwned {
    /// Expiration timestamp in seconds since the Unix epoch
    fn exp_timestamp(&self) -> i64;

    /// Expiration as an instant
    fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp_timestamp(), 0).unwrap_or_default()
    }

    /// Whether the expiry has passed; a token is already invalid at `exp`
    fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp_timestamp()
    }
}

/// Claims carried by an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Identifier of the authenticated user
    #[serde(rename = "userId")]
    pub user_id: i64,

    /// Login name
    pub username: String,

    /// Role label
    pub role: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl AccessClaims {
    /// Creates claims for an access token expiring `expiry_minutes` from now
    ///
    /// # Arguments
    ///
    /// * `identity` - The authenticated principal
    /// * `expiry_minutes` - Lifetime added to the current time
    ///
    /// # Returns
    ///
    /// A new `AccessClaims` instance with `iat` stamped to now
    pub fn new(identity: &Identity, expiry_minutes: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(expiry_minutes);

        Self {
            user_id: identity.id,
            username: identity.username.clone(),
            role: identity.role.clone(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }
}

impl TokenClaims for AccessClaims {
    fn exp_timestamp(&self) -> i64 {
        self.exp
    }
}

/// Claims carried by a refresh token
///
/// Deliberately minimal: the user is re-resolved through the identity
/// provider at refresh time, so nothing beyond the id is embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Identifier of the user the token was issued to
    #[serde(rename = "userId")]
    pub user_id: i64,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl RefreshClaims {
    /// Creates claims for a refresh token expiring `expiry_days` from now
    pub fn new(user_id: i64, expiry_days: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::days(expiry_days);

        Self {
            user_id,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }
}

impl TokenClaims for RefreshClaims {
    fn exp_timestamp(&self) -> i64 {
        self.exp
    }
}

/// Registry record kept per outstanding refresh token
///
/// The registry keys on the full token string; the record only carries the
/// issue metadata needed for auditing and the background sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenRecord {
    /// User the token was issued to
    pub user_id: i64,

    /// When the token was issued
    pub created_at: DateTime<Utc>,
}

impl RefreshTokenRecord {
    /// Creates a record stamped with the current time
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            created_at: Utc::now(),
        }
    }
}
