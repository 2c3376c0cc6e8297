//! Authentication outcome value object.

use serde::{Deserialize, Serialize};

use crate::domain::entities::identity::Identity;

/// Tokens and identity produced by a successful login
///
/// The refresh token is registered in the revocation registry before this
/// value is returned, so it is immediately redeemable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    /// JWT access token for API authentication
    pub access_token: String,

    /// JWT refresh token for obtaining new access tokens
    pub refresh_token: String,

    /// The authenticated identity
    pub identity: Identity,
}

impl AuthTokens {
    /// Creates a new authentication outcome
    pub fn new(access_token: String, refresh_token: String, identity: Identity) -> Self {
        Self {
            access_token,
            refresh_token,
            identity,
        }
    }
}
