//! Wire types for the authentication endpoints
//!
//! Every type renames its fields to camelCase on the wire. Request fields
//! that must be present are `Option<String>` annotated with
//! `#[validate(required, length(min = 1))]`, so a JSON-missing field and an
//! empty string both fail validation with a 400 instead of a serde-level
//! deserialization error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use signet_core::domain::entities::identity::Identity;
use signet_core::domain::entities::token::{AccessClaims, TokenClaims};

/// Request body for POST /auth/login
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(required, length(min = 1))]
    pub username: Option<String>,

    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

/// Request body for POST /auth/refresh
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    #[validate(required, length(min = 1))]
    pub refresh_token: Option<String>,
}

/// Request body for POST /auth/logout
///
/// Both the body and the field are optional; logout without a token is a
/// no-op that still succeeds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

/// Identity as echoed back by POST /auth/login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub role: String,
}

impl From<Identity> for UserInfo {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            username: identity.username,
            role: identity.role,
        }
    }
}

/// Response body for a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

/// Response body for a successful refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Token subject as echoed back by GET /auth/verify
///
/// Unlike [`UserInfo`] this mirrors the claim names, so the identifier
/// field is `userId` rather than `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedUser {
    pub user_id: i64,
    pub username: String,
    pub role: String,
}

/// Response body for a successful verification
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub valid: bool,
    pub user: VerifiedUser,
    pub expires_at: DateTime<Utc>,
}

impl From<AccessClaims> for VerifyResponse {
    fn from(claims: AccessClaims) -> Self {
        let expires_at = claims.expires_at();
        Self {
            valid: true,
            user: VerifiedUser {
                user_id: claims.user_id,
                username: claims.username,
                role: claims.role,
            },
            expires_at,
        }
    }
}

/// Response body for a successful logout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Response body for GET /auth/public-key
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyResponse {
    pub public_key: String,
    pub algorithm: String,
}
