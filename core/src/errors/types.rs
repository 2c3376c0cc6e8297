//! Domain-specific error types for authentication and token operations
//!
//! This module provides error type definitions for credential checks, token
//! verification, and input validation. HTTP status mapping happens in the
//! presentation layer.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown username and wrong password deliberately collapse into one
    /// error so callers cannot probe for registered usernames.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Refresh token is not registered")]
    TokenNotRegistered,

    #[error("Identity no longer exists")]
    IdentityNotFound,
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired at {expired_at}")]
    Expired { expired_at: DateTime<Utc> },

    #[error("Invalid token")]
    Invalid,

    #[error("Token signing failed: {reason}")]
    SigningFailed { reason: String },

    #[error("Key storage error: {reason}")]
    KeyStorage { reason: String },
}

/// Validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    MissingField { field: String },
}
