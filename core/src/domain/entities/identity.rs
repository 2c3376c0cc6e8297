//! Identity entity describing an authenticated principal.

use serde::{Deserialize, Serialize};

/// An authenticated principal as reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable numeric identifier
    pub id: i64,

    /// Login name
    pub username: String,

    /// Role label carried into issued tokens
    pub role: String,
}

impl Identity {
    /// Creates a new identity
    pub fn new(id: i64, username: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            role: role.into(),
        }
    }
}
