//! Value objects representing immutable domain concepts.

pub mod auth_tokens;

// Re-export commonly used types
pub use auth_tokens::AuthTokens;
