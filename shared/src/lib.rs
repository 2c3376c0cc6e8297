//! Shared utilities and common types for the Signet token service
//!
//! This crate provides common functionality used across the server crates:
//! - Configuration types
//! - Error response structures

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{AppConfig, CleanupConfig, ServerConfig, TokenConfig};
pub use errors::{error_codes, ErrorResponse};
