//! Request and response types for the HTTP endpoints

pub mod auth;

pub use auth::*;
