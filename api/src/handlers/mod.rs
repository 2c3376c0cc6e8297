//! Error translation from domain errors to HTTP responses

pub mod error;

pub use error::{handle_domain_error, handle_validation_errors};
