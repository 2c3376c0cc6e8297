//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, TokenError, ValidationError};

use signet_shared::errors::{error_codes, ErrorResponse};
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Stable error code exposed to API clients
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Auth(AuthError::InvalidCredentials) => error_codes::INVALID_CREDENTIALS,
            DomainError::Auth(AuthError::TokenNotRegistered) => error_codes::TOKEN_NOT_REGISTERED,
            DomainError::Auth(AuthError::IdentityNotFound) => error_codes::IDENTITY_NOT_FOUND,
            DomainError::Token(TokenError::Expired { .. }) => error_codes::TOKEN_EXPIRED,
            DomainError::Token(TokenError::Invalid) => error_codes::TOKEN_INVALID,
            DomainError::Token(TokenError::SigningFailed { .. })
            | DomainError::Token(TokenError::KeyStorage { .. })
            | DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
            DomainError::Validation(_) => error_codes::VALIDATION_ERROR,
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(error: &DomainError) -> Self {
        let response = ErrorResponse::new(error.error_code(), error.to_string());
        match error {
            DomainError::Token(TokenError::Expired { expired_at }) => {
                response.with_expired_at(*expired_at)
            }
            _ => response,
        }
    }
}
