//! Central mapping from `DomainError` to HTTP responses
//!
//! Every handler funnels failures through [`handle_domain_error`] so the
//! status codes and error bodies stay consistent across endpoints. Bodies
//! never carry internal detail: a 500 reports `internal_error` with a
//! generic message regardless of the underlying cause.

use actix_web::{http::StatusCode, HttpResponse};
use tracing::{debug, error};
use validator::ValidationErrors;

use signet_core::errors::{AuthError, DomainError, TokenError};
use signet_shared::errors::{error_codes, ErrorResponse};

/// Convert a domain error into the appropriate HTTP response
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let status = match error {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Auth(
            AuthError::InvalidCredentials
            | AuthError::TokenNotRegistered
            | AuthError::IdentityNotFound,
        ) => StatusCode::UNAUTHORIZED,
        DomainError::Token(TokenError::Expired { .. } | TokenError::Invalid) => {
            StatusCode::UNAUTHORIZED
        }
        DomainError::Token(TokenError::SigningFailed { .. } | TokenError::KeyStorage { .. })
        | DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!("Internal error: {}", error);
        let body = ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred");
        return HttpResponse::InternalServerError().json(body);
    }

    debug!("Request rejected: {}", error);
    HttpResponse::build(status).json(ErrorResponse::from(error))
}

/// Convert validator failures into a 400 response
///
/// Lists the offending fields in the message so clients can tell which
/// required field was missing or empty.
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
    fields.sort_unstable();

    let body = ErrorResponse::new(
        error_codes::VALIDATION_ERROR,
        format!("Missing or empty required field(s): {}", fields.join(", ")),
    );
    HttpResponse::BadRequest().json(body)
}
