use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::auth::VerifyResponse;
use crate::handlers::error::handle_domain_error;

use signet_core::repositories::{IdentityProvider, RevocationRegistry};
use signet_shared::errors::{error_codes, ErrorResponse};

use super::AppState;

/// Handler for GET /auth/verify
///
/// Verifies the access token presented as a Bearer credential. Stateless:
/// only the signature and embedded expiry are checked, never the registry.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {access_token}
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "valid": true,
///     "user": { "userId": 1, "username": "admin", "role": "admin" },
///     "expiresAt": "2025-01-01T12:15:00Z"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: missing/malformed header, expired token (body
///   carries `expiredAt`), or invalid signature
pub async fn verify<P, R>(req: HttpRequest, state: web::Data<AppState<P, R>>) -> HttpResponse
where
    P: IdentityProvider + 'static,
    R: RevocationRegistry + 'static,
{
    let token = match extract_bearer_token(&req) {
        Some(token) => token,
        None => {
            let body = ErrorResponse::new(
                error_codes::TOKEN_INVALID,
                "Missing or malformed Authorization header",
            );
            return HttpResponse::Unauthorized().json(body);
        }
    };

    match state.auth_service.verify_access_token(token) {
        Ok(claims) => HttpResponse::Ok().json(VerifyResponse::from(claims)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Extracts the Bearer token from the Authorization header
fn extract_bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
