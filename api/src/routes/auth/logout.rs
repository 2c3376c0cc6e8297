use actix_web::{web, HttpResponse};

use crate::dto::auth::{LogoutRequest, LogoutResponse};
use crate::handlers::error::handle_domain_error;

use signet_core::repositories::{IdentityProvider, RevocationRegistry};

use super::AppState;

/// Handler for POST /auth/logout
///
/// Revokes the given refresh token. Idempotent: a missing body, an absent
/// field, an unknown token, and a token already revoked all succeed.
///
/// # Request Body (optional)
///
/// ```json
/// {
///     "refreshToken": "eyJ..."
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true
/// }
/// ```
pub async fn logout<P, R>(
    state: web::Data<AppState<P, R>>,
    request: Option<web::Json<LogoutRequest>>,
) -> HttpResponse
where
    P: IdentityProvider + 'static,
    R: RevocationRegistry + 'static,
{
    let refresh_token = request.as_ref().and_then(|r| r.refresh_token.as_deref());

    match state.auth_service.logout(refresh_token).await {
        Ok(()) => HttpResponse::Ok().json(LogoutResponse { success: true }),
        Err(error) => handle_domain_error(&error),
    }
}
