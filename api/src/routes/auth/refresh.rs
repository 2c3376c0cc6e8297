use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{RefreshRequest, RefreshResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use signet_core::repositories::{IdentityProvider, RevocationRegistry};

use super::AppState;

/// Handler for POST /auth/refresh
///
/// Exchanges a registered refresh token for a new access token. The refresh
/// token itself is not rotated and stays usable until logout or expiry.
///
/// # Request Body
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
///     "accessToken": "eyJ..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: refreshToken missing/empty
/// - 401 Unauthorized: token not registered, expired, invalid, or its
///   subject no longer exists
pub async fn refresh<P, R>(
    state: web::Data<AppState<P, R>>,
    request: web::Json<RefreshRequest>,
) -> HttpResponse
where
    P: IdentityProvider + 'static,
    R: RevocationRegistry + 'static,
{
    if let Err(errors) = request.0.validate() {
        return handle_validation_errors(&errors);
    }

    let refresh_token = request.refresh_token.as_deref().unwrap_or_default();

    match state.auth_service.refresh(refresh_token).await {
        Ok(access_token) => HttpResponse::Ok().json(RefreshResponse { access_token }),
        Err(error) => handle_domain_error(&error),
    }
}
