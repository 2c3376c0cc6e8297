use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{LoginRequest, LoginResponse, UserInfo};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use signet_core::repositories::{IdentityProvider, RevocationRegistry};

use super::AppState;

/// Handler for POST /auth/login
///
/// Authenticates a credential pair and issues an access/refresh token pair.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "admin",
///     "password": "admin123"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "accessToken": "eyJ...",
///     "refreshToken": "eyJ...",
///     "user": { "id": 1, "username": "admin", "role": "admin" }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: username or password missing/empty
/// - 401 Unauthorized: credentials rejected (deliberately the same error
///   for an unknown username and a wrong password)
pub async fn login<P, R>(
    state: web::Data<AppState<P, R>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    P: IdentityProvider + 'static,
    R: RevocationRegistry + 'static,
{
    if let Err(errors) = request.0.validate() {
        return handle_validation_errors(&errors);
    }

    let username = request.username.as_deref().unwrap_or_default();
    let password = request.password.as_deref().unwrap_or_default();

    match state.auth_service.login(username, password).await {
        Ok(tokens) => {
            let response = LoginResponse {
                access_token: tokens.access_token,
                refresh_token: tokens.refresh_token,
                user: UserInfo::from(tokens.identity),
            };
            HttpResponse::Ok().json(response)
        }
        Err(error) => handle_domain_error(&error),
    }
}
