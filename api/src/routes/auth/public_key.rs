use actix_web::{web, HttpResponse};

use crate::dto::auth::PublicKeyResponse;

use signet_core::repositories::{IdentityProvider, RevocationRegistry};

use super::AppState;

/// Handler for GET /auth/public-key
///
/// Returns the PEM-encoded public key and the signing algorithm, letting a
/// resource server verify tokens offline without calling back into this
/// service.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "publicKey": "-----BEGIN PUBLIC KEY-----\n...",
///     "algorithm": "RS256"
/// }
/// ```
pub async fn public_key<P, R>(state: web::Data<AppState<P, R>>) -> HttpResponse
where
    P: IdentityProvider + 'static,
    R: RevocationRegistry + 'static,
{
    let response = PublicKeyResponse {
        public_key: state.auth_service.public_key_pem().to_string(),
        algorithm: state.auth_service.algorithm().to_string(),
    };
    HttpResponse::Ok().json(response)
}
