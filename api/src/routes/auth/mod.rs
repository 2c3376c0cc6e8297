//! Token lifecycle route handlers
//!
//! One file per endpoint:
//! - Login (credential check, token issuance)
//! - Refresh (new access token for a registered refresh token)
//! - Verify (stateless access token check)
//! - Logout (refresh token revocation)
//! - Public key (for offline verification by resource servers)

pub mod login;
pub mod logout;
pub mod public_key;
pub mod refresh;
pub mod verify;

use std::sync::Arc;

use signet_core::repositories::{IdentityProvider, RevocationRegistry};
use signet_core::services::auth::AuthService;

/// Application state that holds the shared authentication service
pub struct AppState<P, R>
where
    P: IdentityProvider,
    R: RevocationRegistry,
{
    pub auth_service: Arc<AuthService<P, R>>,
}
