//! Main authentication service implementation

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::token::{AccessClaims, RefreshClaims, RefreshTokenRecord};
use crate::domain::value_objects::AuthTokens;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{IdentityProvider, RevocationRegistry};
use crate::services::token::{RsaKeyManager, TokenServiceConfig, TokenSigner, TokenVerifier};

/// Authentication service for managing the complete token lifecycle
pub struct AuthService<P, R>
where
    P: IdentityProvider,
    R: RevocationRegistry,
{
    /// Identity provider for credential checks and subject lookups
    identity_provider: Arc<P>,
    /// Registry tracking which refresh tokens are honored
    registry: Arc<R>,
    /// RS256 signer holding the private key
    signer: TokenSigner,
    /// RS256 verifier holding the public key
    verifier: TokenVerifier,
    /// Public half of the signing key pair, PEM encoded
    public_key_pem: String,
    /// Token lifetimes
    config: TokenServiceConfig,
}

impl<P, R> AuthService<P, R>
where
    P: IdentityProvider,
    R: RevocationRegistry,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `identity_provider` - Provider for credential and id lookups
    /// * `registry` - Revocation registry for refresh tokens
    /// * `key_manager` - Provisioned RSA key pair to sign and verify with
    /// * `config` - Token lifetimes
    pub fn new(
        identity_provider: Arc<P>,
        registry: Arc<R>,
        key_manager: &RsaKeyManager,
        config: TokenServiceConfig,
    ) -> Self {
        Self {
            identity_provider,
            registry,
            signer: TokenSigner::new(key_manager.encoding_key().clone()),
            verifier: TokenVerifier::new(key_manager.decoding_key().clone()),
            public_key_pem: key_manager.public_key_pem().to_string(),
            config,
        }
    }

    /// Authenticate a credential pair and issue both tokens
    ///
    /// This method:
    /// 1. Resolves the identity from the supplied credentials
    /// 2. Signs an access token and a refresh token
    /// 3. Registers the refresh token so logout can revoke it later
    ///
    /// # Arguments
    ///
    /// * `username` - The claimed username
    /// * `password` - The plaintext password
    ///
    /// # Returns
    ///
    /// * `Ok(AuthTokens)` - Both tokens plus the authenticated identity
    /// * `Err(DomainError)` - Credentials rejected or signing failed
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<AuthTokens> {
        // Step 1: Resolve the identity; unknown username and wrong password
        // come back as the same error
        let identity = self
            .identity_provider
            .find_by_credentials(username, password)
            .await?
            .ok_or(DomainError::Auth(AuthError::InvalidCredentials))?;

        // Step 2: Sign both tokens
        let access_claims = AccessClaims::new(&identity, self.config.access_token_expiry_minutes);
        let access_token = self.signer.sign(&access_claims)?;

        let refresh_claims = RefreshClaims::new(identity.id, self.config.refresh_token_expiry_days);
        let refresh_token = self.signer.sign(&refresh_claims)?;

        // Step 3: Register the refresh token; only registered tokens are
        // honored on refresh
        self.registry
            .insert(&refresh_token, RefreshTokenRecord::new(identity.id))
            .await?;

        info!(
            user_id = identity.id,
            username = %identity.username,
            "Login succeeded"
        );

        Ok(AuthTokens::new(access_token, refresh_token, identity))
    }

    /// Exchange a registered refresh token for a fresh access token
    ///
    /// This method:
    /// 1. Checks registry membership before touching the signature, so a
    ///    revoked token is rejected no matter how valid it still looks
    /// 2. Verifies the signature and expiry, pruning the registry entry on
    ///    failure since such a token can never verify again
    /// 3. Confirms the token's subject still exists
    /// 4. Signs a fresh access token
    ///
    /// The refresh token itself is not rotated; it stays registered and
    /// usable until logout or expiry.
    ///
    /// # Arguments
    ///
    /// * `refresh_token` - The full signed refresh token string
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - A newly signed access token
    /// * `Err(DomainError)` - Token unregistered, failed verification, or
    ///   its subject is gone
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<String> {
        // Step 1: Registry membership first
        if !self.registry.contains(refresh_token).await? {
            return Err(DomainError::Auth(AuthError::TokenNotRegistered));
        }

        // Step 2: Verify signature and expiry; prune on failure
        let claims = match self.verifier.verify::<RefreshClaims>(refresh_token) {
            Ok(claims) => claims,
            Err(e) => {
                self.registry.remove(refresh_token).await?;
                warn!("Pruned refresh token that failed verification: {}", e);
                return Err(e);
            }
        };

        // Step 3: The subject must still exist. The entry stays registered
        // because the token itself is still sound.
        let identity = self
            .identity_provider
            .find_by_id(claims.user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::IdentityNotFound))?;

        // Step 4: Issue a fresh access token
        let access_claims = AccessClaims::new(&identity, self.config.access_token_expiry_minutes);
        let access_token = self.signer.sign(&access_claims)?;

        info!(user_id = identity.id, "Access token refreshed");

        Ok(access_token)
    }

    /// Verify an access token and return its claims
    ///
    /// Stateless: only the signature and expiry are checked. The registry
    /// plays no part for access tokens, so revocation does not shorten the
    /// life of access tokens already issued.
    pub fn verify_access_token(&self, token: &str) -> DomainResult<AccessClaims> {
        self.verifier.verify::<AccessClaims>(token)
    }

    /// Revoke a refresh token
    ///
    /// Idempotent: revoking a token that was never registered, or revoking
    /// the same token twice, succeeds all the same.
    pub async fn logout(&self, refresh_token: Option<&str>) -> DomainResult<()> {
        if let Some(token) = refresh_token {
            if self.registry.remove(token).await? {
                info!("Refresh token revoked");
            }
        }
        Ok(())
    }

    /// PEM-encoded public key clients can verify tokens with offline
    pub fn public_key_pem(&self) -> &str {
        &self.public_key_pem
    }

    /// Signing algorithm identifier
    pub fn algorithm(&self) -> &'static str {
        "RS256"
    }
}
