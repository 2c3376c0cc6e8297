//! RS256 token verification

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::domain::entities::token::TokenClaims;
use crate::errors::{DomainError, TokenError};

/// Verifies compact RS256 JWTs against the public key
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Creates a verifier around a public RSA key
    pub fn new(decoding_key: DecodingKey) -> Self {
        let mut validation = Validation::new(Algorithm::RS256);
        // Expiry is compared manually in verify() so rejections carry the
        // exact expiry instant and tokens expire on the second, without
        // the default leeway window.
        validation.validate_exp = false;

        Self {
            decoding_key,
            validation,
        }
    }

    /// Decodes and verifies a token.
    ///
    /// The signature is checked before expiry: a tampered token is reported
    /// as invalid even when its claims would also be expired. Anything that
    /// fails structural or signature checks collapses into
    /// [`TokenError::Invalid`]; only a well-signed but stale token gets the
    /// more specific [`TokenError::Expired`] with its expiry instant.
    pub fn verify<C: TokenClaims>(&self, token: &str) -> Result<C, DomainError> {
        let data = decode::<C>(token, &self.decoding_key, &self.validation)
            .map_err(|_| DomainError::Token(TokenError::Invalid))?;

        let claims = data.claims;
        if claims.is_expired() {
            return Err(DomainError::Token(TokenError::Expired {
                expired_at: claims.expires_at(),
            }));
        }

        Ok(claims)
    }
}
