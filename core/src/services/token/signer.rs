//! RS256 token signing

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::domain::entities::token::TokenClaims;
use crate::errors::{DomainError, TokenError};

/// Signs claim sets into compact RS256 JWTs
#[derive(Clone)]
pub struct TokenSigner {
    encoding_key: EncodingKey,
}

impl TokenSigner {
    /// Creates a signer around a private RSA key
    pub fn new(encoding_key: EncodingKey) -> Self {
        Self { encoding_key }
    }

    /// Signs a claim set, producing the compact `header.payload.signature`
    /// string handed to clients.
    pub fn sign<C: TokenClaims>(&self, claims: &C) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::RS256), claims, &self.encoding_key).map_err(|e| {
            DomainError::Token(TokenError::SigningFailed {
                reason: e.to_string(),
            })
        })
    }
}
