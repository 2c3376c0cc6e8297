//! Unit tests for RS256 signing and verification

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::domain::entities::identity::Identity;
use crate::domain::entities::token::{AccessClaims, RefreshClaims};
use crate::errors::{DomainError, TokenError};
use crate::services::token::{KeyPair, RsaKeyManager, TokenSigner, TokenVerifier};

use super::test_key_manager;

fn signer() -> TokenSigner {
    TokenSigner::new(test_key_manager().encoding_key().clone())
}

fn verifier() -> TokenVerifier {
    TokenVerifier::new(test_key_manager().decoding_key().clone())
}

#[test]
fn test_access_token_round_trip() {
    let identity = Identity::new(1, "admin", "admin");
    let claims = AccessClaims::new(&identity, 15);

    let token = signer().sign(&claims).unwrap();
    let verified: AccessClaims = verifier().verify(&token).unwrap();

    assert_eq!(verified.user_id, 1);
    assert_eq!(verified.username, "admin");
    assert_eq!(verified.role, "admin");
    assert_eq!(verified.exp, claims.exp);
}

#[test]
fn test_refresh_token_round_trip() {
    let claims = RefreshClaims::new(2, 7);

    let token = signer().sign(&claims).unwrap();
    let verified: RefreshClaims = verifier().verify(&token).unwrap();

    assert_eq!(verified.user_id, 2);
    assert_eq!(verified.exp, claims.exp);
}

#[test]
fn test_wrong_key_is_rejected() {
    let other_pair = KeyPair::generate().unwrap();
    let other_manager =
        RsaKeyManager::from_pem_strings(&other_pair.private_key_pem, &other_pair.public_key_pem)
            .unwrap();
    let other_signer = TokenSigner::new(other_manager.encoding_key().clone());

    let claims = AccessClaims::new(&Identity::new(1, "admin", "admin"), 15);
    let token = other_signer.sign(&claims).unwrap();

    let result = verifier().verify::<AccessClaims>(&token);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Invalid))
    ));
}

#[test]
fn test_garbage_token_is_invalid() {
    for garbage in ["", "not-a-token", "a.b.c", "header.payload"] {
        let result = verifier().verify::<AccessClaims>(garbage);
        assert!(
            matches!(result, Err(DomainError::Token(TokenError::Invalid))),
            "expected Invalid for {:?}",
            garbage
        );
    }
}

#[test]
fn test_expired_token_reports_expiry_instant() {
    let claims = AccessClaims::new(&Identity::new(1, "admin", "admin"), -1);
    let token = signer().sign(&claims).unwrap();

    match verifier().verify::<AccessClaims>(&token) {
        Err(DomainError::Token(TokenError::Expired { expired_at })) => {
            assert_eq!(expired_at.timestamp(), claims.exp);
        }
        other => panic!("expected Expired, got {:?}", other.map(|c| c.exp)),
    }
}

#[test]
fn test_zero_lifetime_expires_immediately() {
    // exp == iat, and expiry is inclusive: a token is dead the second it
    // reaches its exp claim
    let claims = AccessClaims::new(&Identity::new(1, "admin", "admin"), 0);
    let token = signer().sign(&claims).unwrap();

    let result = verifier().verify::<AccessClaims>(&token);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Expired { .. }))
    ));
}

#[test]
fn test_tampered_payload_is_invalid() {
    let signer = signer();
    let token_a = signer
        .sign(&AccessClaims::new(&Identity::new(1, "admin", "admin"), 15))
        .unwrap();
    let token_b = signer
        .sign(&AccessClaims::new(&Identity::new(2, "user", "user"), 15))
        .unwrap();

    // Splice b's payload onto a's signature
    let parts_a: Vec<&str> = token_a.split('.').collect();
    let parts_b: Vec<&str> = token_b.split('.').collect();
    let tampered = format!("{}.{}.{}", parts_a[0], parts_b[1], parts_a[2]);

    let result = verifier().verify::<AccessClaims>(&tampered);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Invalid))
    ));
}

#[test]
fn test_bad_signature_takes_precedence_over_expiry() {
    let signer = signer();
    let live = signer
        .sign(&AccessClaims::new(&Identity::new(1, "admin", "admin"), 15))
        .unwrap();
    let expired = signer
        .sign(&AccessClaims::new(&Identity::new(1, "admin", "admin"), -5))
        .unwrap();

    // Expired payload with a signature that does not cover it: the token
    // must come back Invalid, not Expired
    let live_parts: Vec<&str> = live.split('.').collect();
    let expired_parts: Vec<&str> = expired.split('.').collect();
    let tampered = format!(
        "{}.{}.{}",
        live_parts[0], expired_parts[1], live_parts[2]
    );

    let result = verifier().verify::<AccessClaims>(&tampered);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Invalid))
    ));
}

#[test]
fn test_hs256_token_is_rejected() {
    // A token signed with a symmetric key must not pass an RS256 verifier,
    // even if an attacker guesses at key confusion
    let claims = AccessClaims::new(&Identity::new(1, "admin", "admin"), 15);
    let hs_token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"shared-secret"),
    )
    .unwrap();

    let result = verifier().verify::<AccessClaims>(&hs_token);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Invalid))
    ));
}

#[test]
fn test_refresh_token_does_not_verify_as_access_token() {
    // Refresh claims lack username and role, so the deserialization step
    // rejects the cross-use before any caller sees claims
    let refresh_token = signer().sign(&RefreshClaims::new(1, 7)).unwrap();

    let result = verifier().verify::<AccessClaims>(&refresh_token);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Invalid))
    ));
}
