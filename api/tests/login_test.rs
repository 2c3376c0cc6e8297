//! Integration tests for the login endpoint

use std::sync::Arc;

use actix_web::{test, web};

use signet_api::app::create_app;
use signet_api::routes::auth::AppState;
use signet_core::services::auth::AuthService;
use signet_core::services::token::{KeyPair, RsaKeyManager, TokenServiceConfig};
use signet_infra::{InMemoryRevocationRegistry, StaticIdentityProvider};

fn test_state() -> web::Data<AppState<StaticIdentityProvider, InMemoryRevocationRegistry>> {
    let pair = KeyPair::generate().unwrap();
    let key_manager =
        RsaKeyManager::from_pem_strings(&pair.private_key_pem, &pair.public_key_pem).unwrap();

    let auth_service = Arc::new(AuthService::new(
        Arc::new(StaticIdentityProvider::with_demo_identities()),
        Arc::new(InMemoryRevocationRegistry::new()),
        &key_manager,
        TokenServiceConfig::default(),
    ));

    web::Data::new(AppState { auth_service })
}

#[actix_web::test]
async fn test_login_success() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(serde_json::json!({
            "username": "admin",
            "password": "admin123"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["accessToken"].as_str().unwrap().contains('.'));
    assert!(body["refreshToken"].as_str().unwrap().contains('.'));
    assert_eq!(body["user"]["id"], 1);
    assert_eq!(body["user"]["username"], "admin");
    assert_eq!(body["user"]["role"], "admin");
}

#[actix_web::test]
async fn test_login_wrong_password() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(serde_json::json!({
            "username": "admin",
            "password": "wrong"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_credentials");
}

#[actix_web::test]
async fn test_login_unknown_username_same_error() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(serde_json::json!({
            "username": "nobody",
            "password": "admin123"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    // Indistinguishable from a wrong password
    assert_eq!(resp.status(), 401);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_credentials");
}

#[actix_web::test]
async fn test_login_missing_password() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(serde_json::json!({ "username": "admin" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_error");
}

#[actix_web::test]
async fn test_login_empty_fields() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(serde_json::json!({
            "username": "",
            "password": ""
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_error");
}

#[actix_web::test]
async fn test_second_demo_identity() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(serde_json::json!({
            "username": "user",
            "password": "user123"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["id"], 2);
    assert_eq!(body["user"]["role"], "user");
}
