//! Application factory
//!
//! Builds the actix-web application from an already-constructed
//! [`AppState`]. The binary and the integration tests assemble the exact
//! same app through this factory, so route wiring is tested as deployed.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use crate::middleware::cors::create_cors;
use crate::routes::auth::{
    login::login, logout::logout, public_key::public_key, refresh::refresh, verify::verify,
    AppState,
};

use signet_core::repositories::{IdentityProvider, RevocationRegistry};

/// Create and configure the application with all routes and middleware
pub fn create_app<P, R>(
    app_state: web::Data<AppState<P, R>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    P: IdentityProvider + 'static,
    R: RevocationRegistry + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .wrap(TracingLogger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Token lifecycle routes
        .service(
            web::scope("/auth")
                .route("/login", web::post().to(login::<P, R>))
                .route("/refresh", web::post().to(refresh::<P, R>))
                .route("/verify", web::get().to(verify::<P, R>))
                .route("/logout", web::post().to(logout::<P, R>))
                .route("/public-key", web::get().to(public_key::<P, R>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "signet",
        "version": env!("CARGO_PKG_VERSION"),
        "algorithm": "RS256",
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
