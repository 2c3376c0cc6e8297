use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use signet_api::app::create_app;
use signet_api::routes::auth::AppState;
use signet_core::services::auth::AuthService;
use signet_core::services::token::{
    RegistryCleanup, RegistryCleanupConfig, RsaKeyManager, TokenServiceConfig,
};
use signet_infra::{InMemoryRevocationRegistry, StaticIdentityProvider};
use signet_shared::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Signet token service");

    // Load configuration
    let config = AppConfig::from_env();

    // Key bootstrap happens before the listener binds; a service that
    // cannot sign or verify must not start serving
    let key_manager = match RsaKeyManager::initialize(&config.token.key_storage_dir) {
        Ok(manager) => manager,
        Err(e) => {
            error!("Key bootstrap failed: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };
    info!(
        "RSA keypair ready (storage: {})",
        config.token.key_storage_dir
    );

    // Wire the concrete providers into the auth service
    let identity_provider = Arc::new(StaticIdentityProvider::with_demo_identities());
    let registry = Arc::new(InMemoryRevocationRegistry::new());

    let auth_service = Arc::new(AuthService::new(
        identity_provider,
        registry.clone(),
        &key_manager,
        TokenServiceConfig::from(&config.token),
    ));

    // Optional background sweep of the revocation registry
    if config.cleanup.enabled {
        let cleanup = Arc::new(RegistryCleanup::new(
            registry,
            RegistryCleanupConfig::from(&config.cleanup),
        ));
        cleanup.start_background_task();
    }

    let state = web::Data::new(AppState { auth_service });

    let bind_address = config.server.bind_address();
    info!("Server listening on {}", bind_address);

    HttpServer::new(move || create_app(state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
