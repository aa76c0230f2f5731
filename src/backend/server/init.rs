/**
 * Server Initialization
 *
 * Builds the ready-to-serve router from configuration:
 * 1. Select and connect the store
 * 2. Build `AppState` (token service, auth service)
 * 3. Mount routes, CORS and request tracing
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_store;
use crate::backend::server::state::AppState;
use crate::backend::store::{CredentialStore, StoreError};
use crate::shared::AppConfig;

/// Create the application router, connecting to the configured store
pub async fn create_app(config: AppConfig) -> Result<Router, StoreError> {
    tracing::info!("Initializing IdeaDrop backend server");

    let store = load_store(&config).await?;
    Ok(create_app_with_store(config, store))
}

/// Create the application router over an existing store
///
/// Used by the integration tests with a `MemoryStore`.
pub fn create_app_with_store(config: AppConfig, store: Arc<dyn CredentialStore>) -> Router {
    tracing::info!(
        "Using {} store, {} mode",
        store.backend_name(),
        if config.production { "production" } else { "development" }
    );

    create_router(AppState::new(config, store))
}
