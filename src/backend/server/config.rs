/**
 * Store Selection
 *
 * Picks the persistence backend from configuration: PostgreSQL when
 * `DATABASE_URL` is set, the in-memory store otherwise.
 *
 * A configured database that cannot be reached or migrated is a startup
 * error. Silently falling back to memory would lose every write.
 */

use std::sync::Arc;

use crate::backend::store::{CredentialStore, MemoryStore, PgStore, StoreError};
use crate::shared::AppConfig;

/// Build the store described by `config`
pub async fn load_store(config: &AppConfig) -> Result<Arc<dyn CredentialStore>, StoreError> {
    match &config.database_url {
        Some(url) => {
            let store = PgStore::connect(url).await?;
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set - using in-memory store, data will not persist");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
