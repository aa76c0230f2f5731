//! Credential Store
//!
//! Persistence for users and ideas behind a single trait, so the auth flow
//! and the idea handlers never see a connection pool directly.
//!
//! # Implementations
//!
//! - **`postgres`** - `PgStore`, sqlx over PostgreSQL, schema applied from
//!   `migrations/` on connect
//! - **`memory`** - `MemoryStore`, maps behind a `tokio::sync::RwLock`, used
//!   by the tests and when no `DATABASE_URL` is configured
//!
//! Every method propagates failures instead of retrying; the HTTP layer
//! turns them into a 500.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::users::{NewUser, User};
use crate::shared::{Idea, IdeaDraft};

/// In-memory store
pub mod memory;

/// PostgreSQL store
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The email is already registered
    #[error("a user with this email already exists")]
    DuplicateEmail,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Persistence operations needed by the application
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Short name used in startup logs
    fn backend_name(&self) -> &'static str;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Insert a user
    ///
    /// Fails with `StoreError::DuplicateEmail` when the email is taken, even
    /// if a concurrent request registered it after the caller's pre-check.
    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// Ideas, newest first, at most `limit` of them
    async fn list_ideas(&self, limit: Option<u32>) -> Result<Vec<Idea>, StoreError>;

    async fn find_idea(&self, id: Uuid) -> Result<Option<Idea>, StoreError>;

    async fn create_idea(&self, draft: IdeaDraft) -> Result<Idea, StoreError>;

    /// Replace the editable fields of an idea; `None` if it does not exist
    async fn update_idea(&self, id: Uuid, draft: IdeaDraft) -> Result<Option<Idea>, StoreError>;

    /// Delete an idea; `false` if it did not exist
    async fn delete_idea(&self, id: Uuid) -> Result<bool, StoreError>;
}
