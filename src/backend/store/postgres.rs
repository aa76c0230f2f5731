/**
 * PostgreSQL Credential Store
 *
 * sqlx-backed implementation of `CredentialStore`. The schema lives in
 * `migrations/` and is applied by `PgStore::connect`.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use super::{CredentialStore, StoreError};
use crate::backend::auth::users::{NewUser, User};
use crate::shared::{Idea, IdeaDraft};

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wrap an existing pool without touching the schema
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect and run pending migrations
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        tracing::info!("Connecting to database...");
        let pool = PgPool::connect(database_url).await?;
        tracing::info!("Database connection pool created successfully");

        tracing::info!("Running database migrations...");
        sqlx::migrate!().run(&pool).await?;
        tracing::info!("Database migrations completed successfully");

        Ok(Self::new(pool))
    }
}

fn map_unique_violation(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => StoreError::DuplicateEmail,
        _ => StoreError::Database(err),
    }
}

#[async_trait]
impl CredentialStore for PgStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, password_hash, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(user)
    }

    async fn list_ideas(&self, limit: Option<u32>) -> Result<Vec<Idea>, StoreError> {
        // LIMIT NULL is no limit
        let ideas = sqlx::query_as::<_, Idea>(
            r#"
            SELECT id, title, summary, description, tags, created_at
            FROM ideas
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit.map(i64::from))
        .fetch_all(&self.pool)
        .await?;

        Ok(ideas)
    }

    async fn find_idea(&self, id: Uuid) -> Result<Option<Idea>, StoreError> {
        let idea = sqlx::query_as::<_, Idea>(
            r#"
            SELECT id, title, summary, description, tags, created_at
            FROM ideas
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(idea)
    }

    async fn create_idea(&self, draft: IdeaDraft) -> Result<Idea, StoreError> {
        let idea = sqlx::query_as::<_, Idea>(
            r#"
            INSERT INTO ideas (id, title, summary, description, tags, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, summary, description, tags, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&draft.title)
        .bind(&draft.summary)
        .bind(&draft.description)
        .bind(&draft.tags)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(idea)
    }

    async fn update_idea(&self, id: Uuid, draft: IdeaDraft) -> Result<Option<Idea>, StoreError> {
        let idea = sqlx::query_as::<_, Idea>(
            r#"
            UPDATE ideas
            SET title = $1, summary = $2, description = $3, tags = $4
            WHERE id = $5
            RETURNING id, title, summary, description, tags, created_at
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.summary)
        .bind(&draft.description)
        .bind(&draft.tags)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(idea)
    }

    async fn delete_idea(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM ideas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
