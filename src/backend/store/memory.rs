use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{CredentialStore, StoreError};
use crate::backend::auth::users::{NewUser, User};
use crate::shared::{Idea, IdeaDraft};

/// In-memory CredentialStore for tests and database-less development
///
/// Ideas are kept in insertion order, which is also creation order, so
/// newest-first is a reverse walk.
#[derive(Clone, Default)]
pub struct MemoryStore {
    users: Arc<RwLock<Vec<User>>>,
    ideas: Arc<RwLock<Vec<Idea>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.id == id).cloned())
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|user| user.email == new_user.email) {
            return Err(StoreError::DuplicateEmail);
        }
        let user = User::from_new(new_user);
        users.push(user.clone());
        Ok(user)
    }

    async fn list_ideas(&self, limit: Option<u32>) -> Result<Vec<Idea>, StoreError> {
        let ideas = self.ideas.read().await;
        let limit = limit.map_or(usize::MAX, |n| n as usize);
        Ok(ideas.iter().rev().take(limit).cloned().collect())
    }

    async fn find_idea(&self, id: Uuid) -> Result<Option<Idea>, StoreError> {
        let ideas = self.ideas.read().await;
        Ok(ideas.iter().find(|idea| idea.id == id).cloned())
    }

    async fn create_idea(&self, draft: IdeaDraft) -> Result<Idea, StoreError> {
        let idea = Idea::from_draft(draft);
        self.ideas.write().await.push(idea.clone());
        Ok(idea)
    }

    async fn update_idea(&self, id: Uuid, draft: IdeaDraft) -> Result<Option<Idea>, StoreError> {
        let mut ideas = self.ideas.write().await;
        Ok(ideas.iter_mut().find(|idea| idea.id == id).map(|idea| {
            idea.apply(draft);
            idea.clone()
        }))
    }

    async fn delete_idea(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut ideas = self.ideas.write().await;
        let before = ideas.len();
        ideas.retain(|idea| idea.id != id);
        Ok(ideas.len() != before)
    }
}
