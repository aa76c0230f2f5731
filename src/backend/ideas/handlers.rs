/**
 * Idea Handlers
 *
 * CRUD over `/api/ideas`. Reads are public; create, update and delete run
 * behind `auth_middleware` and take the `AuthUser` it attaches.
 *
 * A path id that is not a UUID is treated as an unknown idea (404), never
 * as a validation error.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Path, State},
    http::{request::Parts, StatusCode},
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::error::BackendError;
use crate::backend::extract::{LenientJson, LenientQuery};
use crate::backend::middleware::AuthUser;
use crate::backend::store::CredentialStore;
use crate::shared::{Idea, IdeaInput};

pub const IDEA_NOT_FOUND: &str = "Idea not found";

/// Query parameters for listing ideas
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Kept as text so a bad value means "no limit" instead of a rejection
    #[serde(rename = "_limit")]
    pub limit: Option<String>,
}

impl ListQuery {
    /// Positive integer limit, if one was given
    pub fn limit(&self) -> Option<u32> {
        self.limit
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|limit| *limit > 0)
    }
}

fn parse_id(raw: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw).map_err(|_| {
        tracing::debug!("Malformed idea id: {}", raw);
        BackendError::not_found(IDEA_NOT_FOUND)
    })
}

/// The `{id}` path segment as an idea id
///
/// Anything that is not a UUID, including a segment that does not decode
/// to UTF-8, rejects with 404 `Idea not found`.
#[derive(Debug, Clone, Copy)]
pub struct IdeaId(pub Uuid);

impl<S> FromRequestParts<S> for IdeaId
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Idea id rejected: {}", rejection.body_text());
                BackendError::not_found(IDEA_NOT_FOUND)
            })?;
        parse_id(&raw).map(Self)
    }
}

/// GET /api/ideas
pub async fn list_ideas(
    State(store): State<Arc<dyn CredentialStore>>,
    LenientQuery(query): LenientQuery<ListQuery>,
) -> Result<Json<Vec<Idea>>, BackendError> {
    let ideas = store.list_ideas(query.limit()).await?;
    Ok(Json(ideas))
}

/// GET /api/ideas/{id}
pub async fn get_idea(
    State(store): State<Arc<dyn CredentialStore>>,
    IdeaId(id): IdeaId,
) -> Result<Json<Idea>, BackendError> {
    store
        .find_idea(id)
        .await?
        .map(Json)
        .ok_or_else(|| BackendError::not_found(IDEA_NOT_FOUND))
}

/// POST /api/ideas
///
/// # Errors
///
/// * `400` - title, summary or description missing or blank
/// * `401` - no valid access token
pub async fn create_idea(
    State(store): State<Arc<dyn CredentialStore>>,
    AuthUser(user): AuthUser,
    LenientJson(input): LenientJson<IdeaInput>,
) -> Result<(StatusCode, Json<Idea>), BackendError> {
    let draft = input.validate()?;
    let idea = store.create_idea(draft).await?;

    tracing::info!("Idea {} created by user {}", idea.id, user.id);
    Ok((StatusCode::CREATED, Json(idea)))
}

/// PUT /api/ideas/{id}
///
/// Full replacement: tags left out of the body become an empty list.
pub async fn update_idea(
    State(store): State<Arc<dyn CredentialStore>>,
    AuthUser(user): AuthUser,
    IdeaId(id): IdeaId,
    LenientJson(input): LenientJson<IdeaInput>,
) -> Result<Json<Idea>, BackendError> {
    let draft = input.validate()?;

    let idea = store
        .update_idea(id, draft)
        .await?
        .ok_or_else(|| BackendError::not_found(IDEA_NOT_FOUND))?;

    tracing::info!("Idea {} updated by user {}", idea.id, user.id);
    Ok(Json(idea))
}

/// DELETE /api/ideas/{id}
pub async fn delete_idea(
    State(store): State<Arc<dyn CredentialStore>>,
    AuthUser(user): AuthUser,
    IdeaId(id): IdeaId,
) -> Result<Json<MessageResponse>, BackendError> {
    if !store.delete_idea(id).await? {
        return Err(BackendError::not_found(IDEA_NOT_FOUND));
    }

    tracing::info!("Idea {} deleted by user {}", id, user.id);
    Ok(Json(MessageResponse::new("Idea deleted successfully")))
}
