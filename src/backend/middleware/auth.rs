/**
 * Authentication Middleware
 *
 * Protects routes that require a signed-in user. The access token is read
 * from `Authorization: Bearer <token>`, verified, and resolved to the user's
 * public identity, which is attached to the request for the `AuthUser`
 * extractor.
 *
 * Every failure produces the same 401 body, whether the header is missing,
 * the token is expired or forged, or the user no longer exists.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::flow::{AuthService, TOKEN_FAILED};
use crate::backend::auth::users::PublicUser;
use crate::backend::error::BackendError;

/// Authentication middleware
///
/// Attach with `route_layer(from_fn_with_state(state, auth_middleware))` on
/// the methods that need it.
pub async fn auth_middleware(
    State(auth): State<AuthService>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        BackendError::unauthorized(TOKEN_FAILED)
    })?;

    let user = auth.identify(token).await?;

    tracing::debug!("Authenticated request for user {}", user.id);
    request.extensions_mut().insert(AuthUser(user));

    Ok(next.run(request).await)
}

/// Token part of a `Bearer` authorization header
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Axum extractor for the authenticated user
///
/// Only succeeds behind `auth_middleware`; anywhere else it rejects with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub PublicUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<AuthUser>().cloned().ok_or_else(|| {
            tracing::warn!("AuthUser not found in request extensions");
            BackendError::unauthorized(TOKEN_FAILED)
        })
    }
}
