/**
 * Register Handler
 *
 * POST /api/auth/register. Creates the account, sets the refresh cookie and
 * answers 201 with the access token and public user.
 */

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::cookies::refresh_cookie;
use crate::backend::auth::flow::AuthService;
use crate::backend::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::backend::error::BackendError;
use crate::backend::extract::LenientJson;
use crate::shared::AppConfig;

/// Register handler
///
/// # Errors
///
/// * `400` - a field is missing (`All fields are required`) or the email is
///   already registered (`User already exists`)
/// * `500` - hashing, store or token failure
pub async fn register(
    State(auth): State<AuthService>,
    State(config): State<Arc<AppConfig>>,
    jar: CookieJar,
    LenientJson(request): LenientJson<RegisterRequest>,
) -> Result<(StatusCode, CookieJar, Json<AuthResponse>), BackendError> {
    let session = auth.register(request).await?;

    let cookie = refresh_cookie(
        session.refresh_token,
        auth.refresh_ttl(),
        config.production,
    );

    Ok((
        StatusCode::CREATED,
        jar.add(cookie),
        Json(AuthResponse {
            access_token: session.access_token,
            user: session.user,
        }),
    ))
}
