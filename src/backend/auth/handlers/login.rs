/**
 * Login Handler
 *
 * POST /api/auth/login. Same response shape and cookie as registration.
 * An unknown email and a wrong password produce the same 401 body.
 */

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::cookies::refresh_cookie;
use crate::backend::auth::flow::AuthService;
use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::error::BackendError;
use crate::backend::extract::LenientJson;
use crate::shared::AppConfig;

pub async fn login(
    State(auth): State<AuthService>,
    State(config): State<Arc<AppConfig>>,
    jar: CookieJar,
    LenientJson(request): LenientJson<LoginRequest>,
) -> Result<(StatusCode, CookieJar, Json<AuthResponse>), BackendError> {
    let session = auth.login(request).await?;

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
