/**
 * Refresh Handler
 *
 * POST /api/auth/refresh. Reads the `refreshToken` cookie and answers with a
 * new access token. The refresh token itself is not rotated.
 */

use axum::{extract::State, response::Json};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::cookies::refresh_token_from;
use crate::backend::auth::flow::AuthService;
use crate::backend::auth::handlers::types::AuthResponse;
use crate::backend::error::BackendError;

/// # Errors
///
/// * `401` - no cookie, invalid or expired token, or the user is gone
pub async fn refresh(
    State(auth): State<AuthService>,
    jar: CookieJar,
) -> Result<Json<AuthResponse>, BackendError> {
    let (access_token, user) = auth.refresh(refresh_token_from(&jar)).await?;

    Ok(Json(AuthResponse { access_token, user }))
}
