use std::sync::Arc;

use axum::{extract::State, response::Json};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::cookies::clearing_cookie;
use crate::backend::auth::handlers::types::MessageResponse;
use crate::shared::AppConfig;

/// POST /api/auth/logout
///
/// Always clears the refresh cookie, whether or not one was sent. Tokens
/// already issued stay valid until they expire.
pub async fn logout(
    State(config): State<Arc<AppConfig>>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    tracing::info!("Logout requested");
    (
        jar.add(clearing_cookie(config.production)),
        Json(MessageResponse::new("Logged out successfully")),
    )
}
