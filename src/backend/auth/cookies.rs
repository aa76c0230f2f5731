//! Refresh-token cookie.
//!
//! Set and cleared with identical scoping attributes: `HttpOnly`,
//! `SameSite=None`, `Path=/`, and `Secure` in production.

use std::time::Duration;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

/// Name of the cookie carrying the refresh token
pub const REFRESH_COOKIE_NAME: &str = "refreshToken";

fn base_cookie(value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE_NAME, value))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::None)
        .path("/")
        .build()
}

/// Cookie holding a freshly issued refresh token
pub fn refresh_cookie(token: String, max_age: Duration, secure: bool) -> Cookie<'static> {
    let mut cookie = base_cookie(token, secure);
    let seconds = i64::try_from(max_age.as_secs()).unwrap_or(i64::MAX);
    cookie.set_max_age(time::Duration::seconds(seconds));
    cookie
}

/// Cookie that makes the browser drop the refresh token
///
/// Added to the jar directly rather than through `CookieJar::remove`, which
/// only emits a removal when the request carried the cookie.
pub fn clearing_cookie(secure: bool) -> Cookie<'static> {
    let mut cookie = base_cookie(String::new(), secure);
    cookie.make_removal();
    cookie
}

/// The refresh token sent by the client, if any
pub fn refresh_token_from(jar: &CookieJar) -> Option<String> {
    jar.get(REFRESH_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}
