/**
 * Request and Response Types for Authentication
 *
 * Request fields are all optional so that a missing field surfaces as the
 * endpoint's own validation message instead of a generic JSON rejection.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::PublicUser;

/// Registration request
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Login request
#[derive(Deserialize, Debug, Clone, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Authentication response
///
/// Returned by register, login and refresh. The refresh token never appears
/// here; it travels in the `refreshToken` cookie only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    pub user: PublicUser,
}

/// Plain `{ "message": ... }` body
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Trimmed value of an optional field, `None` when absent or blank
pub(crate) fn required(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
