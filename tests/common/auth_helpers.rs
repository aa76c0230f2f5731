//! Authentication test helpers

use axum::http::StatusCode;
use axum_extra::extract::cookie::Cookie;
use axum_test::TestServer;
use serde_json::{json, Value};

/// A registered user and the tokens handed out at registration
pub struct TestUser {
    pub id: String,
    pub email: String,
    pub password: String,
    pub access_token: String,
    pub refresh_cookie: Cookie<'static>,
}

/// Register a user through the API
pub async fn register_user(server: &TestServer, name: &str, email: &str, password: &str) -> TestUser {
    let response = server
        .post("/api/auth/register")
        .json(&json!({ "name": name, "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let body: Value = response.json();
    TestUser {
        id: body["user"]["id"].as_str().unwrap().to_string(),
        email: email.to_string(),
        password: password.to_string(),
        access_token: body["accessToken"].as_str().unwrap().to_string(),
        refresh_cookie: response.cookie("refreshToken"),
    }
}

/// Register the default user, Ann
pub async fn register_ann(server: &TestServer) -> TestUser {
    register_user(server, "Ann", "ann@x.com", "secret123").await
}
