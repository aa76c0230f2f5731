//! Common test utilities and helpers
//!
//! Every server built here runs on a fresh `MemoryStore` with its own token
//! secret and the cheapest bcrypt cost, so tests never share state.

#![allow(dead_code)]

pub mod auth_helpers;

use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use ideadrop::backend::server::create_app_with_store;
use ideadrop::backend::store::MemoryStore;
use ideadrop::shared::{AppConfig, AppConfigBuilder};

pub use auth_helpers::*;

/// Config shared by all test servers
pub fn test_config() -> AppConfigBuilder {
    AppConfig::builder()
        .jwt_secret(format!("test-secret-{}", uuid::Uuid::new_v4()))
        .bcrypt_cost(4)
}

/// Test server with default token lifetimes
pub fn test_server() -> TestServer {
    server_with(test_config())
}

/// Test server whose access tokens expire after `ttl`
pub fn test_server_with_access_ttl(ttl: Duration) -> TestServer {
    server_with(test_config().access_token_ttl(ttl))
}

fn server_with(builder: AppConfigBuilder) -> TestServer {
    let config = builder.build().expect("test config");
    let app = create_app_with_store(config, Arc::new(MemoryStore::new()));
    TestServer::new(app).expect("test server")
}
