/**
 * Application State Management
 *
 * `AppState` is the single container handed to every handler and to the
 * auth middleware. It is cheap to clone: every field is an `Arc` or holds
 * only `Arc`s.
 *
 * The `FromRef` implementations let a handler extract just the part it
 * needs, e.g. `State(store): State<Arc<dyn CredentialStore>>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::flow::AuthService;
use crate::backend::auth::sessions::TokenService;
use crate::backend::store::CredentialStore;
use crate::shared::AppConfig;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Configuration the server was started with
    pub config: Arc<AppConfig>,

    /// Persistence for users and ideas
    pub store: Arc<dyn CredentialStore>,

    /// Register, login, refresh and token identification
    ///
    /// Owns the token service built from `config.jwt_secret`, so every token
    /// in the process is signed with the same key.
    pub auth: AuthService,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn CredentialStore>) -> Self {
        let tokens = Arc::new(TokenService::new(&config.jwt_secret));
        let auth = AuthService::new(&config, store.clone(), tokens);

        Self {
            config: Arc::new(config),
            store,
            auth,
        }
    }
}

impl FromRef<AppState> for Arc<dyn CredentialStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

impl FromRef<AppState> for AuthService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}
