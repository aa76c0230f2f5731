/**
 * Auth Flow
 *
 * Register, login, refresh, and bearer-token identification, independent of
 * HTTP. Handlers translate the results into responses and cookies.
 *
 * Both token kinds come from the same `TokenService` and differ only in
 * lifetime. A refresh token is not rotated on use and cannot be revoked
 * before it expires.
 */

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::backend::auth::handlers::types::{required, LoginRequest, RegisterRequest};
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::{NewUser, PublicUser};
use crate::backend::error::BackendError;
use crate::backend::store::CredentialStore;
use crate::shared::AppConfig;

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";
pub const USER_EXISTS: &str = "User already exists";
pub const CREDENTIALS_REQUIRED: &str = "Email and password are required";
pub const INVALID_CREDENTIALS: &str = "Invalid Credentials";
pub const TOKEN_FAILED: &str = "Not authorized, token failed";
pub const NO_REFRESH_TOKEN: &str = "No refresh token";

const DUMMY_PASSWORD: &str = "ideadrop-unknown-account";

/// Tokens issued by register and login
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub user: PublicUser,
}

/// Authentication operations over a store and a token service
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    tokens: Arc<TokenService>,
    hasher: PasswordHasher,
    /// Digest checked when the email is unknown, hashed on first use
    dummy_digest: Arc<OnceCell<String>>,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl AuthService {
    pub fn new(
        config: &AppConfig,
        store: Arc<dyn CredentialStore>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            store,
            tokens,
            hasher: PasswordHasher::new(config.bcrypt_cost),
            dummy_digest: Arc::new(OnceCell::new()),
            access_ttl: config.access_token_ttl,
            refresh_ttl: config.refresh_token_ttl,
        }
    }

    /// Create an account and open a session for it
    pub async fn register(&self, request: RegisterRequest) -> Result<Session, BackendError> {
        let (Some(name), Some(email), Some(password)) = (
            required(request.name.as_deref()),
            required(request.email.as_deref()),
            request.password.as_deref().filter(|p| !p.is_empty()),
        ) else {
            return Err(BackendError::validation(ALL_FIELDS_REQUIRED));
        };

        if self.store.find_user_by_email(email).await?.is_some() {
            tracing::warn!("Registration rejected, email already in use: {}", email);
            return Err(BackendError::conflict(USER_EXISTS));
        }

        let password_hash = self.hasher.hash(password).await?;
        // A racing registration still surfaces as DuplicateEmail here
        let user = self
            .store
            .create_user(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        tracing::info!("User registered: {} ({})", user.name, user.id);
        self.open_session(user.public())
    }

    /// Check credentials and open a session
    ///
    /// Unknown email and wrong password fail identically.
    pub async fn login(&self, request: LoginRequest) -> Result<Session, BackendError> {
        let (Some(email), Some(password)) = (
            required(request.email.as_deref()),
            request.password.as_deref().filter(|p| !p.is_empty()),
        ) else {
            return Err(BackendError::validation(CREDENTIALS_REQUIRED));
        };

        let Some(user) = self.store.find_user_by_email(email).await? else {
            self.verify_against_dummy(password).await?;
            tracing::warn!("Login failed, unknown email: {}", email);
            return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
        };

        if !self.hasher.verify(password, &user.password_hash).await? {
            tracing::warn!("Login failed, wrong password for user {}", user.id);
            return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
        }

        tracing::info!("User logged in: {} ({})", user.name, user.id);
        self.open_session(user.public())
    }

    /// New access token from a refresh token
    ///
    /// The user is re-read from the store, so a deleted account cannot
    /// refresh even while its token is still valid.
    pub async fn refresh(
        &self,
        refresh_token: Option<String>,
    ) -> Result<(String, PublicUser), BackendError> {
        let token = refresh_token.ok_or_else(|| BackendError::unauthorized(NO_REFRESH_TOKEN))?;
        let user = self.identify(&token).await?;
        let access_token = self.tokens.issue(user.id, self.access_ttl)?;

        tracing::debug!("Access token refreshed for user {}", user.id);
        Ok((access_token, user))
    }

    /// Public identity behind a token
    ///
    /// Every failure, including a user that no longer exists, is the same
    /// `Unauthorized`.
    pub async fn identify(&self, token: &str) -> Result<PublicUser, BackendError> {
        let claims = self.tokens.verify(token)?;
        self.lookup(claims.user_id).await
    }

    async fn lookup(&self, user_id: Uuid) -> Result<PublicUser, BackendError> {
        match self.store.find_user_by_id(user_id).await? {
            Some(user) => Ok(user.into()),
            None => {
                tracing::warn!("Token references a missing user: {}", user_id);
                Err(BackendError::unauthorized(TOKEN_FAILED))
            }
        }
    }

    /// One bcrypt verify at the configured cost, result discarded
    ///
    /// Keeps an unknown email as slow as a wrong password.
    async fn verify_against_dummy(&self, password: &str) -> Result<(), BackendError> {
        let digest = self
            .dummy_digest
            .get_or_try_init(|| self.hasher.hash(DUMMY_PASSWORD))
            .await?;
        self.hasher.verify(password, digest).await?;
        Ok(())
    }

    fn open_session(&self, user: PublicUser) -> Result<Session, BackendError> {
        Ok(Session {
            access_token: self.tokens.issue(user.id, self.access_ttl)?,
            refresh_token: self.tokens.issue(user.id, self.refresh_ttl)?,
            user,
        })
    }

    /// Lifetime given to refresh tokens, also used as the cookie max-age
    pub fn refresh_ttl(&self) -> Duration {
        self.refresh_ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::store::MemoryStore;
    use assert_matches::assert_matches;

    fn service() -> AuthService {
        let config = AppConfig::builder()
            .jwt_secret("flow-test-secret")
            .bcrypt_cost(4)
            .build()
            .unwrap();
        let tokens = Arc::new(TokenService::new(&config.jwt_secret));
        AuthService::new(&config, Arc::new(MemoryStore::new()), tokens)
    }

    fn register_request(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: Some(name.into()),
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }

    #[tokio::test]
    async fn test_register_opens_session() {
        let auth = service();
        let session = auth
            .register(register_request("Ann", "ann@x.com", "secret123"))
            .await
            .unwrap();

        assert_eq!(session.user.name, "Ann");
        assert_eq!(session.user.email, "ann@x.com");
        assert_ne!(session.access_token, session.refresh_token);
        assert_eq!(auth.identify(&session.access_token).await.unwrap(), session.user);
    }

    #[tokio::test]
    async fn test_register_requires_all_fields() {
        let auth = service();
        let result = auth.register(register_request("Ann", "  ", "secret123")).await;
        assert_matches!(
            result,
            Err(BackendError::ValidationError { message }) if message == ALL_FIELDS_REQUIRED
        );

        let result = auth.register(RegisterRequest::default()).await;
        assert_matches!(result, Err(BackendError::ValidationError { .. }));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let auth = service();
        auth.register(register_request("Ann", "ann@x.com", "secret123"))
            .await
            .unwrap();

        let result = auth
            .register(register_request("Other", "ann@x.com", "another"))
            .await;
        assert_matches!(
            result,
            Err(BackendError::Conflict { message }) if message == USER_EXISTS
        );
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let auth = service();
        auth.register(register_request("Ann", "ann@x.com", "secret123"))
            .await
            .unwrap();

        let wrong_password = auth.login(login_request("ann@x.com", "nope")).await.unwrap_err();
        let unknown_email = auth.login(login_request("bob@x.com", "secret123")).await.unwrap_err();

        assert_eq!(wrong_password.status_code(), unknown_email.status_code());
        assert_eq!(wrong_password.message(), INVALID_CREDENTIALS);
        assert_eq!(unknown_email.message(), INVALID_CREDENTIALS);
    }

    #[tokio::test]
    async fn test_login_requires_credentials() {
        let auth = service();
        let result = auth
            .login(LoginRequest {
                email: Some("ann@x.com".into()),
                password: None,
            })
            .await;
        assert_matches!(
            result,
            Err(BackendError::ValidationError { message }) if message == CREDENTIALS_REQUIRED
        );
    }

    #[tokio::test]
    async fn test_refresh_issues_access_token() {
        let auth = service();
        let session = auth
            .register(register_request("Ann", "ann@x.com", "secret123"))
            .await
            .unwrap();

        let (access_token, user) = auth.refresh(Some(session.refresh_token)).await.unwrap();
        assert_eq!(user, session.user);
        assert_eq!(auth.identify(&access_token).await.unwrap().id, user.id);
    }

    #[tokio::test]
    async fn test_refresh_rejects_missing_or_bad_token() {
        let auth = service();
        assert_matches!(auth.refresh(None).await, Err(BackendError::Unauthorized { .. }));
        assert_matches!(
            auth.refresh(Some("garbage".into())).await,
            Err(BackendError::Unauthorized { .. })
        );
    }

    #[tokio::test]
    async fn test_token_for_unknown_user_is_rejected() {
        let auth = service();
        let token = auth.tokens.issue(Uuid::new_v4(), Duration::from_secs(60)).unwrap();
        assert_matches!(
            auth.identify(&token).await,
            Err(BackendError::Unauthorized { message }) if message == TOKEN_FAILED
        );
    }

    #[tokio::test]
    async fn test_unknown_email_still_runs_bcrypt() {
        let auth = service();
        assert!(auth.dummy_digest.get().is_none());

        let result = auth.login(login_request("nobody@x.com", "secret123")).await;
        assert_matches!(
            result,
            Err(BackendError::Unauthorized { message }) if message == INVALID_CREDENTIALS
        );

        let digest = auth.dummy_digest.get().expect("dummy digest initialised");
        assert!(digest.starts_with("$2b$04$"));
    }
}
