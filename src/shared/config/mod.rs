//! Application configuration module
//!
//! `AppConfig` is constructed once at startup, either through the builder or
//! from environment variables, and then injected into the server state. The
//! JWT signing secret lives here instead of being read ad hoc by the token
//! code, so tests can run with a secret of their own.

use std::time::Duration;

use thiserror::Error;

/// Default lifetime of an access token
pub const DEFAULT_ACCESS_TOKEN_TTL: Duration = Duration::from_secs(60);

/// Default lifetime of a refresh token (30 days)
pub const DEFAULT_REFRESH_TOKEN_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Default listening port
pub const DEFAULT_PORT: u16 = 8000;

const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// Browsers send `Origin` without a trailing slash
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:4200",
    "https://ideadrop-ui-blush.vercel.app",
];

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Secret used to sign and verify every token
    pub jwt_secret: String,
    /// PostgreSQL connection string; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// Port the server binds to
    pub port: u16,
    /// Production mode marks the refresh cookie `Secure`
    pub production: bool,
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Origins allowed to call the API with credentials
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the process environment
    ///
    /// Reads `JWT_SECRET` (required), `DATABASE_URL`, `PORT`, `APP_ENV` or
    /// `NODE_ENV`, `ACCESS_TOKEN_TTL_SECS`, `REFRESH_TOKEN_TTL_SECS`,
    /// `BCRYPT_COST` and `ALLOWED_ORIGINS`. A `.env` file should be loaded
    /// by the caller beforehand.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = AppConfig::builder();

        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(url) = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            builder = builder.database_url(url);
        }
        if let Some(port) = lookup("PORT") {
            builder = builder.port(parse_number("PORT", &port)?);
        }
        let environment = lookup("APP_ENV").or_else(|| lookup("NODE_ENV"));
        builder = builder.production(environment.as_deref() == Some("production"));
        if let Some(secs) = lookup("ACCESS_TOKEN_TTL_SECS") {
            builder = builder.access_token_ttl(Duration::from_secs(parse_number(
                "ACCESS_TOKEN_TTL_SECS",
                &secs,
            )?));
        }
        if let Some(secs) = lookup("REFRESH_TOKEN_TTL_SECS") {
            builder = builder.refresh_token_ttl(Duration::from_secs(parse_number(
                "REFRESH_TOKEN_TTL_SECS",
                &secs,
            )?));
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_number("BCRYPT_COST", &cost)?);
        }
        if let Some(origins) = lookup("ALLOWED_ORIGINS") {
            builder = builder.allowed_origins(
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect(),
            );
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if !BCRYPT_COST_RANGE.contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    jwt_secret: Option<String>,
    database_url: Option<String>,
    port: Option<u16>,
    production: bool,
    access_token_ttl: Option<Duration>,
    refresh_token_ttl: Option<Duration>,
    bcrypt_cost: Option<u32>,
    allowed_origins: Option<Vec<String>>,
}

impl AppConfigBuilder {
    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn production(mut self, production: bool) -> Self {
        self.production = production;
        self
    }

    pub fn access_token_ttl(mut self, ttl: Duration) -> Self {
        self.access_token_ttl = Some(ttl);
        self
    }

    pub fn refresh_token_ttl(mut self, ttl: Duration) -> Self {
        self.refresh_token_ttl = Some(ttl);
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    pub fn allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.allowed_origins = Some(origins);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            database_url: self.database_url,
            port: self.port.unwrap_or(DEFAULT_PORT),
            production: self.production,
            access_token_ttl: self.access_token_ttl.unwrap_or(DEFAULT_ACCESS_TOKEN_TTL),
            refresh_token_ttl: self.refresh_token_ttl.unwrap_or(DEFAULT_REFRESH_TOKEN_TTL),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST),
            allowed_origins: self.allowed_origins.unwrap_or_else(|| {
                DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect()
            }),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}
