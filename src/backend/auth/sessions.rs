/**
 * Token Service
 *
 * Issues and verifies the signed, time-limited tokens used for both access
 * and refresh. A token is an HS256 JWT whose payload is
 * `{ "userId": <uuid>, "iat": <secs>, "exp": <secs> }`.
 *
 * The signing secret is owned by the `TokenService` instance. Building a
 * service with a different secret invalidates every token issued by the
 * previous one.
 */

use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User the token was issued to
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    /// Bad signature, malformed token, or expired
    #[error("invalid token")]
    InvalidToken,
    #[error("failed to sign token: {0}")]
    Encoding(#[source] jsonwebtoken::errors::Error),
}

/// Creates and verifies signed tokens with a server-held secret
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService").finish_non_exhaustive()
    }
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        // Only signature and expiry are checked, with no clock leeway.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issue a token for `user_id` that expires after `ttl`
    pub fn issue(&self, user_id: Uuid, ttl: Duration) -> Result<String, TokenError> {
        self.issue_at(user_id, ttl, Utc::now())
    }

    fn issue_at(
        &self,
        user_id: Uuid,
        ttl: Duration,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let iat = issued_at.timestamp().max(0) as u64;
        let claims = Claims {
            user_id,
            iat,
            exp: iat + ttl.as_secs(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Encoding)
    }

    /// Verify signature and expiry and return the payload
    ///
    /// A token is expired from the second named by `exp` onwards.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Token rejected: {}", e);
                TokenError::InvalidToken
            })?;

        // jsonwebtoken still accepts exp == now
        if claims.exp <= now.timestamp().max(0) as u64 {
            tracing::debug!("Token rejected: expired at {}", claims.exp);
            return Err(TokenError::InvalidToken);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const MINUTE: Duration = Duration::from_secs(60);

    #[test]
    fn test_issue_and_verify() {
        let tokens = TokenService::new("test-secret");
        let user_id = Uuid::new_v4();

        let token = tokens.issue(user_id, MINUTE).unwrap();
        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.exp, claims.iat + 60);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let tokens = TokenService::new("test-secret");
        let two_minutes_ago = Utc::now() - chrono::Duration::seconds(120);

        let token = tokens
            .issue_at(Uuid::new_v4(), MINUTE, two_minutes_ago)
            .unwrap();
        assert_matches!(tokens.verify(&token), Err(TokenError::InvalidToken));
    }

    #[test]
    fn test_token_rejected_at_exact_expiry() {
        let tokens = TokenService::new("test-secret");
        let issued_at = Utc::now() - chrono::Duration::seconds(30);
        let token = tokens.issue_at(Uuid::new_v4(), MINUTE, issued_at).unwrap();

        let exp = tokens.verify(&token).unwrap().exp;
        let expiry = DateTime::from_timestamp(exp as i64, 0).unwrap();
        let just_before = expiry - chrono::Duration::seconds(1);

        assert!(tokens.verify_at(&token, just_before).is_ok());
        assert_matches!(tokens.verify_at(&token, expiry), Err(TokenError::InvalidToken));
    }

    #[test]
    fn test_token_issued_one_ttl_ago_is_rejected() {
        let tokens = TokenService::new("test-secret");
        let issued_at = Utc::now() - chrono::Duration::seconds(60);
        let token = tokens.issue_at(Uuid::new_v4(), MINUTE, issued_at).unwrap();

        assert_matches!(tokens.verify(&token), Err(TokenError::InvalidToken));
    }

    #[test]
    fn test_token_valid_until_ttl_elapses() {
        let tokens = TokenService::new("test-secret");
        let thirty_seconds_ago = Utc::now() - chrono::Duration::seconds(30);

        let token = tokens
            .issue_at(Uuid::new_v4(), MINUTE, thirty_seconds_ago)
            .unwrap();
        assert!(tokens.verify(&token).is_ok());
    }

    #[test]
    fn test_other_secret_is_rejected() {
        let issuer = TokenService::new("first-secret");
        let verifier = TokenService::new("rotated-secret");

        let token = issuer.issue(Uuid::new_v4(), MINUTE).unwrap();
        assert_matches!(verifier.verify(&token), Err(TokenError::InvalidToken));
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        let tokens = TokenService::new("test-secret");
        assert_matches!(tokens.verify("invalid.token.here"), Err(TokenError::InvalidToken));
        assert_matches!(tokens.verify(""), Err(TokenError::InvalidToken));
    }

    #[test]
    fn test_payload_uses_user_id_claim() {
        let tokens = TokenService::new("test-secret");
        let user_id = Uuid::new_v4();
        let token = tokens.issue(user_id, MINUTE).unwrap();

        let payload = token.split('.').nth(1).unwrap();
        let claims = tokens.verify(&token).unwrap();
        let json = serde_json::to_value(&claims).unwrap();

        assert!(!payload.is_empty());
        assert_eq!(json["userId"], user_id.to_string());
    }
}
