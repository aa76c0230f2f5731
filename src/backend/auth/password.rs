//! Password hashing, delegated to bcrypt.
//!
//! bcrypt is CPU-bound, so both operations run on tokio's blocking pool.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt failed: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// bcrypt with a configured work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Salted hash of `password`
    pub async fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let password = password.to_owned();
        let cost = self.cost;
        let digest = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
        Ok(digest)
    }

    /// Check `password` against a stored digest
    ///
    /// A digest that is not valid bcrypt counts as a mismatch rather than
    /// an error, so a corrupt row cannot be told apart from a wrong password.
    pub async fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordError> {
        let password = password.to_owned();
        let digest = digest.to_owned();
        let matched = tokio::task::spawn_blocking(move || bcrypt::verify(password, &digest)).await?;
        match matched {
            Ok(matched) => Ok(matched),
            Err(e) => {
                tracing::warn!("Stored password hash could not be parsed: {}", e);
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hasher = PasswordHasher::new(4);
        let digest = hasher.hash("secret123").await.unwrap();

        assert_ne!(digest, "secret123");
        assert!(hasher.verify("secret123", &digest).await.unwrap());
        assert!(!hasher.verify("wrong", &digest).await.unwrap());
    }

    #[tokio::test]
    async fn test_hashes_are_salted() {
        let hasher = PasswordHasher::new(4);
        let a = hasher.hash("secret123").await.unwrap();
        let b = hasher.hash("secret123").await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_garbage_digest_is_mismatch() {
        let hasher = PasswordHasher::new(4);
        assert!(!hasher.verify("secret123", "not-a-bcrypt-hash").await.unwrap());
    }
}
