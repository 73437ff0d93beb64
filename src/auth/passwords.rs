//! Password hashing and verification
//!
//! Wraps bcrypt with a cost factor injected at construction. Hashing runs on
//! the blocking thread pool so the CPU-bound work does not stall the async
//! workers. The digest is self-describing (salt and cost embedded), so
//! verification needs no side channel.

use thiserror::Error;

/// Errors from the hashing path. Verification never surfaces errors; a
/// digest that cannot be parsed simply fails to verify.
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error(transparent)]
    Hash(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// One-way salted password hasher.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password with a fresh random salt.
    pub async fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        let cost = self.cost;
        let plaintext = plaintext.to_string();

        let digest =
            tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost)).await??;

        Ok(digest)
    }

    /// Verify a plaintext password against a stored digest.
    ///
    /// bcrypt recomputes using the salt and cost embedded in the digest and
    /// compares in constant time. A malformed digest (e.g. corrupted
    /// storage) returns `false`, never an error.
    pub async fn verify(&self, plaintext: &str, digest: &str) -> bool {
        let plaintext = plaintext.to_string();
        let digest = digest.to_string();

        let result =
            tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &digest)).await;

        matches!(result, Ok(Ok(true)))
    }
}
