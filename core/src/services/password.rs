//! Password hashing with bcrypt
//!
//! bcrypt reads at most 72 bytes of its input, so passwords are first
//! reduced to a hex SHA-256 digest (64 bytes) and the digest is what gets
//! hashed. Every byte of the password then takes part in the comparison.
//!
//! bcrypt is CPU-bound, so both hashing and verification run on the
//! blocking thread pool.

use sha2::{Digest, Sha256};

use crate::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a password with a fresh salt
    pub async fn hash(&self, password: &str) -> DomainResult<String> {
        let digest = prehash(password);
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(digest, cost))
            .await
            .map_err(|e| DomainError::internal(format!("password hashing task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("password hashing failed: {}", e)))
    }

    /// Check a password against a stored hash. Malformed hashes never match.
    pub async fn verify(&self, password: &str, hash: &str) -> DomainResult<bool> {
        let digest = prehash(password);
        let hash = hash.to_owned();
        let verified = tokio::task::spawn_blocking(move || bcrypt::verify(digest, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("password verification task failed: {}", e)))?;

        match verified {
            Ok(matches) => Ok(matches),
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash could not be parsed");
                Ok(false)
            }
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

fn prehash(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
