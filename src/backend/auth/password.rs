/**
 * Password Hashing
 *
 * The auth service hashes and verifies passwords through the
 * `CredentialHasher` trait, so tests can run with a cheap bcrypt cost and
 * other schemes can be plugged in without touching the service.
 */

use thiserror::Error;

/// Hashing or verification failed for a reason other than a wrong password
#[derive(Debug, Error)]
#[error("credential hashing failed: {0}")]
pub struct HashError(String);

/// One-way password transformation used for storage and verification
pub trait CredentialHasher: Send + Sync {
    /// Hash a plaintext password
    fn hash(&self, password: &str) -> Result<String, HashError>;

    /// Check a plaintext password against a stored hash
    ///
    /// Returns `Ok(false)` for a wrong password.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}

/// bcrypt credential hasher
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl BcryptHasher {
    /// Create a hasher with an explicit work factor (4..=31)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl CredentialHasher for BcryptHasher {
    fn hash(&self, password: &str) -> Result<String, HashError> {
        bcrypt::hash(password, self.cost).map_err(|e| HashError(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        bcrypt::verify(password, hash).map_err(|e| HashError(e.to_string()))
    }
}
