//! Password hashing configuration

use serde::{Deserialize, Serialize};

/// bcrypt's default work factor
pub const DEFAULT_PASSWORD_HASH_COST: u32 = 12;

/// Lowest work factor bcrypt accepts
pub const MIN_PASSWORD_HASH_COST: u32 = 4;

/// Authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// bcrypt work factor used for stored passwords
    pub password_hash_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password_hash_cost: DEFAULT_PASSWORD_HASH_COST,
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let cost = super::env_or("PASSWORD_HASH_COST", DEFAULT_PASSWORD_HASH_COST);
        Self {
            password_hash_cost: cost.clamp(MIN_PASSWORD_HASH_COST, 31),
        }
    }

    /// Cheapest hashing, for tests
    pub fn fast() -> Self {
        Self {
            password_hash_cost: MIN_PASSWORD_HASH_COST,
        }
    }
}
