//! Email verification token policy

use serde::{Deserialize, Serialize};

/// Verification configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Hours a freshly issued token stays valid
    pub token_ttl_hours: i64,

    /// Reject tokens the store has never seen. When false, unknown tokens
    /// that pass the format rules are accepted.
    pub require_issued_token: bool,

    /// Site path the verification link points at
    pub verify_path: String,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            token_ttl_hours: 24,
            require_issued_token: false,
            verify_path: String::from("/verify-email"),
        }
    }
}

impl VerificationConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            token_ttl_hours: super::env_or("VERIFICATION_TOKEN_TTL_HOURS", defaults.token_ttl_hours)
                .max(1),
            require_issued_token: super::env_flag(
                "VERIFICATION_REQUIRE_ISSUED_TOKEN",
                defaults.require_issued_token,
            ),
            verify_path: super::env_opt("VERIFICATION_PATH").unwrap_or(defaults.verify_path),
        }
    }

    /// Strict mode: only tokens previously issued by this service verify
    pub fn strict() -> Self {
        Self {
            require_issued_token: true,
            ..Default::default()
        }
    }
}
