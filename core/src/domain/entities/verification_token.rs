//! Stored email verification token.
//!
//! Only the SHA-256 digest of the token is kept. The plain token exists in
//! the verification link and nowhere else.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Default token lifetime in hours
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationToken {
    /// Hex-encoded SHA-256 of the plain token
    pub token_hash: String,

    /// Address the token was issued for
    pub email: String,

    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl VerificationToken {
    pub fn new(token_hash: String, email: impl Into<String>, ttl_hours: i64) -> Self {
        let issued_at = Utc::now();
        Self {
            token_hash,
            email: email.into(),
            issued_at,
            expires_at: issued_at + Duration::hours(ttl_hours),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Case-insensitive email comparison
    pub fn belongs_to(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }
}
