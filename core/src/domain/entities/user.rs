//! Directory user entity: an account known to the user directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user record held by a [`UserDirectory`](crate::repositories::UserDirectory)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    /// Numeric identifier assigned by the directory
    pub id: i64,

    /// Email address, stored as entered
    pub email: Option<String>,

    /// Login name, stored as entered
    pub username: Option<String>,

    /// Display name
    pub name: String,

    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Whether the email address has been confirmed
    pub email_verified: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub verified_at: Option<DateTime<Utc>>,
}

impl DirectoryUser {
    /// Creates a new, unverified user. The directory assigns the final id.
    pub fn new(
        email: Option<String>,
        username: Option<String>,
        name: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            email,
            username,
            name: name.into(),
            password_hash: password_hash.into(),
            email_verified: false,
            created_at: now,
            updated_at: now,
            verified_at: None,
        }
    }

    /// Case-insensitive match against the email or the username
    pub fn matches_identifier(&self, identifier: &str) -> bool {
        let matches = |value: &Option<String>| {
            value
                .as_deref()
                .map(|v| v.eq_ignore_ascii_case(identifier))
                .unwrap_or(false)
        };
        matches(&self.email) || matches(&self.username)
    }

    /// Marks the email address as confirmed
    pub fn verify_email(&mut self) {
        let now = Utc::now();
        self.email_verified = true;
        self.verified_at = Some(now);
        self.updated_at = now;
    }

    /// Public view returned to the website
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            email: self.email.clone(),
            username: self.username.clone(),
            name: self.name.clone(),
        }
    }
}

/// The `user` object in login and registration responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    pub name: String,
}
