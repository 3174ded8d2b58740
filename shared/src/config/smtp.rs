//! Mail relay configuration
//!
//! Credentials come from `SMTP_EMAIL` / `SMTP_PASSWORD`. Both are absent by
//! default, in which case mail sending is disabled and reported as such
//! instead of failing requests.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which relay implementation to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Authenticated STARTTLS relay
    #[default]
    Smtp,
    /// In-process relay that records messages (development and tests)
    Mock,
}

impl std::str::FromStr for MailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "smtp" => Ok(MailProvider::Smtp),
            "mock" => Ok(MailProvider::Mock),
            _ => Err(format!("Invalid mail provider: {}", s)),
        }
    }
}

/// SMTP relay configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct SmtpConfig {
    /// Relay implementation
    #[serde(default)]
    pub provider: MailProvider,

    /// Relay host
    pub host: String,

    /// Relay submission port (STARTTLS)
    pub port: u16,

    /// Sender address, also the login name
    #[serde(default)]
    pub email: Option<String>,

    /// Relay password
    #[serde(default, skip_serializing)]
    pub password: Option<String>,

    /// Display name in the From header
    pub sender_name: String,

    /// Upper bound for one delivery attempt, in seconds
    pub timeout_secs: u64,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            provider: MailProvider::Smtp,
            host: String::from("smtp.gmail.com"),
            port: 587,
            email: None,
            password: None,
            sender_name: String::from("HostDesk"),
            timeout_secs: 10,
        }
    }
}

impl SmtpConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: super::env_or("MAIL_PROVIDER", defaults.provider),
            host: super::env_opt("SMTP_HOST").unwrap_or(defaults.host),
            port: super::env_or("SMTP_PORT", defaults.port),
            email: super::env_opt("SMTP_EMAIL"),
            password: super::env_opt("SMTP_PASSWORD"),
            sender_name: super::env_opt("SMTP_SENDER_NAME").unwrap_or(defaults.sender_name),
            timeout_secs: super::env_or("SMTP_TIMEOUT_SECS", defaults.timeout_secs),
        }
    }

    /// Builder-style credentials setter
    pub fn with_credentials(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self.password = Some(password.into());
        self
    }

    /// Both halves of the credential pair are present
    pub fn is_configured(&self) -> bool {
        self.email.is_some() && self.password.is_some()
    }

    /// Credential pair, when complete
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.email, &self.password) {
            (Some(email), Some(password)) => Some((email.as_str(), password.as_str())),
            _ => None,
        }
    }

    pub fn has_password(&self) -> bool {
        self.password.is_some()
    }
}

// Never print the password.
impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("provider", &self.provider)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "********"))
            .field("sender_name", &self.sender_name)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
