//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - Password hashing configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration
//! - `site` - Public URLs used in generated links
//! - `smtp` - Mail relay credentials and connection settings
//! - `verification` - Email verification token policy

pub mod auth;
pub mod environment;
pub mod server;
pub mod site;
pub mod smtp;
pub mod verification;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

// Re-export commonly used types
pub use auth::AuthConfig;
pub use environment::{Environment, LoggingConfig};
pub use server::ServerConfig;
pub use site::SiteConfig;
pub use smtp::{MailProvider, SmtpConfig};
pub use verification::VerificationConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Password hashing configuration
    pub auth: AuthConfig,

    /// Mail relay configuration
    pub smtp: SmtpConfig,

    /// Public site URLs
    pub site: SiteConfig,

    /// Verification token policy
    pub verification: VerificationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            auth: AuthConfig::default(),
            smtp: SmtpConfig::default(),
            site: SiteConfig::default(),
            verification: VerificationConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            auth: AuthConfig::from_env(),
            smtp: SmtpConfig::from_env(),
            site: SiteConfig::from_env(),
            verification: VerificationConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }

    /// Whether responses may carry the debug block with raw verification links
    pub fn exposes_debug_links(&self) -> bool {
        self.environment.is_debug()
    }
}

/// Read an environment variable and parse it, falling back to `default`
/// when the variable is missing or unparsable.
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Read a non-empty environment variable.
pub(crate) fn env_opt(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Read a boolean flag (`1`, `true`, `yes`, `on`).
pub(crate) fn env_flag(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        Err(_) => default,
    }
}
