//! Public URLs embedded in generated links

use serde::{Deserialize, Serialize};

/// Site configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Base URL of the public website (verification and payment redirects land here)
    pub base_url: String,

    /// Base URL of the payment gateway checkout pages
    pub payment_gateway_url: String,

    /// Product name used in outgoing mail
    pub name: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:8080"),
            payment_gateway_url: String::from("https://payment-gateway.example.com"),
            name: String::from("HostDesk"),
        }
    }
}

impl SiteConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: super::env_opt("SITE_BASE_URL").unwrap_or(defaults.base_url),
            payment_gateway_url: super::env_opt("PAYMENT_GATEWAY_URL")
                .unwrap_or(defaults.payment_gateway_url),
            name: super::env_opt("SITE_NAME").unwrap_or(defaults.name),
        }
    }

    /// Base URL without a trailing slash
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Gateway URL without a trailing slash
    pub fn payment_gateway_url_trimmed(&self) -> &str {
        self.payment_gateway_url.trim_end_matches('/')
    }
}
