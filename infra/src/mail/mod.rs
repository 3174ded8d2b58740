//! Mail Relay Module
//!
//! This module provides mail relay implementations for verification and
//! test messages.
//!
//! ## Features
//!
//! - **SMTP relay**: authenticated STARTTLS session with a bounded timeout
//! - **Mock relay**: records messages for development and tests
//! - **Security**: recipient masking in logs, passwords never logged

use std::sync::Arc;

use hd_core::services::mail::MailRelay;
use hd_shared::config::{MailProvider, SmtpConfig};

pub mod mock;
pub mod smtp;

pub use mock::{MockFailure, MockMailRelay};
pub use smtp::SmtpMailRelay;

#[cfg(test)]
mod tests;

/// Create a mail relay based on configuration
///
/// An SMTP relay that cannot be initialised falls back to an unconfigured
/// mock relay, so requests report `email_sent: false` instead of failing.
pub fn create_mail_relay(config: &SmtpConfig) -> Arc<dyn MailRelay> {
    match config.provider {
        MailProvider::Mock => {
            let sender = config
                .email
                .clone()
                .unwrap_or_else(|| String::from(mock::DEFAULT_MOCK_SENDER));
            tracing::info!(sender = %sender, "Using mock mail relay");
            Arc::new(MockMailRelay::new().with_sender(sender))
        }
        MailProvider::Smtp => match SmtpMailRelay::new(config) {
            Ok(relay) => {
                if !relay.is_configured() {
                    tracing::warn!(
                        host = %config.host,
                        "SMTP credentials not set, mail sending is disabled"
                    );
                }
                Arc::new(relay)
            }
            Err(e) => {
                tracing::error!(host = %config.host, error = %e, "Failed to initialize SMTP relay");
                tracing::warn!("Falling back to unconfigured mock mail relay");
                Arc::new(MockMailRelay::unconfigured())
            }
        },
    }
}
