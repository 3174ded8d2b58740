//! Mail relay trait and message types

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::MailError;

/// A composed message ready for the relay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    /// Recipient address
    pub to: String,
    pub subject: String,
    /// Plain-text body, always present
    pub text_body: String,
    /// Optional HTML alternative
    pub html_body: Option<String>,
}

impl OutgoingMail {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, text_body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            text_body: text_body.into(),
            html_body: None,
        }
    }

    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html_body = Some(html.into());
        self
    }
}

/// What the relay reported for an accepted message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// Relay-assigned identifier or status line
    pub message_id: String,
    /// Name of the relay that accepted the message
    pub provider: String,
    pub accepted_at: DateTime<Utc>,
}

/// Trait for mail relay integration
///
/// One call is one delivery attempt. Implementations bound the attempt with
/// a timeout and never retry.
#[async_trait]
pub trait MailRelay: Send + Sync {
    /// Deliver a single message
    async fn send(&self, mail: &OutgoingMail) -> Result<DeliveryReceipt, MailError>;

    /// Sender address, if configured
    fn sender(&self) -> Option<&str>;

    /// Whether credentials are present
    fn is_configured(&self) -> bool;

    /// Relay name for logs and receipts
    fn provider_name(&self) -> &str;
}
