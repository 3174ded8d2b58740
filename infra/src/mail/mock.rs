//! Mock mail relay for development and testing

use async_trait::async_trait;
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tracing::info;

use hd_core::errors::MailError;
use hd_core::services::mail::{DeliveryReceipt, MailRelay, OutgoingMail};
use hd_shared::masking::mask_email;

/// Sender reported when none is configured
pub const DEFAULT_MOCK_SENDER: &str = "noreply@hostdesk.local";

/// Messages kept in memory; older ones are dropped first
pub const MAX_RECORDED_MESSAGES: usize = 100;

/// Failure the mock relay should simulate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    /// The relay rejects the credentials (SMTP 535)
    AuthRejected,
    /// The relay cannot be reached
    Unreachable,
}

/// Mock relay that records the most recent messages instead of sending them
pub struct MockMailRelay {
    message_counter: AtomicU64,
    sender: Option<String>,
    simulate_failure: Option<MockFailure>,
    sent: Mutex<VecDeque<OutgoingMail>>,
}

impl MockMailRelay {
    pub fn new() -> Self {
        Self::with_options(Some(String::from(DEFAULT_MOCK_SENDER)), None)
    }

    /// Relay without a sender, reported as unconfigured
    pub fn unconfigured() -> Self {
        Self::with_options(None, None)
    }

    /// Relay that fails every send
    pub fn failing(failure: MockFailure) -> Self {
        Self::with_options(Some(String::from(DEFAULT_MOCK_SENDER)), Some(failure))
    }

    pub fn with_options(sender: Option<String>, simulate_failure: Option<MockFailure>) -> Self {
        Self {
            message_counter: AtomicU64::new(0),
            sender,
            simulate_failure,
            sent: Mutex::new(VecDeque::new()),
        }
    }

    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Recorded messages, oldest first
    pub fn sent_messages(&self) -> Vec<OutgoingMail> {
        self.sent
            .lock()
            .map(|sent| sent.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().map(|sent| sent.len()).unwrap_or(0)
    }

    /// Most recent message sent to `to`
    pub fn last_sent_to(&self, to: &str) -> Option<OutgoingMail> {
        self.sent_messages()
            .into_iter()
            .rev()
            .find(|m| m.to.eq_ignore_ascii_case(to))
    }
}

impl Default for MockMailRelay {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailRelay for MockMailRelay {
    async fn send(&self, mail: &OutgoingMail) -> Result<DeliveryReceipt, MailError> {
        if self.sender.is_none() {
            return Err(MailError::NotConfigured);
        }

        match self.simulate_failure {
            Some(MockFailure::AuthRejected) => {
                return Err(MailError::Authentication {
                    reason: String::from("535 5.7.8 Username and Password not accepted"),
                });
            }
            Some(MockFailure::Unreachable) => {
                return Err(MailError::Delivery {
                    reason: String::from("Connection refused"),
                });
            }
            None => {}
        }

        let count = self.message_counter.fetch_add(1, Ordering::SeqCst) + 1;
        let message_id = format!("mock-mail-{}", count);

        info!(
            to = %mask_email(&mail.to),
            subject = %mail.subject,
            message_id = %message_id,
            html = mail.html_body.is_some(),
            "Mock mail relay accepted message"
        );

        if let Ok(mut sent) = self.sent.lock() {
            if sent.len() == MAX_RECORDED_MESSAGES {
                sent.pop_front();
            }
            sent.push_back(mail.clone());
        }

        Ok(DeliveryReceipt {
            message_id,
            provider: String::from("Mock"),
            accepted_at: Utc::now(),
        })
    }

    fn sender(&self) -> Option<&str> {
        self.sender.as_deref()
    }

    fn is_configured(&self) -> bool {
        self.sender.is_some()
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
