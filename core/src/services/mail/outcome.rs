//! Non-fatal delivery for flows that must succeed even when mail fails

use serde::Serialize;

use hd_shared::masking::mask_email;

use crate::errors::MailError;

use super::relay::{MailRelay, OutgoingMail};

/// `email_sent` / `email_error` as reported in responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailOutcome {
    pub email_sent: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_error: Option<String>,
}

impl MailOutcome {
    pub fn sent() -> Self {
        Self {
            email_sent: true,
            email_error: None,
        }
    }

    pub fn failed(error: &MailError) -> Self {
        Self {
            email_sent: false,
            email_error: Some(error.to_string()),
        }
    }
}

/// Attempt one delivery and fold any failure into the outcome
pub async fn deliver_best_effort(relay: &dyn MailRelay, mail: &OutgoingMail) -> MailOutcome {
    if !relay.is_configured() {
        tracing::warn!(
            provider = relay.provider_name(),
            to = %mask_email(&mail.to),
            "Mail relay not configured, skipping delivery"
        );
        return MailOutcome::failed(&MailError::NotConfigured);
    }

    match relay.send(mail).await {
        Ok(receipt) => {
            tracing::info!(
                provider = %receipt.provider,
                message_id = %receipt.message_id,
                to = %mask_email(&mail.to),
                "Mail delivered to relay"
            );
            MailOutcome::sent()
        }
        Err(error) => {
            tracing::warn!(
                provider = relay.provider_name(),
                to = %mask_email(&mail.to),
                error = %error,
                auth_failure = error.is_authentication(),
                "Mail delivery failed, continuing without email"
            );
            MailOutcome::failed(&error)
        }
    }
}
