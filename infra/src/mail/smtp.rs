//! SMTP Mail Relay Implementation
//!
//! Delivers messages through an authenticated STARTTLS session (port 587 by
//! default). One call is one attempt, bounded by the configured timeout.

use async_trait::async_trait;
use chrono::Utc;
use lettre::message::{header::ContentType, Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;
use tracing::{debug, error, info};

use hd_core::errors::MailError;
use hd_core::services::mail::{DeliveryReceipt, MailRelay, OutgoingMail};
use hd_shared::config::SmtpConfig;
use hd_shared::masking::mask_email;

use crate::InfrastructureError;

const PROVIDER_NAME: &str = "SMTP";

/// SMTP relay over STARTTLS
pub struct SmtpMailRelay {
    /// Built only when credentials are present
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    sender: Option<Mailbox>,
    sender_email: Option<String>,
    host: String,
    timeout: Duration,
}

impl SmtpMailRelay {
    /// Create a relay from configuration
    ///
    /// Missing credentials are not an error: the relay is created in an
    /// unconfigured state and every send reports `MailError::NotConfigured`.
    pub fn new(config: &SmtpConfig) -> Result<Self, InfrastructureError> {
        let timeout = Duration::from_secs(config.timeout_secs.max(1));

        let (transport, sender) = match config.credentials() {
            Some((email, password)) => {
                let address = email.parse()?;
                let sender = Mailbox::new(Some(config.sender_name.clone()), address);
                let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
                    .port(config.port)
                    .credentials(Credentials::new(email.to_string(), password.to_string()))
                    .timeout(Some(timeout))
                    .build();

                info!(
                    host = %config.host,
                    port = config.port,
                    sender = %mask_email(email),
                    "SMTP relay initialized"
                );
                (Some(transport), Some(sender))
            }
            None => (None, None),
        };

        Ok(Self {
            transport,
            sender,
            sender_email: config.email.clone(),
            host: config.host.clone(),
            timeout,
        })
    }

    fn build_message(&self, sender: &Mailbox, mail: &OutgoingMail) -> Result<Message, MailError> {
        let recipient: Mailbox = mail.to.parse().map_err(|_| MailError::InvalidAddress {
            address: mail.to.clone(),
        })?;

        let builder = Message::builder()
            .from(sender.clone())
            .to(recipient)
            .subject(mail.subject.clone());

        let message = match &mail.html_body {
            Some(html) => builder.multipart(MultiPart::alternative_plain_html(
                mail.text_body.clone(),
                html.clone(),
            )),
            None => builder
                .header(ContentType::TEXT_PLAIN)
                .body(mail.text_body.clone()),
        };

        message.map_err(|e| MailError::Delivery {
            reason: e.to_string(),
        })
    }
}

/// Map a transport error onto the domain error, separating rejected
/// credentials (SMTP 530/534/535) from everything else.
fn classify(error: lettre::transport::smtp::Error) -> MailError {
    let is_auth = error
        .status()
        .map(|code| code.to_string().starts_with("53"))
        .unwrap_or(false);

    if is_auth {
        MailError::Authentication {
            reason: error.to_string(),
        }
    } else {
        MailError::Delivery {
            reason: error.to_string(),
        }
    }
}

#[async_trait]
impl MailRelay for SmtpMailRelay {
    async fn send(&self, mail: &OutgoingMail) -> Result<DeliveryReceipt, MailError> {
        let (transport, sender) = match (&self.transport, &self.sender) {
            (Some(transport), Some(sender)) => (transport, sender),
            _ => return Err(MailError::NotConfigured),
        };

        let message = self.build_message(sender, mail)?;
        debug!(
            host = %self.host,
            to = %mask_email(&mail.to),
            subject = %mail.subject,
            "Sending mail via SMTP relay"
        );

        let response = match tokio::time::timeout(self.timeout, transport.send(message)).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                let error = classify(e);
                error!(host = %self.host, to = %mask_email(&mail.to), error = %error, "SMTP delivery failed");
                return Err(error);
            }
            Err(_) => {
                error!(
                    host = %self.host,
                    timeout_secs = self.timeout.as_secs(),
                    "SMTP delivery timed out"
                );
                return Err(MailError::Timeout {
                    seconds: self.timeout.as_secs(),
                });
            }
        };

        let message_id = response
            .message()
            .next()
            .map(str::to_string)
            .unwrap_or_else(|| response.code().to_string());

        Ok(DeliveryReceipt {
            message_id,
            provider: PROVIDER_NAME.to_string(),
            accepted_at: Utc::now(),
        })
    }

    fn sender(&self) -> Option<&str> {
        self.sender_email.as_deref()
    }

    fn is_configured(&self) -> bool {
        self.transport.is_some()
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }
}
