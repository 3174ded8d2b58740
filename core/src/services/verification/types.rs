//! Types for verification service results

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::services::mail::MailOutcome;

/// A freshly issued token and the link embedding it
#[derive(Debug, Clone)]
pub struct IssuedVerification {
    /// Plain token, shown only in the link (and the debug block)
    pub token: String,
    pub link: String,
    pub expires_at: DateTime<Utc>,
}

/// Result of issuing a token and mailing the link
#[derive(Debug, Clone)]
pub struct VerificationDispatch {
    pub issued: IssuedVerification,
    pub outcome: MailOutcome,
}

/// Result of a successful confirmation
#[derive(Debug, Clone, Serialize)]
pub struct VerificationConfirmation {
    pub email: String,
    pub verified_at: DateTime<Utc>,
}
