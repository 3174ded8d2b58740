use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hd_core::services::{IssuedVerification, MailOutcome};

/// Link and token echoed back for manual testing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugBlock {
    pub verification_link: String,
    pub verification_token: String,
}

impl From<&IssuedVerification> for DebugBlock {
    fn from(issued: &IssuedVerification) -> Self {
        Self {
            verification_link: issued.link.clone(),
            verification_token: issued.token.clone(),
        }
    }
}

/// Successful confirmation
#[derive(Debug, Clone, Serialize)]
pub struct VerificationResponse {
    pub success: bool,
    pub message: String,
    pub email: String,
    pub verified_at: DateTime<Utc>,
}

/// Request for a new verification mail
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerificationRequest {
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerificationRequestResponse {
    pub success: bool,
    pub message: String,

    #[serde(flatten)]
    pub mail: MailOutcome,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<DebugBlock>,
}
