//! Payment session entities. Sessions exist only in the response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Payment lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
}

/// A freshly created checkout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSession {
    pub payment_id: String,

    /// Amount passed through as sent (integer or decimal)
    pub amount: Number,

    pub plan_name: String,
    pub quantity: u32,

    /// Billing period passed through as sent (string or number)
    pub period: Value,

    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub payment_url: String,
    pub redirect_url: String,
}

/// Result of a status lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentStatusRecord {
    pub payment_id: String,
    pub status: PaymentStatus,
    pub amount: Number,
    pub plan_name: String,
    pub confirmed_at: DateTime<Utc>,
}
