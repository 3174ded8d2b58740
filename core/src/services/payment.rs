//! Payment sessions against the hosted checkout
//!
//! Sessions are not persisted: creation returns the checkout links and the
//! status lookup reports the fixed completed record the website expects.

use chrono::Utc;
use serde_json::{Number, Value};
use uuid::Uuid;

use hd_shared::config::SiteConfig;

use crate::domain::entities::payment::{PaymentSession, PaymentStatus, PaymentStatusRecord};
use crate::errors::{DomainResult, ValidationError};

/// Amount reported by the status lookup, in minor units of the plan price
pub const STATUS_AMOUNT: u64 = 1999;

/// Plan reported by the status lookup
pub const STATUS_PLAN_NAME: &str = "Pro";

/// Checkout request
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub amount: Number,
    pub plan_name: String,
    pub quantity: u32,
    pub period: Value,
}

impl Default for PaymentRequest {
    fn default() -> Self {
        Self {
            amount: Number::from(0),
            plan_name: String::new(),
            quantity: 1,
            period: Value::String(String::from("1")),
        }
    }
}

pub struct PaymentService {
    site: SiteConfig,
}

impl PaymentService {
    pub fn new(site: SiteConfig) -> Self {
        Self { site }
    }

    /// Create a pending checkout session
    pub fn create_session(&self, request: PaymentRequest) -> DomainResult<PaymentSession> {
        if request.amount.as_f64().map(|a| a < 0.0).unwrap_or(true) {
            return Err(ValidationError::InvalidAmount.into());
        }
        if request.quantity < 1 {
            return Err(ValidationError::InvalidQuantity.into());
        }

        let payment_id = Uuid::new_v4().to_string();
        let session = PaymentSession {
            payment_url: format!("{}/pay/{}", self.site.payment_gateway_url_trimmed(), payment_id),
            redirect_url: format!(
                "{}/payment/success?id={}",
                self.site.base_url_trimmed(),
                payment_id
            ),
            payment_id,
            amount: request.amount,
            plan_name: request.plan_name,
            quantity: request.quantity,
            period: request.period,
            status: PaymentStatus::Pending,
            created_at: Utc::now(),
        };

        tracing::info!(
            payment_id = %session.payment_id,
            plan = %session.plan_name,
            amount = %session.amount,
            quantity = session.quantity,
            event = "payment_session_created",
            "Payment session created"
        );
        Ok(session)
    }

    /// Look up a payment by id
    pub fn status(&self, payment_id: &str) -> DomainResult<PaymentStatusRecord> {
        let payment_id = payment_id.trim();
        if payment_id.is_empty() {
            return Err(ValidationError::PaymentIdRequired.into());
        }

        tracing::debug!(payment_id = %payment_id, "Payment status requested");
        Ok(PaymentStatusRecord {
            payment_id: payment_id.to_string(),
            status: PaymentStatus::Completed,
            amount: Number::from(STATUS_AMOUNT),
            plan_name: String::from(STATUS_PLAN_NAME),
            confirmed_at: Utc::now(),
        })
    }
}
