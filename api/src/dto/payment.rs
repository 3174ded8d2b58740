use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use validator::Validate;

use hd_core::errors::ValidationError;
use hd_core::services::PaymentRequest;

/// Checkout request as sent by the order page
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    /// Price, integer or decimal; must not be negative. Kept raw so that a
    /// non-number is reported as an invalid amount.
    #[serde(default = "default_amount")]
    pub amount: Value,

    #[serde(default)]
    pub plan_name: Option<String>,

    #[serde(default = "default_quantity")]
    #[validate(range(min = 1))]
    pub quantity: i64,

    /// Billing period, string or number
    #[serde(default = "default_period")]
    pub period: Value,
}

fn default_amount() -> Value {
    Value::Number(Number::from(0))
}

fn default_quantity() -> i64 {
    1
}

fn default_period() -> Value {
    Value::String(String::from("1"))
}

impl Default for CreatePaymentRequest {
    fn default() -> Self {
        Self {
            amount: default_amount(),
            plan_name: None,
            quantity: default_quantity(),
            period: default_period(),
        }
    }
}

impl TryFrom<CreatePaymentRequest> for PaymentRequest {
    type Error = ValidationError;

    fn try_from(request: CreatePaymentRequest) -> Result<Self, Self::Error> {
        request
            .validate()
            .map_err(|_| ValidationError::InvalidQuantity)?;
        let quantity = u32::try_from(request.quantity).map_err(|_| ValidationError::InvalidQuantity)?;
        let amount = match request.amount {
            Value::Number(amount) => amount,
            _ => return Err(ValidationError::InvalidAmount),
        };

        Ok(PaymentRequest {
            amount,
            plan_name: request.plan_name.unwrap_or_default(),
            quantity,
            period: request.period,
        })
    }
}
