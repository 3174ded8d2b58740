//! `/payment` - hosted checkout sessions
//!
//! - `POST {amount, planName, quantity, period}` creates a pending session
//! - `GET ?payment_id=` reports the session status

use actix_web::http::StatusCode;

use hd_core::repositories::{UserDirectory, VerificationTokenStore};
use hd_core::services::PaymentRequest;
use hd_shared::FunctionResponse;

use crate::dto::CreatePaymentRequest;
use crate::event::{response, NormalizedRequest};
use crate::handlers::error::ApiError;

use super::AppState;

/// # Response (POST)
/// ```json
/// {
///   "payment_id": "0b6e...",
///   "amount": 1999,
///   "plan_name": "Pro",
///   "quantity": 1,
///   "period": "1",
///   "status": "pending",
///   "created_at": "2024-01-01T00:00:00Z",
///   "payment_url": "https://payment-gateway.example.com/pay/0b6e...",
///   "redirect_url": "http://localhost:8080/payment/success?id=0b6e..."
/// }
/// ```
pub async fn handle<D, T>(
    state: &AppState<D, T>,
    request: &NormalizedRequest,
) -> Result<FunctionResponse, ApiError>
where
    D: UserDirectory,
    T: VerificationTokenStore,
{
    if request.method == "POST" {
        let body: CreatePaymentRequest = request.parse_body()?;
        let session = state.payments.create_session(PaymentRequest::try_from(body)?)?;
        return Ok(response::json(StatusCode::OK, &session));
    }

    let payment_id = request.query_param("payment_id").unwrap_or("");
    let record = state.payments.status(payment_id)?;
    Ok(response::json(StatusCode::OK, &record))
}
