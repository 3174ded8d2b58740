//! `/email-verify` - confirm a verification link or request a new one
//!
//! - `GET ?token=&email=` confirms the address
//! - `POST {email, name}` issues a new token and mails the link

use actix_web::http::StatusCode;

use hd_core::errors::ValidationError;
use hd_core::repositories::{UserDirectory, VerificationTokenStore};
use hd_core::services::validation::validate_email;
use hd_shared::FunctionResponse;

use crate::dto::{DebugBlock, VerificationRequest, VerificationRequestResponse, VerificationResponse};
use crate::event::{response, NormalizedRequest};
use crate::handlers::error::ApiError;

use super::AppState;

pub const EMAIL_VERIFIED: &str = "Email успешно подтвержден";
pub const VERIFICATION_SENT: &str = "Письмо с подтверждением отправлено";

pub async fn handle<D, T>(
    state: &AppState<D, T>,
    request: &NormalizedRequest,
) -> Result<FunctionResponse, ApiError>
where
    D: UserDirectory,
    T: VerificationTokenStore,
{
    if request.method == "POST" {
        request_verification(state, request).await
    } else {
        confirm(state, request).await
    }
}

/// Confirm `token` for `email`
///
/// # Response
/// ```json
/// {
///   "success": true,
///   "message": "Email успешно подтвержден",
///   "email": "new@example.com",
///   "verified_at": "2024-01-01T00:00:00Z"
/// }
/// ```
async fn confirm<D, T>(
    state: &AppState<D, T>,
    request: &NormalizedRequest,
) -> Result<FunctionResponse, ApiError>
where
    D: UserDirectory,
    T: VerificationTokenStore,
{
    let token = request.query_param("token").unwrap_or("");
    let email = request.query_param("email").unwrap_or("");

    let confirmation = state.verification.confirm(token, email).await?;

    Ok(response::json(
        StatusCode::OK,
        &VerificationResponse {
            success: true,
            message: EMAIL_VERIFIED.to_string(),
            email: confirmation.email,
            verified_at: confirmation.verified_at,
        },
    ))
}

/// Issue a token and mail the link; mail failure is reported in the body
async fn request_verification<D, T>(
    state: &AppState<D, T>,
    request: &NormalizedRequest,
) -> Result<FunctionResponse, ApiError>
where
    D: UserDirectory,
    T: VerificationTokenStore,
{
    let body: VerificationRequest = request.parse_body()?;
    let email = body.email.as_deref().map(str::trim).unwrap_or("");
    let name = body.name.as_deref().map(str::trim).unwrap_or("");
    if email.is_empty() || name.is_empty() {
        return Err(ValidationError::EmailAndNameRequired.into());
    }
    let email = validate_email(email)?;

    let dispatch = state.verification.send_verification(&email, name).await?;
    let debug = state
        .config
        .exposes_debug_links()
        .then(|| DebugBlock::from(&dispatch.issued));

    Ok(response::json(
        StatusCode::OK,
        &VerificationRequestResponse {
            success: true,
            message: VERIFICATION_SENT.to_string(),
            mail: dispatch.outcome,
            debug,
        },
    ))
}
