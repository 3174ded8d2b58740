//! `POST /register` - create an account and mail the verification link

use actix_web::http::StatusCode;

use hd_core::repositories::{UserDirectory, VerificationTokenStore};
use hd_core::services::{MailOutcome, RegistrationRequest};
use hd_shared::FunctionResponse;

use crate::dto::{DebugBlock, RegisterRequest, RegisterResponse};
use crate::event::{response, NormalizedRequest};
use crate::handlers::error::ApiError;

use super::AppState;

pub const REGISTRATION_SUCCEEDED: &str = "Регистрация прошла успешно!";

/// Register a new account
///
/// # Request Body
/// ```json
/// {
///   "email": "new@example.com",
///   "username": "newuser",
///   "password": "secret123",
///   "name": "Новый пользователь"
/// }
/// ```
/// Either `email` or `username` is required.
///
/// # Response
/// ```json
/// {
///   "success": true,
///   "message": "Регистрация прошла успешно!",
///   "user": {"id": 4, "email": "new@example.com", "username": "newuser", "name": "Новый пользователь"},
///   "email_sent": false,
///   "email_error": "SMTP настройки не найдены",
///   "debug": {"verification_link": "...", "verification_token": "..."}
/// }
/// ```
///
/// Mail failures never fail the registration. Accounts without an email
/// get no verification mail.
pub async fn handle<D, T>(
    state: &AppState<D, T>,
    request: &NormalizedRequest,
) -> Result<FunctionResponse, ApiError>
where
    D: UserDirectory,
    T: VerificationTokenStore,
{
    let body: RegisterRequest = request.parse_body()?;
    let user = state
        .accounts
        .register(&RegistrationRequest::from(body))
        .await?;

    let (mail, debug) = match user.email.as_deref() {
        Some(email) => {
            let dispatch = state.verification.send_verification(email, &user.name).await?;
            let debug = state
                .config
                .exposes_debug_links()
                .then(|| DebugBlock::from(&dispatch.issued));
            (dispatch.outcome, debug)
        }
        None => (
            MailOutcome {
                email_sent: false,
                email_error: None,
            },
            None,
        ),
    };

    Ok(response::json(
        StatusCode::OK,
        &RegisterResponse {
            success: true,
            message: REGISTRATION_SUCCEEDED.to_string(),
            user: user.profile(),
            mail,
            debug,
        },
    ))
}
