//! `POST /test-email` - send a test message through the configured relay

use actix_web::http::StatusCode;
use serde_json::Value;

use hd_core::errors::{MailError, ValidationError};
use hd_core::repositories::{UserDirectory, VerificationTokenStore};
use hd_core::services::mail::templates;
use hd_core::services::validation::validate_email;
use hd_shared::masking::mask_email;
use hd_shared::{ErrorEnvelope, FunctionResponse};

use crate::dto::{TestEmailRequest, TestEmailResponse};
use crate::event::{response, NormalizedRequest};
use crate::handlers::error::ApiError;

use super::AppState;

/// Send one test message
///
/// Unlike registration, relay failures are the result here and answer 500:
/// ```json
/// {"success": false, "error": "Ошибка аутентификации SMTP: ...", "smtp_email": "noreply@example.com"}
/// ```
/// Missing credentials add `has_password` to the body.
pub async fn handle<D, T>(
    state: &AppState<D, T>,
    request: &NormalizedRequest,
) -> Result<FunctionResponse, ApiError>
where
    D: UserDirectory,
    T: VerificationTokenStore,
{
    let body: TestEmailRequest = request.parse_body()?;
    let email = body.email.as_deref().map(str::trim).unwrap_or("");
    if email.is_empty() {
        return Err(ValidationError::EmailRequired.into());
    }
    let email = validate_email(email)?;

    let relay = state.mail_relay.as_ref();
    let smtp_email = relay.sender().map(str::to_string);

    let result = if relay.is_configured() {
        let mail = templates::test_mail(&state.config.site.name, &email);
        relay.send(&mail).await.map(|_| ())
    } else {
        Err(MailError::NotConfigured)
    };

    match result {
        Ok(()) => {
            tracing::info!(
                to = %mask_email(&email),
                provider = relay.provider_name(),
                "Test email sent"
            );
            Ok(response::json(
                StatusCode::OK,
                &TestEmailResponse {
                    success: true,
                    message: format!("Тестовое письмо отправлено на {}", email),
                    smtp_email,
                },
            ))
        }
        Err(error) => {
            tracing::warn!(
                to = %mask_email(&email),
                provider = relay.provider_name(),
                error = %error,
                "Test email failed"
            );
            let mut envelope = ErrorEnvelope::new(error.to_string())
                .with_extra("smtp_email", smtp_email.map(Value::String).unwrap_or(Value::Null));
            if error == MailError::NotConfigured {
                envelope = envelope.with_extra("has_password", state.config.smtp.has_password());
            }
            Ok(response::error(StatusCode::INTERNAL_SERVER_ERROR, &envelope))
        }
    }
}
