//! `GET /check-username?username=` - username availability

use actix_web::http::StatusCode;

use hd_core::errors::DomainError;
use hd_core::repositories::{UserDirectory, VerificationTokenStore};
use hd_shared::FunctionResponse;

use crate::dto::UsernameCheckResponse;
use crate::event::{response, NormalizedRequest};
use crate::handlers::error::ApiError;

use super::AppState;

pub const USERNAME_AVAILABLE: &str = "Логин доступен";
pub const USERNAME_TAKEN: &str = "Этот логин уже занят";

/// Check whether a username is valid and free
///
/// Validation failures answer 400 with `available: false` next to the
/// error.
pub async fn handle<D, T>(
    state: &AppState<D, T>,
    request: &NormalizedRequest,
) -> Result<FunctionResponse, ApiError>
where
    D: UserDirectory,
    T: VerificationTokenStore,
{
    let raw = request.query_param("username").unwrap_or("");

    match state.accounts.check_username(raw).await {
        Ok(availability) => {
            let message = if availability.available {
                USERNAME_AVAILABLE
            } else {
                USERNAME_TAKEN
            };
            Ok(response::json(
                StatusCode::OK,
                &UsernameCheckResponse {
                    available: availability.available,
                    username: availability.username,
                    message: message.to_string(),
                },
            ))
        }
        Err(DomainError::Validation(error)) => {
            let error = ApiError::from(error);
            Ok(response::error(
                error.status_code(),
                &error.envelope().with_extra("available", false),
            ))
        }
        Err(error) => Err(error.into()),
    }
}
