//! `POST /auth` - sign in with email (or username) and password

use actix_web::http::StatusCode;

use hd_core::repositories::{UserDirectory, VerificationTokenStore};
use hd_shared::FunctionResponse;

use crate::dto::{LoginRequest, LoginResponse};
use crate::event::{response, NormalizedRequest};
use crate::handlers::error::ApiError;

use super::AppState;

pub const LOGIN_SUCCEEDED: &str = "Авторизация успешна";

/// Authenticate a user
///
/// # Request Body
/// ```json
/// {
///   "email": "test@example.com",
///   "password": "testpassword"
/// }
/// ```
///
/// # Response
/// ```json
/// {
///   "success": true,
///   "user": {"id": 1, "email": "test@example.com", "name": "Тестовый пользователь"},
///   "message": "Авторизация успешна"
/// }
/// ```
///
/// Unknown identifiers and wrong passwords both answer 401 with the same
/// message.
pub async fn handle<D, T>(
    state: &AppState<D, T>,
    request: &NormalizedRequest,
) -> Result<FunctionResponse, ApiError>
where
    D: UserDirectory,
    T: VerificationTokenStore,
{
    let body: LoginRequest = request.parse_body()?;
    let user = state.accounts.login(body.identifier(), body.password()).await?;

    Ok(response::json(
        StatusCode::OK,
        &LoginResponse {
            success: true,
            user,
            message: LOGIN_SUCCEEDED.to_string(),
        },
    ))
}
