//! Error to response mapping
//!
//! Every failure a function can produce ends here and leaves as the standard
//! `{"success": false, "error": ...}` envelope with a matching status code.

use actix_web::http::StatusCode;
use thiserror::Error;

use hd_core::errors::{AuthError, DomainError, MailError, ValidationError};
use hd_shared::{ErrorEnvelope, FunctionResponse};

use crate::event::response;

/// Message returned for unexpected failures; details stay in the logs
pub const INTERNAL_ERROR_MESSAGE: &str = "Внутренняя ошибка сервера";

/// Errors surfaced by the function handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid JSON")]
    MalformedInput,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::Domain(error.into())
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        ApiError::Domain(error.into())
    }
}

impl From<MailError> for ApiError {
    fn from(error: MailError) -> Self {
        ApiError::Domain(error.into())
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::MalformedInput => StatusCode::BAD_REQUEST,
            ApiError::Domain(error) => match error {
                DomainError::Validation(_) => StatusCode::BAD_REQUEST,
                DomainError::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
                DomainError::Auth(_) => StatusCode::BAD_REQUEST,
                DomainError::Mail(_) | DomainError::Internal { .. } => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }

    /// Client-facing message
    pub fn message(&self) -> String {
        match self {
            ApiError::Domain(DomainError::Internal { .. }) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope::new(self.message())
    }

    /// Log as appropriate and build the error response
    pub fn into_response(self) -> FunctionResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Function failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }
        response::error(status, &self.envelope())
    }
}
