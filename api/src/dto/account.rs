use serde::{Deserialize, Serialize};

use hd_core::domain::UserProfile;
use hd_core::services::{MailOutcome, RegistrationRequest};

use super::verification::DebugBlock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,

    /// Accepted in place of `email` for accounts registered by login name
    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Email if given, otherwise the username
    pub fn identifier(&self) -> &str {
        [self.email.as_deref(), self.username.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|value| !value.is_empty())
            .unwrap_or("")
    }

    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: UserProfile,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UsernameCheckResponse {
    pub available: bool,
    pub username: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,
}

impl From<RegisterRequest> for RegistrationRequest {
    fn from(request: RegisterRequest) -> Self {
        RegistrationRequest {
            email: request.email,
            username: request.username,
            password: request.password.unwrap_or_default(),
            name: request.name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub user: UserProfile,

    /// `email_sent` and, on failure, `email_error`
    #[serde(flatten)]
    pub mail: MailOutcome,

    /// Present outside production only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<DebugBlock>,
}
