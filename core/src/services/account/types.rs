//! Input and result types for the account service

use serde::Serialize;

/// Registration input as received from the website
#[derive(Debug, Clone, Default)]
pub struct RegistrationRequest {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: String,
    pub name: Option<String>,
}

impl RegistrationRequest {
    /// Non-blank email, trimmed
    pub fn email(&self) -> Option<&str> {
        non_blank(self.email.as_deref())
    }

    /// Non-blank username, trimmed
    pub fn username(&self) -> Option<&str> {
        non_blank(self.username.as_deref())
    }

    /// Non-blank display name, trimmed
    pub fn name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Result of a username availability check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsernameAvailability {
    pub username: String,
    pub available: bool,
}
