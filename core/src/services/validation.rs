//! Field validation rules for the account flows
//!
//! Each function applies its rules in order and stops at the first failure.
//! Inputs are the raw request values; an empty string counts as missing.

use hd_shared::validation::{
    validators, PASSWORD_MIN_LEN, TOKEN_MIN_LEN, USERNAME_MAX_LEN, USERNAME_MIN_LEN,
};

use crate::errors::ValidationError;

/// Validate a username and return it trimmed
pub fn validate_username(raw: &str) -> Result<String, ValidationError> {
    let username = raw.trim();
    if username.is_empty() {
        return Err(ValidationError::UsernameRequired);
    }

    let len = username.chars().count();
    if len < USERNAME_MIN_LEN {
        return Err(ValidationError::UsernameTooShort);
    }
    if len > USERNAME_MAX_LEN {
        return Err(ValidationError::UsernameTooLong);
    }
    if !validators::is_username_charset(username) {
        return Err(ValidationError::UsernameInvalidCharacters);
    }

    Ok(username.to_string())
}

/// Validate an email address and return it trimmed
pub fn validate_email(raw: &str) -> Result<String, ValidationError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !validators::is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(email.to_string())
}

/// Validate a password. Passwords are never trimmed.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if !validators::min_length(password, PASSWORD_MIN_LEN) {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Placeholder token shape rule: present and at least 10 characters
pub fn validate_verification_token(raw: &str) -> Result<String, ValidationError> {
    let token = raw.trim();
    if token.is_empty() {
        return Err(ValidationError::TokenRequired);
    }
    if !validators::min_length(token, TOKEN_MIN_LEN) {
        return Err(ValidationError::TokenTooShort);
    }
    Ok(token.to_string())
}
