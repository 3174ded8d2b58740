//! Unit tests for domain error types

use crate::errors::{AuthError, DomainError, MailError, ValidationError};

#[test]
fn test_validation_messages_are_distinct_per_username_rule() {
    let messages = [
        ValidationError::UsernameRequired.to_string(),
        ValidationError::UsernameTooShort.to_string(),
        ValidationError::UsernameTooLong.to_string(),
        ValidationError::UsernameInvalidCharacters.to_string(),
    ];
    for (i, a) in messages.iter().enumerate() {
        for b in messages.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_invalid_credentials_message_is_generic() {
    let message = AuthError::InvalidCredentials.to_string();
    assert_eq!(message, "Неверный логин или пароль");
}

#[test]
fn test_domain_error_is_transparent() {
    let error: DomainError = ValidationError::PasswordTooShort.into();
    assert_eq!(error.to_string(), "Пароль должен содержать минимум 8 символов");

    let error: DomainError = AuthError::EmailAlreadyRegistered.into();
    assert!(matches!(error, DomainError::Auth(AuthError::EmailAlreadyRegistered)));
}

#[test]
fn test_mail_error_classification() {
    let auth = MailError::Authentication {
        reason: String::from("535 5.7.8 Username and Password not accepted"),
    };
    assert!(auth.is_authentication());
    assert!(auth.to_string().starts_with("Ошибка аутентификации SMTP: "));
    assert!(auth.to_string().contains("535"));
    assert!(!MailError::NotConfigured.is_authentication());
    assert_eq!(MailError::NotConfigured.to_string(), "SMTP настройки не найдены");
}
