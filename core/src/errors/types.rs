//! Domain-specific error types for the account flows
//!
//! Every `Display` string is the exact Russian message returned to the
//! website, so handlers can forward `to_string()` unchanged.

use thiserror::Error;

/// Authentication and account-state errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Never says whether the identifier or the password was wrong
    #[error("Неверный логин или пароль")]
    InvalidCredentials,

    #[error("Пользователь с таким email уже существует")]
    EmailAlreadyRegistered,

    #[error("Этот логин уже занят")]
    UsernameTaken,

    #[error("Неверный токен подтверждения")]
    InvalidVerificationToken,

    #[error("Срок действия токена истёк")]
    VerificationTokenExpired,
}

/// Field validation errors, one variant per distinct message
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Логин обязателен")]
    UsernameRequired,

    #[error("Логин должен содержать минимум 3 символа")]
    UsernameTooShort,

    #[error("Логин не должен превышать 20 символов")]
    UsernameTooLong,

    #[error("Логин может содержать только буквы, цифры и подчеркивания")]
    UsernameInvalidCharacters,

    #[error("Email обязателен")]
    EmailRequired,

    #[error("Неверный формат email")]
    InvalidEmail,

    #[error("Пароль обязателен")]
    PasswordRequired,

    #[error("Пароль должен содержать минимум 8 символов")]
    PasswordTooShort,

    #[error("Токен обязателен")]
    TokenRequired,

    /// Placeholder length rule, reported like any other bad token
    #[error("Неверный токен подтверждения")]
    TokenTooShort,

    #[error("Email и пароль обязательны")]
    CredentialsRequired,

    #[error("Токен и email обязательны")]
    TokenAndEmailRequired,

    #[error("Email и имя обязательны")]
    EmailAndNameRequired,

    #[error("Payment ID required")]
    PaymentIdRequired,

    #[error("Сумма должна быть неотрицательным числом")]
    InvalidAmount,

    #[error("Количество должно быть не меньше 1")]
    InvalidQuantity,
}

/// Mail relay failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MailError {
    #[error("SMTP настройки не найдены")]
    NotConfigured,

    #[error("Ошибка отправки: неверный адрес {address}")]
    InvalidAddress { address: String },

    #[error("Ошибка аутентификации SMTP: {reason}")]
    Authentication { reason: String },

    #[error("Ошибка отправки: превышено время ожидания ({seconds} с)")]
    Timeout { seconds: u64 },

    #[error("Ошибка отправки: {reason}")]
    Delivery { reason: String },
}

impl MailError {
    /// Whether the relay rejected the credentials
    pub fn is_authentication(&self) -> bool {
        matches!(self, MailError::Authentication { .. })
    }
}
