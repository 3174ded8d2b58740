//! Unit tests for the account service

use std::sync::Arc;

use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::{InMemoryUserDirectory, UserDirectory};
use crate::services::account::{AccountService, RegistrationRequest};
use crate::services::password::PasswordHasher;

async fn service() -> AccountService<InMemoryUserDirectory> {
    service_with_directory().await.0
}

async fn service_with_directory() -> (AccountService<InMemoryUserDirectory>, Arc<InMemoryUserDirectory>) {
    let hasher = PasswordHasher::new(4);
    let directory = Arc::new(InMemoryUserDirectory::seeded(&hasher).await.unwrap());
    (AccountService::new(directory.clone(), hasher), directory)
}

fn registration(email: &str, password: &str) -> RegistrationRequest {
    RegistrationRequest {
        email: Some(email.to_string()),
        password: password.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_login_with_seed_account() {
    let service = service().await;
    let profile = service.login("test@example.com", "testpassword").await.unwrap();
    assert_eq!(profile.email.as_deref(), Some("test@example.com"));
    assert_eq!(profile.name, "Тестовый пользователь");
}

#[tokio::test]
async fn test_login_identifier_is_case_insensitive() {
    let service = service().await;
    assert!(service.login(" ADMIN@example.com ", "admin123").await.is_ok());
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_user_look_the_same() {
    let service = service().await;
    let wrong_password = service
        .login("test@example.com", "not-the-password")
        .await
        .unwrap_err();
    let unknown_user = service
        .login("ghost@example.com", "testpassword")
        .await
        .unwrap_err();

    assert!(matches!(wrong_password, DomainError::Auth(AuthError::InvalidCredentials)));
    assert_eq!(wrong_password.to_string(), unknown_user.to_string());
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let service = service().await;
    let error = service.login("", "testpassword").await.unwrap_err();
    assert!(matches!(
        error,
        DomainError::Validation(ValidationError::CredentialsRequired)
    ));
}

#[tokio::test]
async fn test_login_short_password_is_validation_error() {
    let service = service().await;
    let error = service.login("test@example.com", "short").await.unwrap_err();
    assert!(matches!(
        error,
        DomainError::Validation(ValidationError::PasswordTooShort)
    ));
}

#[tokio::test]
async fn test_check_username() {
    let service = service().await;
    assert!(service.check_username("validuser1").await.unwrap().available);
    assert!(!service.check_username("Admin").await.unwrap().available);
    assert!(matches!(
        service.check_username("ab").await,
        Err(DomainError::Validation(ValidationError::UsernameTooShort))
    ));
}

#[tokio::test]
async fn test_register_then_login() {
    let service = service().await;
    let user = service
        .register(&registration("new@example.com", "longenough"))
        .await
        .unwrap();
    assert!(!user.email_verified);
    assert_eq!(user.name, "new");

    let profile = service.login("new@example.com", "longenough").await.unwrap();
    assert_eq!(profile.id, user.id);
}

#[tokio::test]
async fn test_register_existing_email_rejected() {
    let service = service().await;
    let error = service
        .register(&registration("admin@example.com", "whatever123"))
        .await
        .unwrap_err();
    assert!(matches!(error, DomainError::Auth(AuthError::EmailAlreadyRegistered)));
}

#[tokio::test]
async fn test_register_twice_rejected() {
    let service = service().await;
    service
        .register(&registration("twice@example.com", "longenough"))
        .await
        .unwrap();
    let error = service
        .register(&registration("TWICE@example.com", "longenough"))
        .await
        .unwrap_err();
    assert!(matches!(error, DomainError::Auth(AuthError::EmailAlreadyRegistered)));
}

#[tokio::test]
async fn test_register_with_username() {
    let (service, directory) = service_with_directory().await;
    let request = RegistrationRequest {
        username: Some(String::from("fresh_user")),
        password: String::from("longenough"),
        name: Some(String::from("Свежий")),
        ..Default::default()
    };
    let user = service.register(&request).await.unwrap();
    assert_eq!(user.username.as_deref(), Some("fresh_user"));
    assert_eq!(user.name, "Свежий");
    assert!(directory.exists("FRESH_USER").await.unwrap());
}

#[tokio::test]
async fn test_register_reserved_username_rejected() {
    let service = service().await;
    let request = RegistrationRequest {
        username: Some(String::from("administrator")),
        password: String::from("longenough"),
        ..Default::default()
    };
    assert!(matches!(
        service.register(&request).await,
        Err(DomainError::Auth(AuthError::UsernameTaken))
    ));
}

#[tokio::test]
async fn test_register_validation_order() {
    let service = service().await;

    assert!(matches!(
        service.register(&registration("", "longenough")).await,
        Err(DomainError::Validation(ValidationError::CredentialsRequired))
    ));
    assert!(matches!(
        service.register(&registration("not-an-email", "longenough")).await,
        Err(DomainError::Validation(ValidationError::InvalidEmail))
    ));
    assert!(matches!(
        service.register(&registration("ok@example.com", "short")).await,
        Err(DomainError::Validation(ValidationError::PasswordTooShort))
    ));
}
