//! Unit tests for the in-memory user directory

use crate::domain::entities::user::DirectoryUser;
use crate::errors::{AuthError, DomainError};
use crate::repositories::user::{InMemoryUserDirectory, UserDirectory};
use crate::services::password::PasswordHasher;

async fn seeded() -> InMemoryUserDirectory {
    InMemoryUserDirectory::seeded(&PasswordHasher::new(4))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_seeded_directory_contains_fixed_accounts() {
    let directory = seeded().await;
    assert_eq!(directory.len().await, 3);
    assert!(directory.exists("admin@example.com").await.unwrap());
    assert!(directory.exists("TEST@example.com").await.unwrap());
    assert!(!directory.exists("fresh@example.com").await.unwrap());
}

#[tokio::test]
async fn test_reserved_usernames_exist() {
    let directory = seeded().await;
    for name in ["admin", "Test", "USER", "administrator"] {
        assert!(directory.exists(name).await.unwrap(), "{} should be taken", name);
    }
    assert!(!directory.exists("validuser1").await.unwrap());
}

#[tokio::test]
async fn test_seed_passwords_are_hashed() {
    let directory = seeded().await;
    let user = directory
        .find_by_identifier("test@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_ne!(user.password_hash, "testpassword");
    assert!(user.password_hash.starts_with("$2"));
    assert_eq!(user.name, "Тестовый пользователь");
}

#[tokio::test]
async fn test_insert_assigns_increasing_ids() {
    let directory = InMemoryUserDirectory::new();
    let a = directory
        .insert(DirectoryUser::new(Some("a@example.com".into()), None, "A", "h"))
        .await
        .unwrap();
    let b = directory
        .insert(DirectoryUser::new(Some("b@example.com".into()), None, "B", "h"))
        .await
        .unwrap();
    assert!(b.id > a.id);
}

#[tokio::test]
async fn test_insert_rejects_duplicate_email_case_insensitive() {
    let directory = seeded().await;
    let result = directory
        .insert(DirectoryUser::new(Some("Admin@Example.com".into()), None, "X", "h"))
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::EmailAlreadyRegistered))
    ));
}

#[tokio::test]
async fn test_insert_rejects_reserved_username() {
    let directory = seeded().await;
    let result = directory
        .insert(DirectoryUser::new(None, Some("Administrator".into()), "X", "h"))
        .await;
    assert!(matches!(result, Err(DomainError::Auth(AuthError::UsernameTaken))));
}

#[tokio::test]
async fn test_mark_email_verified() {
    let directory = seeded().await;
    assert!(directory.mark_email_verified("USER@test.com").await.unwrap());
    let user = directory.find_by_identifier("user@test.com").await.unwrap().unwrap();
    assert!(user.email_verified);
    assert!(!directory.mark_email_verified("nobody@example.com").await.unwrap());
}
