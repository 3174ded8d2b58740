//! Unit tests for domain entities

use chrono::{Duration, Utc};

use crate::domain::entities::{DirectoryUser, PaymentStatus, VerificationToken};

#[test]
fn test_identifier_match_is_case_insensitive() {
    let user = DirectoryUser::new(
        Some(String::from("Test@Example.com")),
        Some(String::from("tester")),
        "Тестовый пользователь",
        "hash",
    );
    assert!(user.matches_identifier("test@example.com"));
    assert!(user.matches_identifier("TESTER"));
    assert!(!user.matches_identifier("other@example.com"));
}

#[test]
fn test_verify_email_sets_timestamp() {
    let mut user = DirectoryUser::new(Some(String::from("a@b.io")), None, "A", "hash");
    assert!(!user.email_verified);
    user.verify_email();
    assert!(user.email_verified);
    assert!(user.verified_at.is_some());
}

#[test]
fn test_profile_omits_missing_fields() {
    let user = DirectoryUser::new(None, Some(String::from("alice")), "Alice", "hash");
    let value = serde_json::to_value(user.profile()).unwrap();
    assert!(value.get("email").is_none());
    assert_eq!(value["username"], "alice");
    assert!(value.get("password_hash").is_none());
}

#[test]
fn test_password_hash_never_serialized() {
    let user = DirectoryUser::new(Some(String::from("a@b.io")), None, "A", "secret-hash");
    let printed = serde_json::to_string(&user).unwrap();
    assert!(!printed.contains("secret-hash"));
}

#[test]
fn test_token_expiry() {
    let token = VerificationToken::new(String::from("abc"), "a@b.io", 24);
    assert!(!token.is_expired());
    assert!(token.is_expired_at(Utc::now() + Duration::hours(25)));
    assert!(token.belongs_to(" A@B.IO "));
}

#[test]
fn test_payment_status_serializes_lowercase() {
    assert_eq!(serde_json::to_value(PaymentStatus::Pending).unwrap(), "pending");
    assert_eq!(serde_json::to_value(PaymentStatus::Completed).unwrap(), "completed");
}
