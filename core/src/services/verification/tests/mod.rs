//! Unit tests for the verification service

use chrono::{Duration, Utc};
use std::sync::Arc;

use hd_shared::config::{SiteConfig, VerificationConfig};

use crate::domain::entities::user::DirectoryUser;
use crate::domain::entities::verification_token::VerificationToken;
use crate::errors::{AuthError, DomainError, MailError, ValidationError};
use crate::repositories::{
    InMemoryUserDirectory, InMemoryVerificationTokenStore, UserDirectory, VerificationTokenStore,
};
use crate::services::mail::tests::StubRelay;
use crate::services::mail::MailRelay;
use crate::services::token::hash_token;
use crate::services::verification::VerificationService;

type Service = VerificationService<InMemoryUserDirectory, InMemoryVerificationTokenStore>;

fn build(relay: Arc<dyn MailRelay>, config: VerificationConfig) -> (Service, Arc<InMemoryUserDirectory>) {
    let directory = Arc::new(InMemoryUserDirectory::new());
    let tokens = Arc::new(InMemoryVerificationTokenStore::new());
    let service = VerificationService::new(
        directory.clone(),
        tokens,
        relay,
        config,
        SiteConfig::default(),
    )
    .unwrap();
    (service, directory)
}

fn token_param(link: &str) -> String {
    let url = url::Url::parse(link).unwrap();
    url.query_pairs()
        .find(|(k, _)| k == "token")
        .map(|(_, v)| v.into_owned())
        .unwrap()
}

#[tokio::test]
async fn test_issue_builds_link_with_token_and_email() {
    let (service, _) = build(Arc::new(StubRelay::accepting()), VerificationConfig::default());
    let issued = service.issue("new@example.com").await.unwrap();

    assert!(issued.link.starts_with("http://localhost:8080/verify-email?"));
    assert!(issued.link.contains("email=new%40example.com"));
    assert_eq!(token_param(&issued.link), issued.token);
    assert!(service
        .tokens()
        .find(&hash_token(&issued.token))
        .await
        .unwrap()
        .is_some());
}

#[test]
fn test_unparsable_base_url_is_rejected_up_front() {
    let site = SiteConfig {
        base_url: String::from("example.com"),
        ..SiteConfig::default()
    };
    let result = Service::new(
        Arc::new(InMemoryUserDirectory::new()),
        Arc::new(InMemoryVerificationTokenStore::new()),
        Arc::new(StubRelay::accepting()),
        VerificationConfig::default(),
        site,
    );

    assert!(matches!(result, Err(DomainError::Internal { .. })));
}

#[tokio::test]
async fn test_issue_revokes_previous_token() {
    let (service, _) = build(Arc::new(StubRelay::accepting()), VerificationConfig::default());
    let first = service.issue("a@example.com").await.unwrap();
    let second = service.issue("a@example.com").await.unwrap();

    assert_ne!(first.token, second.token);
    assert!(service.tokens().find(&hash_token(&first.token)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_send_verification_mails_link() {
    let relay = Arc::new(StubRelay::accepting());
    let (service, _) = build(relay.clone(), VerificationConfig::default());
    let dispatch = service.send_verification("a@example.com", "Анна").await.unwrap();

    assert!(dispatch.outcome.email_sent);
    let mail = relay.last_sent().unwrap();
    assert_eq!(mail.to, "a@example.com");
    assert!(mail.text_body.contains(&dispatch.issued.link));
}

#[tokio::test]
async fn test_send_verification_survives_relay_failure() {
    let relay = Arc::new(StubRelay::failing(MailError::Delivery {
        reason: String::from("connection refused"),
    }));
    let (service, _) = build(relay, VerificationConfig::default());
    let dispatch = service.send_verification("a@example.com", "A").await.unwrap();

    assert!(!dispatch.outcome.email_sent);
    assert!(dispatch.outcome.email_error.unwrap().contains("connection refused"));
}

#[tokio::test]
async fn test_confirm_issued_token_marks_user_verified() {
    let (service, directory) = build(Arc::new(StubRelay::accepting()), VerificationConfig::default());
    directory
        .insert(DirectoryUser::new(Some("a@example.com".into()), None, "A", "h"))
        .await
        .unwrap();

    let issued = service.issue("a@example.com").await.unwrap();
    let confirmation = service.confirm(&issued.token, "A@example.com").await.unwrap();

    assert_eq!(confirmation.email, "a@example.com");
    assert!(service.tokens().find(&hash_token(&issued.token)).await.unwrap().is_none());
    let user = directory.find_by_identifier("a@example.com").await.unwrap().unwrap();
    assert!(user.email_verified);
}

#[tokio::test]
async fn test_confirm_rejects_token_for_other_email() {
    let (service, _) = build(Arc::new(StubRelay::accepting()), VerificationConfig::default());
    let issued = service.issue("a@example.com").await.unwrap();

    let error = service.confirm(&issued.token, "b@example.com").await.unwrap_err();
    assert!(matches!(error, DomainError::Auth(AuthError::InvalidVerificationToken)));
}

#[tokio::test]
async fn test_confirm_rejects_expired_token() {
    let (service, _) = build(Arc::new(StubRelay::accepting()), VerificationConfig::default());
    let token = "expired-token-value";
    let mut record = VerificationToken::new(hash_token(token), "a@example.com", 24);
    record.expires_at = Utc::now() - Duration::minutes(5);
    service.tokens().save(record).await.unwrap();

    let error = service.confirm(token, "a@example.com").await.unwrap_err();
    assert!(matches!(error, DomainError::Auth(AuthError::VerificationTokenExpired)));
    assert!(service.tokens().find(&hash_token(token)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_confirm_unknown_token_lenient_by_default() {
    let (service, _) = build(Arc::new(StubRelay::accepting()), VerificationConfig::default());
    let confirmation = service.confirm("0123456789abc", "a@example.com").await.unwrap();
    assert_eq!(confirmation.email, "a@example.com");
}

#[tokio::test]
async fn test_confirm_unknown_token_rejected_in_strict_mode() {
    let (service, _) = build(Arc::new(StubRelay::accepting()), VerificationConfig::strict());
    let error = service.confirm("0123456789abc", "a@example.com").await.unwrap_err();
    assert!(matches!(error, DomainError::Auth(AuthError::InvalidVerificationToken)));
}

#[tokio::test]
async fn test_confirm_validation_order() {
    let (service, _) = build(Arc::new(StubRelay::accepting()), VerificationConfig::default());

    assert!(matches!(
        service.confirm("", "a@example.com").await,
        Err(DomainError::Validation(ValidationError::TokenAndEmailRequired))
    ));
    assert!(matches!(
        service.confirm("short", "not-an-email").await,
        Err(DomainError::Validation(ValidationError::TokenTooShort))
    ));
    assert!(matches!(
        service.confirm("0123456789", "not-an-email").await,
        Err(DomainError::Validation(ValidationError::InvalidEmail))
    ));
}

#[tokio::test]
async fn test_purge_expired() {
    let (service, _) = build(Arc::new(StubRelay::accepting()), VerificationConfig::default());
    let mut record = VerificationToken::new(String::from("stale"), "a@example.com", 1);
    record.expires_at = Utc::now() - Duration::hours(1);
    service.tokens().save(record).await.unwrap();
    assert_eq!(service.purge_expired().await.unwrap(), 1);

    service.issue("b@example.com").await.unwrap();
    assert_eq!(service.purge_expired().await.unwrap(), 0);
}

#[tokio::test]
async fn test_issue_drops_expired_tokens() {
    let (service, _) = build(Arc::new(StubRelay::accepting()), VerificationConfig::default());
    let mut record = VerificationToken::new(String::from("stale"), "a@example.com", 1);
    record.expires_at = Utc::now() - Duration::hours(1);
    service.tokens().save(record).await.unwrap();

    service.issue("b@example.com").await.unwrap();
    assert!(service.tokens().find("stale").await.unwrap().is_none());
}
