//! Unit tests for mail composition and best-effort delivery


use crate::errors::MailError;
use crate::services::mail::templates::{test_mail, verification_mail};
use crate::services::mail::{deliver_best_effort, MailOutcome};

pub(crate) use mocks::StubRelay;

#[test]
fn test_verification_mail_contains_link_in_both_parts() {
    let link = "http://localhost:8080/verify-email?token=abc&email=a%40b.io";
    let mail = verification_mail("HostDesk", "a@b.io", "Анна", link);

    assert_eq!(mail.to, "a@b.io");
    assert!(mail.subject.contains("HostDesk"));
    assert!(mail.text_body.contains(link));
    let html = mail.html_body.unwrap();
    assert!(html.contains("token=abc&amp;email=a%40b.io"));
    assert!(html.contains("Анна"));
}

#[test]
fn test_verification_mail_escapes_name() {
    let mail = verification_mail("HostDesk", "a@b.io", "<script>", "http://x.io");
    assert!(!mail.html_body.unwrap().contains("<script>"));
}

#[test]
fn test_test_mail_is_plain_text() {
    let mail = test_mail("HostDesk", "a@b.io");
    assert_eq!(mail.subject, "Тест отправки email");
    assert!(mail.html_body.is_none());
}

#[tokio::test]
async fn test_best_effort_reports_success() {
    let relay = StubRelay::accepting();
    let outcome = deliver_best_effort(&relay, &test_mail("HostDesk", "a@b.io")).await;
    assert_eq!(outcome, MailOutcome::sent());
    assert_eq!(relay.sent_count(), 1);
}

#[tokio::test]
async fn test_best_effort_swallows_auth_failure() {
    let relay = StubRelay::failing(MailError::Authentication {
        reason: String::from("535 bad credentials"),
    });
    let outcome = deliver_best_effort(&relay, &test_mail("HostDesk", "a@b.io")).await;
    assert!(!outcome.email_sent);
    let error = outcome.email_error.unwrap();
    assert!(error.contains("Ошибка аутентификации SMTP"));
}

#[tokio::test]
async fn test_best_effort_skips_unconfigured_relay() {
    let relay = StubRelay::unconfigured();
    let outcome = deliver_best_effort(&relay, &test_mail("HostDesk", "a@b.io")).await;
    assert!(!outcome.email_sent);
    assert_eq!(outcome.email_error.as_deref(), Some("SMTP настройки не найдены"));
    assert_eq!(relay.sent_count(), 0);
}
