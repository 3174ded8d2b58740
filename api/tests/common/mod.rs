//! Shared fixtures for the function tests

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::Value;

use hd_api::{AppState, Function};
use hd_core::repositories::{InMemoryUserDirectory, InMemoryVerificationTokenStore};
use hd_core::services::{MailRelay, PasswordHasher};
use hd_infra::MockMailRelay;
use hd_shared::{AppConfig, AuthConfig, Environment, FunctionEvent, FunctionResponse};

pub type TestState = AppState<InMemoryUserDirectory, InMemoryVerificationTokenStore>;

/// Development config with the cheapest bcrypt cost
pub fn test_config() -> AppConfig {
    AppConfig {
        auth: AuthConfig::fast(),
        ..AppConfig::default()
    }
}

pub fn production_config() -> AppConfig {
    AppConfig {
        environment: Environment::Production,
        ..test_config()
    }
}

pub async fn build_state(config: AppConfig, relay: Arc<dyn MailRelay>) -> TestState {
    build_state_with_stores(config, relay).await.0
}

/// Like [`build_state`], also handing back the stores behind the services
pub async fn build_state_with_stores(
    config: AppConfig,
    relay: Arc<dyn MailRelay>,
) -> (TestState, Arc<InMemoryUserDirectory>, Arc<InMemoryVerificationTokenStore>) {
    let hasher = PasswordHasher::new(config.auth.password_hash_cost);
    let directory = Arc::new(
        InMemoryUserDirectory::seeded(&hasher)
            .await
            .expect("seed directory"),
    );
    let tokens = Arc::new(InMemoryVerificationTokenStore::new());
    let state = AppState::new(config, directory.clone(), tokens.clone(), hasher, relay)
        .expect("valid site config");
    (state, directory, tokens)
}

/// State with an accepting mock relay
pub async fn test_state() -> TestState {
    build_state(test_config(), Arc::new(MockMailRelay::new())).await
}

pub async fn invoke(state: &TestState, function: Function, event: FunctionEvent) -> FunctionResponse {
    function.invoke(state, &event).await
}

pub fn post_json(body: Value) -> FunctionEvent {
    FunctionEvent::new("POST").with_json(&body)
}

/// Asserts the standard error envelope and returns its message
pub fn assert_error(response: &FunctionResponse, status: u16) -> String {
    assert_eq!(response.status_code, status, "body: {}", response.body);
    assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));
    assert_eq!(response.header("Content-Type"), Some("application/json"));

    let body = response.json_body();
    assert_eq!(body["success"], false);
    body["error"].as_str().expect("error message").to_string()
}
