//! The account functions
//!
//! Each function runs the same pipeline: normalise the event, answer a CORS
//! preflight, enforce the method list, run the handler, and turn any error
//! into the standard envelope.

pub mod auth;
pub mod check_username;
pub mod email_verify;
pub mod payment;
pub mod register;
pub mod test_email;

use std::sync::Arc;

use hd_core::errors::DomainResult;
use hd_core::repositories::{UserDirectory, VerificationTokenStore};
use hd_core::services::{AccountService, MailRelay, PasswordHasher, PaymentService, VerificationService};
use hd_shared::{AppConfig, FunctionEvent, FunctionResponse};

use crate::event::NormalizedRequest;
use crate::handlers::error::ApiError;
use crate::middleware::cors;

/// Application state shared by all functions
pub struct AppState<D, T>
where
    D: UserDirectory,
    T: VerificationTokenStore,
{
    pub config: AppConfig,
    pub accounts: Arc<AccountService<D>>,
    pub verification: Arc<VerificationService<D, T>>,
    pub payments: Arc<PaymentService>,
    pub mail_relay: Arc<dyn MailRelay>,
}

impl<D, T> AppState<D, T>
where
    D: UserDirectory,
    T: VerificationTokenStore,
{
    /// Wire the services over a directory, a token store and a mail relay
    ///
    /// Fails when the configured site URLs cannot produce verification links.
    pub fn new(
        config: AppConfig,
        directory: Arc<D>,
        tokens: Arc<T>,
        hasher: PasswordHasher,
        mail_relay: Arc<dyn MailRelay>,
    ) -> DomainResult<Self> {
        let accounts = Arc::new(AccountService::new(directory.clone(), hasher));
        let verification = Arc::new(VerificationService::new(
            directory,
            tokens,
            mail_relay.clone(),
            config.verification.clone(),
            config.site.clone(),
        )?);
        let payments = Arc::new(PaymentService::new(config.site.clone()));

        Ok(Self {
            config,
            accounts,
            verification,
            payments,
            mail_relay,
        })
    }
}

/// One of the deployable functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Auth,
    CheckUsername,
    EmailVerify,
    Payment,
    Register,
    TestEmail,
}

impl Function {
    pub const ALL: [Function; 6] = [
        Function::Auth,
        Function::CheckUsername,
        Function::EmailVerify,
        Function::Payment,
        Function::Register,
        Function::TestEmail,
    ];

    /// Route name, also the deployment name
    pub fn name(&self) -> &'static str {
        match self {
            Function::Auth => "auth",
            Function::CheckUsername => "check-username",
            Function::EmailVerify => "email-verify",
            Function::Payment => "payment",
            Function::Register => "register",
            Function::TestEmail => "test-email",
        }
    }

    /// Resolve a function from a path such as `/check-username`
    pub fn from_path(path: &str) -> Option<Self> {
        let name = path.trim_matches('/');
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Method assumed when the event carries none
    pub fn default_method(&self) -> &'static str {
        match self {
            Function::Auth => "POST",
            _ => "GET",
        }
    }

    /// Methods the handler serves, `OPTIONS` excluded
    pub fn allowed_methods(&self) -> &'static [&'static str] {
        match self {
            Function::Auth | Function::Register | Function::TestEmail => &["POST"],
            Function::CheckUsername => &["GET"],
            Function::EmailVerify | Function::Payment => &["GET", "POST"],
        }
    }

    /// `Access-Control-Allow-Methods` value, e.g. `"GET, POST, OPTIONS"`
    pub fn cors_methods(&self) -> String {
        let mut methods = self.allowed_methods().to_vec();
        methods.push("OPTIONS");
        methods.join(", ")
    }

    /// Run the function against an event
    pub async fn invoke<D, T>(&self, state: &AppState<D, T>, event: &FunctionEvent) -> FunctionResponse
    where
        D: UserDirectory,
        T: VerificationTokenStore,
    {
        let request = NormalizedRequest::from_event(event, self.default_method());

        if request.is_preflight() {
            return cors::preflight(&self.cors_methods());
        }

        if !self.allowed_methods().contains(&request.method.as_str()) {
            tracing::debug!(function = self.name(), method = %request.method, "Method not allowed");
            return ApiError::MethodNotAllowed.into_response();
        }

        let result = match self {
            Function::Auth => auth::handle(state, &request).await,
            Function::CheckUsername => check_username::handle(state, &request).await,
            Function::EmailVerify => email_verify::handle(state, &request).await,
            Function::Payment => payment::handle(state, &request).await,
            Function::Register => register::handle(state, &request).await,
            Function::TestEmail => test_email::handle(state, &request).await,
        };

        result.unwrap_or_else(ApiError::into_response)
    }
}
