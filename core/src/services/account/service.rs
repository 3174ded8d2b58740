//! Account service implementation

use std::sync::Arc;

use hd_shared::masking::mask_email;
use hd_shared::validation::validators;

use crate::domain::entities::user::{DirectoryUser, UserProfile};
use crate::errors::{AuthError, DomainResult, ValidationError};
use crate::repositories::UserDirectory;
use crate::services::password::PasswordHasher;
use crate::services::validation::{validate_email, validate_password, validate_username};

use super::types::{RegistrationRequest, UsernameAvailability};

/// Account operations over an injected user directory
pub struct AccountService<D: UserDirectory> {
    directory: Arc<D>,
    hasher: PasswordHasher,
}

impl<D: UserDirectory> AccountService<D> {
    pub fn new(directory: Arc<D>, hasher: PasswordHasher) -> Self {
        Self { directory, hasher }
    }

    /// Authenticate an email (or username) and password pair
    ///
    /// Unknown identifiers and wrong passwords both yield
    /// `AuthError::InvalidCredentials`.
    pub async fn login(&self, identifier: &str, password: &str) -> DomainResult<UserProfile> {
        let identifier = identifier.trim();
        if identifier.is_empty() || password.is_empty() {
            return Err(ValidationError::CredentialsRequired.into());
        }
        validate_password(password)?;

        let user = match self.directory.find_by_identifier(identifier).await? {
            Some(user) => user,
            None => {
                tracing::info!(
                    identifier = %mask_identifier(identifier),
                    event = "login_failed",
                    "Login rejected: unknown identifier"
                );
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !self.hasher.verify(password, &user.password_hash).await? {
            tracing::info!(
                user_id = user.id,
                event = "login_failed",
                "Login rejected: password mismatch"
            );
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!(user_id = user.id, event = "login_succeeded", "User logged in");
        Ok(user.profile())
    }

    /// Validate a username and report whether it is free
    pub async fn check_username(&self, raw: &str) -> DomainResult<UsernameAvailability> {
        let username = validate_username(raw)?;
        let taken = self.directory.exists(&username).await?;

        tracing::debug!(username = %username, available = !taken, "Username checked");
        Ok(UsernameAvailability {
            username,
            available: !taken,
        })
    }

    /// Register a new account identified by email, username or both
    pub async fn register(&self, request: &RegistrationRequest) -> DomainResult<DirectoryUser> {
        let email = request.email();
        let username = request.username();

        if (email.is_none() && username.is_none()) || request.password.is_empty() {
            return Err(ValidationError::CredentialsRequired.into());
        }

        let email = email.map(validate_email).transpose()?;
        let username = username.map(validate_username).transpose()?;
        validate_password(&request.password)?;

        if let Some(email) = email.as_deref() {
            if self.directory.exists(email).await? {
                return Err(AuthError::EmailAlreadyRegistered.into());
            }
        }
        if let Some(username) = username.as_deref() {
            if self.directory.exists(username).await? {
                return Err(AuthError::UsernameTaken.into());
            }
        }

        let name = request
            .name()
            .map(str::to_string)
            .or_else(|| username.clone())
            .or_else(|| {
                email
                    .as_deref()
                    .and_then(|e| e.split('@').next())
                    .map(str::to_string)
            })
            .unwrap_or_default();

        let password_hash = self.hasher.hash(&request.password).await?;
        let user = self
            .directory
            .insert(DirectoryUser::new(email, username, name, password_hash))
            .await?;

        tracing::info!(
            user_id = user.id,
            email = ?user.email.as_deref().map(mask_email),
            username = ?user.username,
            event = "user_registered",
            "User registered"
        );
        Ok(user)
    }
}

fn mask_identifier(identifier: &str) -> String {
    if validators::looks_like_email(identifier) {
        mask_email(identifier)
    } else {
        identifier.to_string()
    }
}
