//! User directory trait: the lookup interface behind login, registration
//! and the username check.
//!
//! The account services only depend on this trait, so a persistent
//! datastore can replace the in-memory directory without touching the
//! validation logic.

use async_trait::async_trait;

use crate::domain::entities::user::DirectoryUser;
use crate::errors::DomainError;

/// Repository trait for directory users
///
/// Identifiers are emails or usernames and are compared case-insensitively.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Check whether an identifier is already taken
    ///
    /// # Returns
    /// * `Ok(true)` - A user (or a reserved name) matches the identifier
    /// * `Ok(false)` - The identifier is free
    async fn exists(&self, identifier: &str) -> Result<bool, DomainError>;

    /// Find a user by email or username
    async fn find_by_identifier(&self, identifier: &str)
        -> Result<Option<DirectoryUser>, DomainError>;

    /// Insert a new user and return it with its assigned id
    ///
    /// # Returns
    /// * `Err(DomainError::Auth(..))` - The email or username is already taken
    async fn insert(&self, user: DirectoryUser) -> Result<DirectoryUser, DomainError>;

    /// Mark the user owning `email` as verified
    ///
    /// # Returns
    /// * `Ok(true)` - A user was updated
    /// * `Ok(false)` - No user owns that email
    async fn mark_email_verified(&self, email: &str) -> Result<bool, DomainError>;
}
