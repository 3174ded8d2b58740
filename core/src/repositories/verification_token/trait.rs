//! Verification token store trait.

use async_trait::async_trait;

use crate::domain::entities::verification_token::VerificationToken;
use crate::errors::DomainError;

/// Storage for issued email verification tokens, keyed by token hash
#[async_trait]
pub trait VerificationTokenStore: Send + Sync {
    /// Store a newly issued token
    async fn save(&self, token: VerificationToken) -> Result<(), DomainError>;

    /// Look up a token by its hash without consuming it
    async fn find(&self, token_hash: &str) -> Result<Option<VerificationToken>, DomainError>;

    /// Remove and return a token. A token can be consumed once.
    async fn consume(&self, token_hash: &str) -> Result<Option<VerificationToken>, DomainError>;

    /// Drop every token issued for `email`. Returns the number removed.
    async fn revoke_for_email(&self, email: &str) -> Result<usize, DomainError>;

    /// Drop expired tokens. Returns the number removed.
    async fn purge_expired(&self) -> Result<usize, DomainError>;
}
