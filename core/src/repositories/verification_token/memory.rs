//! In-memory verification token store

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::verification_token::VerificationToken;
use crate::errors::DomainError;

use super::trait_::VerificationTokenStore;

pub struct InMemoryVerificationTokenStore {
    tokens: Arc<RwLock<HashMap<String, VerificationToken>>>,
}

impl InMemoryVerificationTokenStore {
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

impl Default for InMemoryVerificationTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerificationTokenStore for InMemoryVerificationTokenStore {
    async fn save(&self, token: VerificationToken) -> Result<(), DomainError> {
        let mut tokens = self.tokens.write().await;
        tokens.insert(token.token_hash.clone(), token);
        Ok(())
    }

    async fn find(&self, token_hash: &str) -> Result<Option<VerificationToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(token_hash).cloned())
    }

    async fn consume(&self, token_hash: &str) -> Result<Option<VerificationToken>, DomainError> {
        let mut tokens = self.tokens.write().await;
        Ok(tokens.remove(token_hash))
    }

    async fn revoke_for_email(&self, email: &str) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, t| !t.belongs_to(email));
        Ok(before - tokens.len())
    }

    async fn purge_expired(&self) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, t| !t.is_expired());
        Ok(before - tokens.len())
    }
}
