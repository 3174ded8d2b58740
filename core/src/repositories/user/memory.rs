//! In-memory user directory seeded with the site's fixed accounts

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::DirectoryUser;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::services::password::PasswordHasher;

use super::trait_::UserDirectory;

/// Usernames that can never be registered
pub const RESERVED_USERNAMES: &[&str] = &["admin", "test", "user", "administrator"];

/// Seed accounts: (email, password, display name)
pub const SEED_USERS: &[(&str, &str, &str)] = &[
    ("test@example.com", "testpassword", "Тестовый пользователь"),
    ("admin@example.com", "admin123", "Администратор"),
    ("user@test.com", "password123", "Пользователь"),
];

/// Directory kept in process memory
pub struct InMemoryUserDirectory {
    users: Arc<RwLock<HashMap<i64, DirectoryUser>>>,
    reserved: HashSet<String>,
    next_id: AtomicI64,
}

impl InMemoryUserDirectory {
    /// Create an empty directory with no reserved names
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            reserved: HashSet::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Create the directory with the seed accounts and reserved usernames.
    /// Seed passwords are hashed with `hasher`.
    pub async fn seeded(hasher: &PasswordHasher) -> DomainResult<Self> {
        let directory = Self::new().with_reserved(RESERVED_USERNAMES.iter().copied());
        for (email, password, name) in SEED_USERS {
            let hash = hasher.hash(password).await?;
            let user = DirectoryUser::new(Some(email.to_string()), None, *name, hash);
            directory.insert(user).await?;
        }

        tracing::debug!(
            users = SEED_USERS.len(),
            reserved = RESERVED_USERNAMES.len(),
            "Seeded in-memory user directory"
        );
        Ok(directory)
    }

    /// Add reserved usernames
    pub fn with_reserved<'a>(mut self, names: impl IntoIterator<Item = &'a str>) -> Self {
        self.reserved
            .extend(names.into_iter().map(|n| n.to_ascii_lowercase()));
        self
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    fn is_reserved(&self, identifier: &str) -> bool {
        self.reserved.contains(&identifier.to_ascii_lowercase())
    }
}

impl Default for InMemoryUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn exists(&self, identifier: &str) -> Result<bool, DomainError> {
        let identifier = identifier.trim();
        if self.is_reserved(identifier) {
            return Ok(true);
        }
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.matches_identifier(identifier)))
    }

    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<DirectoryUser>, DomainError> {
        let identifier = identifier.trim();
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.matches_identifier(identifier))
            .cloned())
    }

    async fn insert(&self, mut user: DirectoryUser) -> Result<DirectoryUser, DomainError> {
        let mut users = self.users.write().await;

        // Check for duplicate email
        if let Some(email) = user.email.as_deref() {
            if users.values().any(|u| u.matches_identifier(email)) {
                return Err(AuthError::EmailAlreadyRegistered.into());
            }
        }

        // Check for duplicate or reserved username
        if let Some(username) = user.username.as_deref() {
            if self.is_reserved(username) || users.values().any(|u| u.matches_identifier(username))
            {
                return Err(AuthError::UsernameTaken.into());
            }
        }

        user.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn mark_email_verified(&self, email: &str) -> Result<bool, DomainError> {
        let email = email.trim();
        let mut users = self.users.write().await;
        let found = users.values_mut().find(|u| {
            u.email
                .as_deref()
                .map(|e| e.eq_ignore_ascii_case(email))
                .unwrap_or(false)
        });

        match found {
            Some(user) => {
                user.verify_email();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
