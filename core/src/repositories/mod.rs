//! Repository interfaces and their in-memory implementations.

pub mod user;
pub mod verification_token;

pub use user::{InMemoryUserDirectory, UserDirectory, RESERVED_USERNAMES, SEED_USERS};
pub use verification_token::{InMemoryVerificationTokenStore, VerificationTokenStore};
