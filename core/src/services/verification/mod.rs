//! Email verification service module
//!
//! This module provides the email confirmation workflow:
//! - Token issuance, storage (hashed) and link building
//! - Verification mail composition and best-effort delivery
//! - Token confirmation with ownership and expiry checks

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::VerificationService;
pub use types::{IssuedVerification, VerificationConfirmation, VerificationDispatch};
