//! # Infrastructure Layer
//!
//! Concrete implementations of the external services the account functions
//! depend on.
//!
//! ## Architecture
//!
//! - **Mail**: SMTP relay over STARTTLS (lettre) and an in-process mock relay
//!
//! The user directory and the verification token store are in-memory and
//! live in the core crate.

// Re-export core types for convenience
pub use hd_core::errors::*;

/// Mail relay module - SMTP and mock relays
pub mod mail;

pub use mail::{create_mail_relay, MockFailure, MockMailRelay, SmtpMailRelay};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// SMTP transport error
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// Invalid mailbox address
    #[error("Address error: {0}")]
    Address(#[from] lettre::address::AddressError),
}
