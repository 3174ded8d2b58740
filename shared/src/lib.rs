//! Shared utilities and common types for the HostDesk account functions
//!
//! This crate provides common functionality used across all workspace crates:
//! - Configuration types loaded from the environment
//! - The generic function event and response shapes
//! - Common validators and log-masking helpers

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, Environment, LoggingConfig, MailProvider, ServerConfig, SiteConfig,
    SmtpConfig, VerificationConfig,
};
pub use types::{ErrorEnvelope, FunctionEvent, FunctionResponse};
pub use utils::{masking, validation};
