//! Domain entities representing core business objects.

pub mod payment;
pub mod user;
pub mod verification_token;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use payment::{PaymentSession, PaymentStatus, PaymentStatusRecord};
pub use user::{DirectoryUser, UserProfile};
pub use verification_token::{VerificationToken, DEFAULT_TOKEN_TTL_HOURS};
