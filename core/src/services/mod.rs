//! Business services containing domain logic and use cases.

pub mod account;
pub mod mail;
pub mod password;
pub mod payment;
pub mod token;
pub mod validation;
pub mod verification;

// Re-export commonly used types
pub use account::{AccountService, RegistrationRequest, UsernameAvailability};
pub use mail::{
    deliver_best_effort, DeliveryReceipt, MailOutcome, MailRelay, OutgoingMail,
};
pub use password::PasswordHasher;
pub use payment::{PaymentRequest, PaymentService};
pub use token::{generate_token, hash_token, TOKEN_BYTES};
pub use verification::{
    IssuedVerification, VerificationConfirmation, VerificationDispatch, VerificationService,
};
