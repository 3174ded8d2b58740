//! Request and response bodies of the account functions

pub mod account;
pub mod mail;
pub mod payment;
pub mod verification;

pub use account::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UsernameCheckResponse,
};
pub use mail::{TestEmailRequest, TestEmailResponse};
pub use payment::CreatePaymentRequest;
pub use verification::{
    DebugBlock, VerificationRequest, VerificationRequestResponse, VerificationResponse,
};
