//! Account service: login, username availability and registration

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::AccountService;
pub use types::{RegistrationRequest, UsernameAvailability};
