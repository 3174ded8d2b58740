//! Mail relay abstraction and message composition
//!
//! The relay implementations live in the infrastructure crate. This module
//! defines the trait they implement, the message types, the templates and
//! the best-effort delivery wrapper used by registration.

mod outcome;
mod relay;
pub mod templates;

#[cfg(test)]
pub(crate) mod tests;

pub use outcome::{deliver_best_effort, MailOutcome};
pub use relay::{DeliveryReceipt, MailRelay, OutgoingMail};
