//! HTTP handlers
//!
//! - `dispatch` - routes `/{function}` requests to the account functions
//! - `error` - maps function errors onto status codes and envelopes
//! - `health` - liveness endpoint

pub mod dispatch;
pub mod error;
pub mod health;

pub use dispatch::{dispatch, not_found};
pub use health::health_check;
