//! Function event handling
//!
//! - `request` - normalises an incoming event (method, body, query)
//! - `response` - builds JSON responses with the standard headers
//! - `adapter` - converts actix-web requests into events and back

pub mod adapter;
pub mod request;
pub mod response;

pub use request::{NormalizedRequest, RequestBody};

#[cfg(test)]
mod tests;
