//! Type definitions module
//!
//! - `function` - The generic event a function receives and the response it returns
//! - `response` - The error envelope shared by every function

pub mod function;
pub mod response;

pub use function::{FunctionEvent, FunctionResponse};
pub use response::ErrorEnvelope;
