//! HostDesk API Library
//!
//! The six account functions (auth, check-username, email-verify, payment,
//! register, test-email) and the actix-web application that serves them.
//! Every function takes a [`FunctionEvent`](hd_shared::FunctionEvent) and
//! returns a [`FunctionResponse`](hd_shared::FunctionResponse); the HTTP
//! server only adapts requests into events and back.

pub mod app;
pub mod dto;
pub mod event;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::create_app;
pub use handlers::error::ApiError;
pub use routes::{AppState, Function};
