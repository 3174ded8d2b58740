//! Middleware for the function handlers
//!
//! CORS is answered by the functions themselves so that the same headers
//! are produced whether a function runs behind this server or on a
//! serverless platform.

pub mod cors;
