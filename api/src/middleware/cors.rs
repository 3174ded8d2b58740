//! CORS preflight responder
//!
//! Every function answers `OPTIONS` before looking at anything else in the
//! request, and every other response carries the allow-origin header.

use std::collections::BTreeMap;

use hd_shared::FunctionResponse;

pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
pub const ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
pub const MAX_AGE: &str = "Access-Control-Max-Age";

/// Origins allowed to call the functions
pub const ANY_ORIGIN: &str = "*";

/// Request headers the website sends
pub const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// Preflight cache lifetime in seconds
pub const PREFLIGHT_MAX_AGE_SECS: u32 = 86400;

/// Add the allow-origin header
pub fn allow_origin(headers: &mut BTreeMap<String, String>) {
    headers.insert(ALLOW_ORIGIN.to_string(), ANY_ORIGIN.to_string());
}

/// Preflight response: 200, empty body, exactly the four CORS headers
///
/// `allowed_methods` is the endpoint's method list, e.g. `"POST, OPTIONS"`.
pub fn preflight(allowed_methods: &str) -> FunctionResponse {
    let mut headers = BTreeMap::new();
    allow_origin(&mut headers);
    headers.insert(ALLOW_METHODS.to_string(), allowed_methods.to_string());
    headers.insert(ALLOW_HEADERS.to_string(), ALLOWED_HEADERS.to_string());
    headers.insert(MAX_AGE.to_string(), PREFLIGHT_MAX_AGE_SECS.to_string());

    FunctionResponse {
        status_code: 200,
        headers,
        body: String::new(),
    }
}
