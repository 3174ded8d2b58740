//! Response builder

use actix_web::http::StatusCode;
use serde::Serialize;
use std::collections::BTreeMap;

use hd_shared::{ErrorEnvelope, FunctionResponse};

use crate::middleware::cors;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// JSON response carrying the CORS origin and content type headers
pub fn json<B: Serialize>(status: StatusCode, body: &B) -> FunctionResponse {
    let (status, body) = match serde_json::to_string(body) {
        Ok(body) => (status, body),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize response body");
            let fallback = ErrorEnvelope::new(crate::handlers::error::INTERNAL_ERROR_MESSAGE);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                fallback.to_value().to_string(),
            )
        }
    };

    FunctionResponse {
        status_code: status.as_u16(),
        headers: json_headers(),
        body,
    }
}

/// Error envelope response
pub fn error(status: StatusCode, envelope: &ErrorEnvelope) -> FunctionResponse {
    json(status, &envelope.to_value())
}

fn json_headers() -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    cors::allow_origin(&mut headers);
    headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());
    headers
}
