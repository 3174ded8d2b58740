//! Request normalisation

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::BTreeMap;

use hd_shared::FunctionEvent;

use crate::handlers::error::ApiError;

/// Parsed request body
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No body, a blank body or JSON `null`
    Empty,
    /// A JSON object
    Json(Map<String, Value>),
    /// Anything that is not a JSON object
    Malformed,
}

impl RequestBody {
    fn parse(raw: Option<&str>, is_base64_encoded: bool) -> Self {
        let raw = match raw {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return RequestBody::Empty,
        };

        let text: Cow<'_, str> = if is_base64_encoded {
            match STANDARD
                .decode(raw.trim())
                .ok()
                .and_then(|bytes| String::from_utf8(bytes).ok())
            {
                Some(text) => Cow::Owned(text),
                None => return RequestBody::Malformed,
            }
        } else {
            Cow::Borrowed(raw)
        };

        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => RequestBody::Json(map),
            Ok(Value::Null) => RequestBody::Empty,
            _ => RequestBody::Malformed,
        }
    }
}

/// Method, body and query parameters of one invocation
#[derive(Debug, Clone)]
pub struct NormalizedRequest {
    /// Upper-cased method, defaulted when the event carries none
    pub method: String,
    pub body: RequestBody,
    pub query: BTreeMap<String, String>,
}

impl NormalizedRequest {
    pub fn from_event(event: &FunctionEvent, default_method: &str) -> Self {
        let method = event
            .http_method
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(default_method)
            .to_ascii_uppercase();

        Self {
            method,
            body: RequestBody::parse(event.body.as_deref(), event.is_base64_encoded),
            query: event.query_string_parameters.clone().unwrap_or_default(),
        }
    }

    pub fn is_preflight(&self) -> bool {
        self.method == "OPTIONS"
    }

    /// Query parameter, trimmed; blank values count as absent
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .get(key)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// Deserialize the body into `T`. An empty body is read as `{}`.
    pub fn parse_body<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        let object = match &self.body {
            RequestBody::Empty => Map::new(),
            RequestBody::Json(map) => map.clone(),
            RequestBody::Malformed => return Err(ApiError::MalformedInput),
        };

        serde_json::from_value(Value::Object(object)).map_err(|e| {
            tracing::debug!(error = %e, "Request body does not match the expected shape");
            ApiError::MalformedInput
        })
    }
}
