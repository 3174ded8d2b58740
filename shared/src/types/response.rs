//! Error envelope shared by every function

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `{"success": false, "error": <message>}` plus endpoint-specific fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Always false
    pub success: bool,

    /// Human-readable error message
    pub error: String,

    /// Extra top-level fields (e.g. `available` for the username check)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ErrorEnvelope {
    /// Create a new error envelope
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            extra: Map::new(),
        }
    }

    /// Add a top-level field. `success` and `error` cannot be overridden.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != "success" && key != "error" {
            self.extra.insert(key, value.into());
        }
        self
    }

    pub fn to_value(&self) -> Value {
        let mut object = self.extra.clone();
        object.insert(String::from("success"), Value::Bool(false));
        object.insert(String::from("error"), Value::String(self.error.clone()));
        Value::Object(object)
    }
}
