//! The JSON result envelope written by helper processes.
//!
//! Only `success` and `error` are interpreted. Every other field is
//! opaque payload and is forwarded verbatim.

use serde_json::Value;

/// Message used when a failed envelope carries no `error` field.
pub const MISSING_ERROR_MESSAGE: &str = "helper reported failure without an error message";

/// A parsed helper result envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEnvelope(Value);

impl ResultEnvelope {
    /// Parses a complete helper stdout buffer as one JSON document.
    ///
    /// # Errors
    ///
    /// Returns the serde error if the buffer is not a single JSON value.
    pub fn parse(stdout: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(stdout).map(Self)
    }

    /// Whether the helper reported success.
    ///
    /// `success` is read with loose truthiness: missing, `false`, `null`,
    /// `0` and `""` all count as failure, as does a non-object document.
    pub fn is_success(&self) -> bool {
        match self.0.get("success") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }

    /// The failure message carried by the envelope.
    pub fn error_message(&self) -> String {
        match self.0.get("error") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => MISSING_ERROR_MESSAGE.to_string(),
        }
    }

    /// Pretty-prints the whole envelope with two-space indentation.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn to_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.0)
    }

    /// Borrows the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the envelope, returning the underlying JSON value.
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for ResultEnvelope {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
