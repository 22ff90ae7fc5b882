use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The two fields a command generation renders while streaming.
///
/// Serializable because callers feed previous generations back into the
/// conversation history as assistant turns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    pub command: String,
    pub explanation: String,
}

impl Generation {
    /// Extract the generation fields from a parsed snapshot, coercing
    /// whatever the model produced into displayable strings: a missing or
    /// non-string `command` becomes empty, and a structured `explanation`
    /// is re-serialized to its JSON text rather than dropped.
    pub fn from_value(value: &Value) -> Self {
        let command = match value.get("command") {
            Some(Value::String(s)) => s.clone(),
            _ => String::new(),
        };
        let explanation = match value.get("explanation") {
            Some(Value::String(s)) => s.clone(),
            Some(v @ (Value::Object(_) | Value::Array(_))) => v.to_string(),
            _ => String::new(),
        };
        Self {
            command,
            explanation,
        }
    }
}
