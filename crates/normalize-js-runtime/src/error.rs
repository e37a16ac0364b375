//! Error types: library failures and source-level thrown values.

use crate::coerce::to_display_string;
use crate::value::Value;
use std::fmt;

/// A failure raised by this library itself.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// Regex flag that has no faithful equivalent (`y`, `u`) or is unknown.
    #[error("regex flag '{flag}' is not supported")]
    UnsupportedFlag { flag: char },

    #[error("invalid regex pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("{operation} is not supported: {hint}")]
    UnsupportedOperation {
        operation: &'static str,
        hint: &'static str,
    },

    #[error("cannot convert a cyclic structure to JSON")]
    CyclicStructure,

    #[error("array index {index} is past the largest array index")]
    IndexOutOfRange { index: usize },

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

impl RuntimeError {
    /// The source-language error constructor this failure maps to.
    pub fn error_name(&self) -> &'static str {
        match self {
            RuntimeError::UnsupportedFlag { .. } | RuntimeError::InvalidPattern(_) => {
                "SyntaxError"
            }
            RuntimeError::UnsupportedOperation { .. } | RuntimeError::CyclicStructure => {
                "TypeError"
            }
            RuntimeError::IndexOutOfRange { .. } => "RangeError",
            RuntimeError::Io(_) | RuntimeError::Toml(_) => "Error",
        }
    }
}

/// An arbitrary value raised by translated `throw`.
///
/// The payload is carried unchanged to the matching catch site.
#[derive(Debug, Clone)]
pub struct ThrownValue(Value);

impl ThrownValue {
    pub fn new(value: impl Into<Value>) -> Self {
        ThrownValue(value.into())
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl fmt::Display for ThrownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uncaught {}", to_display_string(&self.0))
    }
}

impl std::error::Error for ThrownValue {}

/// Library failures surface to translated code as error objects
/// (`{ name, message }`) so a translated `catch` can observe them.
impl From<RuntimeError> for ThrownValue {
    fn from(err: RuntimeError) -> Self {
        ThrownValue(Value::object_from([
            ("name", Value::from(err.error_name())),
            ("message", Value::from(err.to_string())),
        ]))
    }
}

/// Translated `throw value`.
pub fn throw<T>(value: impl Into<Value>) -> Result<T, ThrownValue> {
    Err(ThrownValue::new(value))
}
