//! Scalar enum values and canonical literal encoding.
//!
//! Enum elements are printed with the same encoding convention used for
//! wire serialization of the underlying scalar, so the literals in the
//! generated definition match what a JSON deserializer on the consuming
//! side expects.

use serde::Serialize;
use thiserror::Error;

/// Error type for canonical literal encoding.
#[derive(Debug, Error)]
pub enum ValueEncodeError {
    /// Non-finite floating point values have no canonical literal form.
    #[error("non-finite float value {value} has no canonical literal")]
    NonFiniteFloat {
        /// The offending value.
        value: f64,
    },

    /// Serialization error from the JSON encoder.
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A scalar value supplied for one enum element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// Boolean value.
    Bool(bool),
    /// Signed integer value.
    Int(i64),
    /// Unsigned integer value.
    Uint(u64),
    /// Floating point value.
    Float(f64),
    /// String value.
    Str(String),
}

impl ScalarValue {
    /// Encodes the value to its canonical literal text.
    ///
    /// # Errors
    /// Returns `ValueEncodeError` if the value cannot be encoded, such as a
    /// non-finite float.
    pub fn canonical_literal(&self) -> Result<String, ValueEncodeError> {
        if let Self::Float(f) = self {
            if !f.is_finite() {
                return Err(ValueEncodeError::NonFiniteFloat { value: *f });
            }
        }

        Ok(serde_json::to_string(self)?)
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ScalarValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u64> for ScalarValue {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// One name/value pair supplied to the enum registrar.
#[derive(Debug, Clone)]
pub struct EnumValue {
    /// Element name.
    pub name: String,
    /// Element value.
    pub value: ScalarValue,
}

impl EnumValue {
    /// Creates an enum input pair.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
