//! Shape conversion error types

use thiserror::Error;

/// Errors raised while decoding flat configuration or expanding it into API shapes
#[derive(Error, Debug)]
pub enum ShapeError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Malformed field '{field}' (value {value:?}): {reason}")]
    MalformedField {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Flat map decode error at '{key}': {reason}")]
    DecodeFault { key: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ShapeError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn malformed_field(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedField {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn type_mismatch(
        path: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            path: path.into(),
            expected,
            found,
        }
    }

    pub fn decode_fault(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DecodeFault {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a missing required field
    pub fn is_missing_field(&self) -> bool {
        matches!(self, ShapeError::MissingField { .. })
    }

    /// Check if a value failed numeric/type coercion
    pub fn is_malformed_field(&self) -> bool {
        matches!(self, ShapeError::MalformedField { .. })
    }

    /// Check if a sequence element had the wrong dynamic shape
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, ShapeError::TypeMismatch { .. })
    }

    /// Check if the flat form had an inconsistent count or index
    pub fn is_decode_fault(&self) -> bool {
        matches!(self, ShapeError::DecodeFault { .. })
    }
}

pub type Result<T> = std::result::Result<T, ShapeError>;
