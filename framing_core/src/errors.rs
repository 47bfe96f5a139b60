//! # Error Types
//!
//! Structured error types for framing_core. The takeoff functions never
//! return these; they belong to the validation, project and file layers
//! that sit around the calculators.
//!
//! ## Example
//!
//! ```rust
//! use framing_core::errors::{EstimateError, EstimateResult};
//!
//! fn validate_length(length_ft: f64) -> EstimateResult<()> {
//!     if length_ft <= 0.0 {
//!         return Err(EstimateError::invalid_input(
//!             "length_ft",
//!             length_ft.to_string(),
//!             "Wall length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_length(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for framing_core operations
pub type EstimateResult<T> = Result<T, EstimateError>;

/// Structured error type for estimator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EstimateError {
    /// An input value is invalid (out of range, wrong unit, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// One or more business rules failed; every message is kept
    #[error("Validation failed: {}", errors.join(", "))]
    ValidationFailed { errors: Vec<String> },

    /// A wall or other record was not found by id
    #[error("{kind} not found: {id}")]
    NotFound { kind: String, id: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl EstimateError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        EstimateError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(kind: impl Into<String>, id: impl ToString) -> Self {
        EstimateError::NotFound {
            kind: kind.into(),
            id: id.to_string(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        EstimateError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Collapse a list of validation messages into a result.
    ///
    /// An empty list is success.
    pub fn from_messages(errors: Vec<String>) -> EstimateResult<()> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(EstimateError::ValidationFailed { errors })
        }
    }

    /// Validation messages carried by this error, if any
    pub fn messages(&self) -> &[String] {
        match self {
            EstimateError::ValidationFailed { errors } => errors,
            _ => &[],
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EstimateError::InvalidInput { .. } => "INVALID_INPUT",
            EstimateError::ValidationFailed { .. } => "VALIDATION_FAILED",
            EstimateError::NotFound { .. } => "NOT_FOUND",
            EstimateError::FileError { .. } => "FILE_ERROR",
            EstimateError::SerializationError { .. } => "SERIALIZATION_ERROR",
            EstimateError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for EstimateError {
    fn from(e: serde_json::Error) -> Self {
        EstimateError::SerializationError {
            reason: e.to_string(),
        }
    }
}
