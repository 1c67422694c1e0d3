//! # Error Types
//!
//! Structured error types for statics_core. Validation failures carry the
//! offending field path (e.g. `point_loads[2].position`) so a caller can
//! point the user at the exact input that needs fixing.
//!
//! ## Example
//!
//! ```rust
//! use statics_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length: f64) -> CalcResult<()> {
//!     if length <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "length",
//!             length.to_string(),
//!             "Beam length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_length(-1.0).unwrap_err().is_validation());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for statics_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for statics operations.
///
/// `InvalidInput` and `MissingField` are validation errors: they are reported
/// to the caller and never retried. `ComputationFailed` means a
/// solver invariant was broken on input that passed validation.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, not finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Solver produced a non-physical result (non-finite reaction, etc.)
    #[error("Calculation failed: {calculation_type} - {reason}")]
    ComputationFailed {
        calculation_type: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON or CSV serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a ComputationFailed error
    pub fn computation_failed(
        calculation_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::ComputationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True for errors caused by the caller's input rather than a solver defect
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. }
                | CalcError::MissingField { .. }
                | CalcError::SerializationError { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::ComputationFailed { .. } => "COMPUTATION_FAILED",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("point_loads[0].position", "12", "Outside the beam");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("length").error_code(), "MISSING_FIELD");
        assert_eq!(
            CalcError::computation_failed("reactions", "NaN").error_code(),
            "COMPUTATION_FAILED"
        );
    }

    #[test]
    fn test_every_variant_has_distinct_code() {
        let all = [
            CalcError::invalid_input("length", "0", "must be positive"),
            CalcError::missing_field("support_c_position"),
            CalcError::computation_failed("reactions", "NaN"),
            CalcError::file_error("read", "x.json", "not found"),
            CalcError::serialization("eof"),
        ];
        let mut codes: Vec<&str> = all.iter().map(CalcError::error_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn test_validation_classification() {
        assert!(CalcError::invalid_input("length", "0", "must be positive").is_validation());
        assert!(!CalcError::computation_failed("reactions", "NaN").is_validation());
        assert!(!CalcError::file_error("read", "x.json", "not found").is_validation());
    }

    #[test]
    fn test_display_names_field() {
        let error = CalcError::invalid_input("distributed_loads[1].end", "2", "End must exceed start");
        assert!(error.to_string().contains("distributed_loads[1].end"));
    }
}
