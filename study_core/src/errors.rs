//! # Error Types
//!
//! Structured error types for study_core.
//!
//! Calculator input problems (empty fields, zero divisors, negative
//! discriminants) are *not* errors in this sense: they are ordinary
//! [`CalculatorResult::Failure`](crate::calculators::CalculatorResult) values
//! shown to the user. `StudyError` covers lookups, configuration and the
//! persistence backend.
//!
//! ## Example
//!
//! ```rust
//! use study_core::errors::{StudyError, StudyResult};
//!
//! fn validate_tolerance(tolerance: f64) -> StudyResult<()> {
//!     if tolerance <= 0.0 {
//!         return Err(StudyError::invalid_input(
//!             "answer_tolerance",
//!             tolerance.to_string(),
//!             "Tolerance must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for study_core operations
pub type StudyResult<T> = Result<T, StudyError>;

/// Structured error type for study_core operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum StudyError {
    /// An input value is invalid (bad key, bad setting, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// No calculator matches the given name or slug
    #[error("Unknown calculator: {name}")]
    UnknownCalculator { name: String },

    /// No reference formula has the given id
    #[error("Formula not found: {id}")]
    FormulaNotFound { id: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// The store's lock file is held by another process
    #[error("File locked: '{path}' is locked by another process")]
    FileLocked { path: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Settings file could not be read or parsed
    #[error("Config error in '{path}': {reason}")]
    ConfigError { path: String, reason: String },
}

impl StudyError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        StudyError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownCalculator error
    pub fn unknown_calculator(name: impl Into<String>) -> Self {
        StudyError::UnknownCalculator { name: name.into() }
    }

    /// Create a FormulaNotFound error
    pub fn formula_not_found(id: impl Into<String>) -> Self {
        StudyError::FormulaNotFound { id: id.into() }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        StudyError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        StudyError::SerializationError { reason: reason.into() }
    }

    /// Create a ConfigError
    pub fn config(path: impl Into<String>, reason: impl Into<String>) -> Self {
        StudyError::ConfigError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            StudyError::InvalidInput { .. } => "INVALID_INPUT",
            StudyError::UnknownCalculator { .. } => "UNKNOWN_CALCULATOR",
            StudyError::FormulaNotFound { .. } => "FORMULA_NOT_FOUND",
            StudyError::FileError { .. } => "FILE_ERROR",
            StudyError::FileLocked { .. } => "FILE_LOCKED",
            StudyError::SerializationError { .. } => "SERIALIZATION_ERROR",
            StudyError::ConfigError { .. } => "CONFIG_ERROR",
        }
    }
}
