//! # Error Types
//!
//! Structured error types for calc_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! Solver non-convergence is deliberately absent here: an exhausted iteration
//! budget is reported through [`SolverStatus`](crate::calculations::SolverStatus)
//! on a successful result.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_cover(cover_mm: f64) -> CalcResult<()> {
//!     if cover_mm <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "cover_mm".to_string(),
//!             value: cover_mm.to_string(),
//!             reason: "Cover must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Leading text of the `InvalidGrade` message
const INVALID_GRADE_PREFIX: &str = "Invalid concrete grade: '";

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Concrete strength class key not present in the grade table
    #[error("Invalid concrete grade: '{grade}'")]
    InvalidGrade { grade: String },

    /// Section geometry or reinforcement would force a division by zero
    #[error("Degenerate section: {reason}")]
    DegenerateSection { reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidGrade error
    pub fn invalid_grade(grade: impl Into<String>) -> Self {
        CalcError::InvalidGrade { grade: grade.into() }
    }

    /// Create a DegenerateSection error
    pub fn degenerate_section(reason: impl Into<String>) -> Self {
        CalcError::DegenerateSection { reason: reason.into() }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError { reason: reason.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::InvalidGrade { .. } => "INVALID_GRADE",
            CalcError::DegenerateSection { .. } => "DEGENERATE_SECTION",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        let message = err.to_string();
        // Grade keys are resolved while deserializing; keep their error kind
        if err.is_data() {
            if let Some((grade, _)) = message
                .strip_prefix(INVALID_GRADE_PREFIX)
                .and_then(|rest| rest.rsplit_once('\''))
            {
                return CalcError::invalid_grade(grade);
            }
        }
        CalcError::serialization(message)
    }
}

/// Reject values that are not strictly positive and finite.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must be a positive, finite number",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("cover_mm", "-5", "Cover must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_grade("C99/99").error_code(), "INVALID_GRADE");
        assert_eq!(CalcError::degenerate_section("A_s = 0").error_code(), "DEGENERATE_SECTION");
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::invalid_grade("C99/99");
        assert_eq!(error.to_string(), "Invalid concrete grade: 'C99/99'");
        assert!(error.to_string().starts_with(INVALID_GRADE_PREFIX));
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<f64>("not a number").unwrap_err();
        let calc: CalcError = err.into();
        assert_eq!(calc.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("b", 300.0).is_ok());
        assert!(require_positive("b", 0.0).is_err());
        assert!(require_positive("b", -1.0).is_err());
        assert!(require_positive("b", f64::NAN).is_err());
        assert!(require_positive("b", f64::INFINITY).is_err());
    }
}
