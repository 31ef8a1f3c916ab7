//! Unified error types for the domain layer
//!
//! Every rule violation in contest framing and resolution surfaces as a
//! [`DomainError`], so callers can re-prompt for corrected input without
//! inspecting strings.

use thiserror::Error;

use crate::value_objects::RatingParseError;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., empty prize, positive stretch)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A numeric input fell outside its permitted range
    #[error("{field} out of range: {value} (expected {expected})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        expected: &'static str,
    },

    /// Parse error (rating notation, modifier type names)
    #[error("Parse error: {0}")]
    Parse(String),

    /// The contest is not in a state that allows the requested operation
    #[error("Contest not ready: {0}")]
    NotReady(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when domain invariants are violated:
    /// - Required text fields are empty or whitespace-only
    /// - A stretch modifier carries a bonus instead of a penalty
    ///
    /// # Example
    /// ```ignore
    /// if prize.trim().is_empty() {
    ///     return Err(DomainError::validation("Prize cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an out-of-range error
    pub fn out_of_range(field: &'static str, value: impl Into<i64>, expected: &'static str) -> Self {
        Self::OutOfRange {
            field,
            value: value.into(),
            expected,
        }
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a not-ready error
    pub fn not_ready(msg: impl Into<String>) -> Self {
        Self::NotReady(msg.into())
    }
}

impl From<RatingParseError> for DomainError {
    fn from(err: RatingParseError) -> Self {
        Self::Parse(err.to_string())
    }
}
