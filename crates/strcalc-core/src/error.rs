//! Error types for the string calculator
//!
//! Every failure a summation operation can raise is a variant of
//! [`CalculatorError`]. The `Display` output of each variant is the exact
//! message callers have historically matched on, while [`ErrorKind`] gives a
//! fieldless tag for programmatic branching.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Result alias used by all calculator operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;

/// Failure raised by a summation operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// `add_v1` received more than two tokens
    #[error("The method can only take 0, 1, or 2 numbers.")]
    TooManyNumbers,

    /// A token did not parse as a base-10 integer
    #[error("All inputs must be valid numbers.")]
    InvalidNumber,

    /// A `//` delimiter declaration was not followed by a newline and numbers
    #[error("Invalid format: Custom delimiter must be followed by numbers.")]
    InvalidFormat,

    /// `add_v5` found negative values; they are kept in encounter order
    #[error("Negatives not allowed: {}", format_negatives(.negatives))]
    NegativesPresent { negatives: Vec<i32> },
}

impl CalculatorError {
    /// Get the fieldless kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalculatorError::TooManyNumbers => ErrorKind::TooManyNumbers,
            CalculatorError::InvalidNumber => ErrorKind::InvalidNumber,
            CalculatorError::InvalidFormat => ErrorKind::InvalidFormat,
            CalculatorError::NegativesPresent { .. } => ErrorKind::NegativesPresent,
        }
    }

    /// Negative values that caused the failure, empty for every other kind
    pub fn negatives(&self) -> &[i32] {
        match self {
            CalculatorError::NegativesPresent { negatives } => negatives.as_slice(),
            _ => &[],
        }
    }
}

/// Tag identifying which validation rule rejected the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    TooManyNumbers,
    InvalidNumber,
    InvalidFormat,
    NegativesPresent,
}

impl ErrorKind {
    /// Stable name for logging and serialized reports
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::TooManyNumbers => "too_many_numbers",
            ErrorKind::InvalidNumber => "invalid_number",
            ErrorKind::InvalidFormat => "invalid_format",
            ErrorKind::NegativesPresent => "negatives_present",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Renders `[-2, -3]`.
fn format_negatives(negatives: &[i32]) -> String {
    let joined = negatives
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}
