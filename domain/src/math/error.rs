//! Number-theory error types

use thiserror::Error;

/// Errors from the number-theory functions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("Input must be a non-empty list")]
    EmptyInput,

    #[error("All elements must be positive integers (got {0})")]
    NonPositive(i64),

    #[error("Result of {operation} overflows a 64-bit unsigned integer")]
    Overflow { operation: &'static str },
}
