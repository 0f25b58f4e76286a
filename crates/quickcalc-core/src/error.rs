//! Domain errors for the operation library.
//!
//! All errors are:
//! - Copyable (results are tiny value types)
//! - Categorizable (for CLI display)
//! - Printable as the exact message the shell shows the user

use thiserror::Error;

/// A mathematically undefined operation.
///
/// These are the only failure modes of the operation library; everything
/// else (parse failures, unknown menu tokens) belongs to the shell layer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("Error: Cannot divide by zero.")]
    DivisionByZero,

    #[error("Error: Factorial of negative numbers is not defined.")]
    NegativeFactorial,

    #[error("Error: Factorial result is too large to represent.")]
    FactorialOverflow,

    #[error("Error: Logarithm is not defined for non-positive numbers.")]
    NonPositiveLogarithm,
}

impl MathError {
    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DivisionByZero | Self::NegativeFactorial | Self::NonPositiveLogarithm => {
                ErrorCategory::Domain
            }
            Self::FactorialOverflow => ErrorCategory::Overflow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Input outside the mathematical domain of the operation.
    Domain,
    /// Result not representable in the host numeric type.
    Overflow,
}

/// Convenient result type alias.
pub type MathResult<T> = Result<T, MathError>;
