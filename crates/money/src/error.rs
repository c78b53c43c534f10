//! Error types for money operations.

use thiserror::Error;

use crate::types::Currency;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors that can occur when combining or comparing money values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// An operand that should have been `Money` was something else.
    #[error("Expected {expected}, got {actual}")]
    TypeMismatch {
        /// Name of the type the operation accepts.
        expected: &'static str,
        /// Name of the type that was supplied.
        actual: &'static str,
    },

    /// Two money values with different currencies were combined or ordered.
    #[error("Currency mismatch: expected '{expected}', got '{actual}'")]
    CurrencyMismatch {
        /// Currency of the left-hand operand.
        expected: Currency,
        /// Currency of the offending operand.
        actual: Currency,
    },

    /// Division by a zero divisor.
    #[error("Cannot divide money by zero")]
    DivisionByZero,

    /// The resulting amount does not fit in 64 bits.
    #[error("Amount overflow during {operation}")]
    AmountOverflow {
        /// Operation that overflowed.
        operation: &'static str,
    },
}

impl MoneyError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } => "TYPE_MISMATCH",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::AmountOverflow { .. } => "AMOUNT_OVERFLOW",
        }
    }

    /// Returns true if the error came from mixing incompatible operands,
    /// as opposed to an arithmetic limit.
    #[must_use]
    pub const fn is_operand_error(&self) -> bool {
        matches!(
            self,
            Self::TypeMismatch { .. } | Self::CurrencyMismatch { .. }
        )
    }
}
