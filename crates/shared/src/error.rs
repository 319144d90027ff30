//! Money error types.
//!
//! Every failure here is tied to a single operation call and is recoverable
//! by the caller. Nothing is retried and nothing is fatal.

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by money operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Currency code or locale is not registered.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// The amount is the not-a-number sentinel produced by unparseable input.
    #[error("Invalid amount: value is not a number")]
    InvalidAmount,

    /// Operation requires both operands in the same currency.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch {
        /// Currency of the receiver.
        expected: String,
        /// Currency of the other operand.
        got: String,
    },

    /// Allocation with no recipients or a zero ratio total.
    #[error("Division by zero")]
    DivisionByZero,

    /// Conversion preconditions were not met.
    #[error("Invalid conversion: {0}")]
    InvalidConversion(ConversionFault),

    /// Result does not fit the decimal or subunit range.
    #[error("Arithmetic overflow")]
    Overflow,
}

/// Reason a conversion was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionFault {
    /// Source and target currency are the same.
    #[error("cannot convert to the same currency")]
    SameCurrency,

    /// Exchange rate is zero or negative.
    #[error("cannot convert using a non-positive rate")]
    NonPositiveRate,
}

impl MoneyError {
    /// Builds a mismatch error from two currency codes.
    pub fn mismatch(expected: impl Into<String>, got: impl Into<String>) -> Self {
        Self::CurrencyMismatch {
            expected: expected.into(),
            got: got.into(),
        }
    }

    /// Returns a stable machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::InvalidConversion(_) => "INVALID_CONVERSION",
            Self::Overflow => "OVERFLOW",
        }
    }
}

impl From<ConversionFault> for MoneyError {
    fn from(fault: ConversionFault) -> Self {
        Self::InvalidConversion(fault)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
