//! Monetary error model.

use thiserror::Error;

/// Result type used across the money crate.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Monetary operation failure.
///
/// Keep this focused on deterministic value-level failures. Every operation
/// that can fail surfaces its error synchronously and leaves its inputs
/// untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// A currency code was not recognized at construction or re-localization.
    #[error("unrecognized currency code: {0:?}")]
    InvalidCurrency(String),

    /// An amount could not be read as an exact minor-unit integer.
    #[error("amount is not an exact minor-unit integer: {0:?}")]
    InvalidAmount(String),

    /// A symbol lookup hit a currency with no symbol entry.
    #[error("no display symbol registered for currency {0}")]
    UnknownCurrency(String),

    /// Arithmetic across two different currencies.
    #[error("currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        left: &'static str,
        right: &'static str,
    },

    /// A minor-unit amount left the representable range.
    #[error("amount overflow")]
    AmountOverflow,

    /// Division by a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// Allocation ratios that cannot split an amount.
    #[error("invalid allocation ratios: {0}")]
    InvalidRatios(String),
}

impl MoneyError {
    pub fn invalid_currency(code: impl Into<String>) -> Self {
        Self::InvalidCurrency(code.into())
    }

    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    pub fn unknown_currency(code: impl Into<String>) -> Self {
        Self::UnknownCurrency(code.into())
    }

    pub fn invalid_ratios(msg: impl Into<String>) -> Self {
        Self::InvalidRatios(msg.into())
    }
}
