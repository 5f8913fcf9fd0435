// ============================================================================
// Money Errors
// Validation and arithmetic failures surfaced to callers
// ============================================================================

use crate::numeric::NumericError;
use thiserror::Error;

/// Errors returned by currency, money, formatter and configuration operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Currency code not present in the registry
    #[error("currency code {0:?} is invalid")]
    InvalidCurrency(String),

    /// Exchange rate is not strictly positive
    #[error("rate {0} is invalid (it should be greater than 0)")]
    InvalidRate(String),

    /// Division by a zero scalar or zero rate
    #[error("division by zero")]
    DivideByZero,

    /// Amount could not be represented exactly (NaN, infinity, out of range)
    #[error("amount {0} is invalid")]
    InvalidAmount(String),

    /// Configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Any other arithmetic failure
    #[error(transparent)]
    Numeric(NumericError),
}

impl From<NumericError> for MoneyError {
    fn from(err: NumericError) -> Self {
        match err {
            NumericError::DivisionByZero => MoneyError::DivideByZero,
            other => MoneyError::Numeric(other),
        }
    }
}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;
