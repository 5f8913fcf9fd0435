// ============================================================================
// Numeric Errors
// Error types for exact decimal arithmetic
// ============================================================================

use thiserror::Error;

/// Errors that can occur during decimal arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NumericError {
    /// Result does not fit the 96-bit decimal range
    #[error("arithmetic overflow: result exceeded the decimal range")]
    Overflow,
    /// Attempted division by zero
    #[error("division by zero")]
    DivisionByZero,
    /// Input string or value is invalid (NaN, infinity, malformed text)
    #[error("invalid input: could not parse value")]
    InvalidInput,
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::Overflow.to_string(),
            "arithmetic overflow: result exceeded the decimal range"
        );
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::DivisionByZero);
    }
}
