//! Error types for the accounting library.

use alloy_primitives::U256;
use thiserror::Error;

/// Errors that can occur while recomputing vault accounting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// A conversion was asked to divide by a zero balance or supply.
    #[error("Division by zero in {operation}")]
    DivisionByZero { operation: &'static str },

    /// An intermediate product did not fit in 256 bits.
    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },

    /// A subtraction that the vault state guarantees non-negative went below zero.
    #[error("Arithmetic underflow in {operation}")]
    Underflow { operation: &'static str },

    /// Vault decimals outside the range a 256-bit scale can represent.
    #[error("Invalid vault decimals: {0}")]
    InvalidDecimals(U256),
}

/// Result type alias for accounting operations.
pub type Result<T> = std::result::Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_division_by_zero() {
        let error = MathError::DivisionByZero {
            operation: "want_to_shares",
        };
        assert_eq!(error.to_string(), "Division by zero in want_to_shares");
    }

    #[test]
    fn test_error_display_invalid_decimals() {
        let error = MathError::InvalidDecimals(U256::from(80));
        assert_eq!(error.to_string(), "Invalid vault decimals: 80");
    }
}
