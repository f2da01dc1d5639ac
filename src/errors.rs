//! Error types reported by [`BigUint`](crate::BigUint) operations.

use thiserror::Error as ThisError;

/// Represents all recoverable failures of the arithmetic engine.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum BigUintError {
    /// The hex string length is not a multiple of 8.
    #[error("Invalid hex length {len}: expected a multiple of 8")]
    InvalidFormat { len: usize },

    /// The hex string contains a character that is not a hex digit.
    #[error("Invalid hex digit: {0:?}")]
    InvalidDigit(char),

    /// The divisor of a division or remainder is zero.
    #[error("Divide by zero")]
    DivideByZero,

    /// The subtrahend is larger than the minuend.
    #[error("Subtraction underflow")]
    Underflow,
}
