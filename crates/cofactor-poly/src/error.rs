//! Errors raised by polynomial division.

use thiserror::Error;

/// Errors that can occur during polynomial division.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// The divisor is the zero polynomial.
    #[error("division by the zero polynomial")]
    DivisionByZero,

    /// The divisor's leading coefficient has no multiplicative inverse.
    #[error("leading coefficient of the divisor is not invertible")]
    NonInvertibleLeadingCoefficient,
}

/// Result alias for polynomial operations.
pub type Result<T, E = PolyError> = std::result::Result<T, E>;
