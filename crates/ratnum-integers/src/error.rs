//! Errors raised by rational arithmetic.

use thiserror::Error;

/// Errors that can occur while constructing or combining rationals.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RationalError {
    /// A construction or operation would produce a zero denominator.
    #[error("denominator is zero")]
    InvalidDenominator,

    /// `gcd` was called with both arguments zero.
    #[error("both gcd arguments are zero")]
    InvalidArgument,
}
