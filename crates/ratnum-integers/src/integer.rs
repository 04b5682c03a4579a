//! Arbitrary precision integers.
//!
//! `Integer` is the component type of [`Rational`](crate::Rational). It wraps
//! `dashu::IBig`, so products formed during cross-multiplication never
//! overflow.

use dashu::base::{Abs, Gcd, Signed as DashuSigned};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use crate::RationalError;

/// An arbitrary precision integer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Parses an integer literal in the given base.
    ///
    /// # Errors
    ///
    /// Returns an error if `s` is not a valid integer in `radix`.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, dashu::base::error::ParseError> {
        IBig::from_str_radix(s, radix).map(Self)
    }

    /// Returns `|self|`.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        match (self.0.is_zero(), self.is_negative()) {
            (true, _) => 0,
            (false, true) => -1,
            (false, false) => 1,
        }
    }

    /// Returns true if this integer is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Greatest common divisor of `self` and `other`, always non-negative.
    ///
    /// Unlike the free [`gcd`], this does not reject a pair of zeros; it is
    /// meant for call sites where one operand is already known to be nonzero.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    /// Raises `self` to `exp`.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Narrows to an i64, or `None` when the value is out of range.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(self.0.clone()).ok()
    }
}

/// Computes the greatest common divisor of `m` and `n`.
///
/// The result is always non-negative. If exactly one argument is zero the
/// absolute value of the other is returned.
///
/// # Errors
///
/// Returns [`RationalError::InvalidArgument`] if both arguments are zero.
pub fn gcd(m: &Integer, n: &Integer) -> Result<Integer, RationalError> {
    match (m.is_zero(), n.is_zero()) {
        (true, true) => Err(RationalError::InvalidArgument),
        (true, false) => Ok(n.abs()),
        (false, true) => Ok(m.abs()),
        (false, false) => Ok(m.gcd(n)),
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Binary operators for `Integer op Integer` and `&Integer op &Integer`.
// `Div` and `Rem` truncate toward zero, like the primitive integer types.
macro_rules! impl_binop {
    ($($trait:ident, $method:ident, $op:tt;)*) => {$(
        impl $trait for Integer {
            type Output = Integer;

            fn $method(self, rhs: Integer) -> Integer {
                Integer(self.0 $op rhs.0)
            }
        }

        impl $trait for &Integer {
            type Output = Integer;

            fn $method(self, rhs: &Integer) -> Integer {
                Integer(&self.0 $op &rhs.0)
            }
        }
    )*};
}

impl_binop! {
    Add, add, +;
    Sub, sub, -;
    Mul, mul, *;
    Div, div, /;
    Rem, rem, %;
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(IBig::from(value))
    }
}
