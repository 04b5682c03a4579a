//! # ratnum-integers
//!
//! Exact rational arithmetic over arbitrary precision integers.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`) and their `gcd`
//! - Rationals kept in canonical form (`Rational`)
//!
//! Canonical form means a positive denominator coprime to the numerator.
//! Every constructor and operator routes through the same reduction step, so
//! equality is plain component comparison.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::RationalError;
pub use integer::{gcd, Integer};
pub use rational::Rational;
