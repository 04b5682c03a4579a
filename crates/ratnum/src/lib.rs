//! # ratnum
//!
//! Exact rational numbers with no floating-point rounding.
//!
//! ## Quick Start
//!
//! ```rust
//! use ratnum::prelude::*;
//!
//! let a = Rational::from_i64(1, 2)?;
//! let b = Rational::from_i64(1, 3)?;
//! assert_eq!((&a + &b).to_string(), "5/6");
//! assert!(b.less_than(&a));
//! # Ok::<(), RationalError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use ratnum_integers as integers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use ratnum_integers::{gcd, Integer, Rational, RationalError};
}
