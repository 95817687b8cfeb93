//! # mathx-numbers
//!
//! The numeric tower of the mathx expression kernel.
//!
//! This crate wraps `dashu` to provide:
//! - Exact integers (`Integer`) and rationals (`Rational`)
//! - Finite machine reals (`MachineReal`)
//! - Decimal reals with explicit binary precision (`PrecisionReal`)
//! - Complex numbers over the real kinds (`Complex`)
//!
//! ## Precision
//!
//! Precision is tracked in bits and converted to decimal digits at the
//! surface. `make_real` yields a machine real for anything at or below 53
//! bits; coercion can lower the precision of a number but never raise it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod coerce;
pub mod complex;
pub mod error;
pub mod integer;
pub mod number;
pub mod precision;
pub mod rational;
pub mod real;

#[cfg(test)]
mod proptests;

pub use coerce::{coerce, precision_of};
pub use complex::Complex;
pub use error::{NumberError, Result};
pub use integer::Integer;
pub use number::{Number, NumberKind};
pub use precision::{
    bits_to_decimal_digits, decimal_digits_to_bits, digits_from_f64, reconstruct_digits,
    LOG2_10, MACHINE_EPSILON, MACHINE_PRECISION_BITS,
};
pub use rational::Rational;
pub use real::{make_real, parse_decimal, MachineReal, PrecisionReal, RealInput};

pub use dashu::float::DBig;
