//! Arbitrary precision integers.
//!
//! This module provides a wrapper around `dashu::IBig` with the
//! operations the expression kernel needs: parsing literals in any base,
//! scaling by powers of the base, and exact conversion to decimals.

use dashu::base::Signed as DashuSigned;
use dashu::float::DBig;
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg};

use crate::error::{NumberError, Result};

/// An arbitrary precision integer.
///
/// This type wraps `dashu::IBig`. Its head symbol is `Integer`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Creates an integer from a digit string in the given base.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::MalformedLiteral`] if `digits` is not a valid
    /// integer in `radix`.
    pub fn from_str_radix(digits: &str, radix: u32) -> Result<Self> {
        IBig::from_str_radix(digits, radix)
            .map(Self)
            .map_err(|_| NumberError::MalformedLiteral(format!("{digits} (base {radix})")))
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Number of decimal digits in the magnitude, at least 1.
    #[must_use]
    pub fn decimal_digits(&self) -> usize {
        let text = self.0.to_string();
        text.trim_start_matches('-').len()
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Nearest machine float, infinite when the magnitude is out of range.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        // decimal text parses with correct rounding
        self.0.to_string().parse().unwrap_or(f64::NAN)
    }

    /// The exact value as an unlimited-precision decimal.
    #[must_use]
    pub fn to_decimal(&self) -> DBig {
        DBig::from_parts(self.0.clone(), 0)
    }

    /// Computes self^exp for non-negative exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
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
        write!(f, "{}", self.0)
    }
}

impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Integer> for Integer {
    type Output = Self;

    fn add(self, rhs: &Integer) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        Integer(&self.0 + &rhs.0)
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        Integer(&self.0 * &rhs.0)
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
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

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_radix() {
        let a = Integer::from_str_radix("ff", 16).unwrap();
        assert_eq!(a.to_i64(), Some(255));

        let b = Integer::from_str_radix("123456789012345678901234567890", 10).unwrap();
        assert_eq!(b.to_string(), "123456789012345678901234567890");
        assert_eq!(b.decimal_digits(), 30);
    }

    #[test]
    fn test_malformed_digits() {
        assert!(matches!(
            Integer::from_str_radix("12z", 10),
            Err(NumberError::MalformedLiteral(_))
        ));
    }

    #[test]
    fn test_signum_and_pow() {
        assert_eq!(Integer::new(-7).signum(), -1);
        assert_eq!(Integer::zero().signum(), 0);
        assert_eq!(Integer::new(2).pow(10).to_i64(), Some(1024));
        assert_eq!((-Integer::new(3) * Integer::new(4)).to_i64(), Some(-12));
    }

    #[test]
    fn test_zero_one_and_add() {
        assert!(Integer::zero().is_zero());
        assert!(Integer::one().is_one());
        assert_eq!(Integer::new(5) + Integer::zero(), Integer::new(5));
        assert_eq!(Integer::new(5) + &Integer::new(-8), Integer::new(-3));
        assert_eq!(&Integer::new(2) + &Integer::one(), Integer::new(3));
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(Integer::new(-12).to_f64(), -12.0);
        assert!(Integer::new(10).pow(400).to_f64().is_infinite());
    }
}
