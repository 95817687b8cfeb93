//! Arbitrary precision rational numbers.
//!
//! Exact ratios, plus the exact and rounded conversions the numeric tower
//! performs when promoting reals for comparison or coercing to a precision.

use dashu::base::{Signed as DashuSigned, UnsignedAbs};
use dashu::float::DBig;
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul};

use crate::error::{NumberError, Result};
use crate::Integer;

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::ZeroDenominator`] if the denominator is zero.
    pub fn new(numerator: Integer, denominator: Integer) -> Result<Self> {
        if denominator.is_zero() {
            return Err(NumberError::ZeroDenominator);
        }
        let sign_flip = denominator.is_negative();
        let ratio = RBig::from_parts(
            numerator.into_inner(),
            denominator.into_inner().unsigned_abs(),
        );
        Ok(Self(if sign_flip { -ratio } else { ratio }))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self(RBig::from(n.into_inner()))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::ZeroDenominator`] if the denominator is zero.
    pub fn from_i64(numerator: i64, denominator: i64) -> Result<Self> {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// `significand * 2^exponent`, exactly.
    #[must_use]
    pub fn from_binary_parts(significand: IBig, exponent: i64) -> Self {
        Self::scaled(significand, &UBig::from(2u8), exponent)
    }

    /// `significand * 10^exponent`, exactly.
    #[must_use]
    pub fn from_decimal_parts(significand: IBig, exponent: isize) -> Self {
        Self::scaled(significand, &UBig::from(10u8), exponent as i64)
    }

    fn scaled(significand: IBig, base: &UBig, exponent: i64) -> Self {
        let scale = base.pow(exponent.unsigned_abs() as usize);
        if exponent >= 0 {
            Self(RBig::from(significand * IBig::from(scale)))
        } else {
            Self(RBig::from_parts(significand, scale))
        }
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        Integer::from(self.0.numerator().clone())
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        Integer::from(IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns the inner `dashu::RBig`.
    #[must_use]
    pub fn into_inner(self) -> RBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::RBig`.
    #[must_use]
    pub fn as_inner(&self) -> &RBig {
        &self.0
    }

    /// Rounds to `digits` significant decimal digits.
    ///
    /// `digits` is clamped to at least 1.
    #[must_use]
    pub fn to_decimal(&self, digits: usize) -> DBig {
        let digits = digits.max(1);
        let numerator = self.numerator();
        let denominator = self.denominator();
        // Wide enough that neither operand is rounded before dividing.
        let working = digits
            .max(numerator.decimal_digits())
            .max(denominator.decimal_digits())
            + 2;
        let quotient = numerator.to_decimal().with_precision(working).value()
            / denominator.to_decimal().with_precision(working).value();
        quotient.with_precision(digits).value()
    }

    /// Nearest machine float, infinite when out of range.
    ///
    /// Rounds once, to nearest.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().value()
    }
}

/// Nearest machine float to a decimal value, via its exact digit string.
pub(crate) fn decimal_to_f64(value: &DBig) -> f64 {
    let repr = value.repr();
    format!("{}e{}", repr.significand(), repr.exponent())
        .parse()
        .unwrap_or(f64::NAN)
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({})", self.0)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}
