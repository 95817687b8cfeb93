//! The closed sum type over every kind of number.

use num_traits::Zero;
use std::fmt;
use std::sync::Arc;

use crate::complex::Complex;
use crate::real::{MachineReal, PrecisionReal};
use crate::{Integer, Rational};

/// A number of any kind in the tower.
#[derive(Clone, Debug)]
pub enum Number {
    /// Exact integer.
    Integer(Integer),
    /// Exact ratio in lowest terms.
    Rational(Rational),
    /// Finite IEEE double.
    MachineReal(MachineReal),
    /// Decimal float with explicit precision.
    PrecisionReal(PrecisionReal),
    /// Pair of non-complex numbers; never has an exact zero imaginary part.
    Complex(Arc<Complex>),
}

/// Discriminant of [`Number`], naming each kind's head symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// See [`Number::Integer`].
    Integer,
    /// See [`Number::Rational`].
    Rational,
    /// See [`Number::MachineReal`].
    MachineReal,
    /// See [`Number::PrecisionReal`].
    PrecisionReal,
    /// See [`Number::Complex`].
    Complex,
}

impl NumberKind {
    /// Short name of the head symbol for numbers of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            NumberKind::Integer => "Integer",
            NumberKind::Rational => "Rational",
            NumberKind::MachineReal => "MachineReal",
            NumberKind::PrecisionReal => "PrecisionReal",
            NumberKind::Complex => "Complex",
        }
    }
}

impl Number {
    /// The kind of this number.
    #[must_use]
    pub fn kind(&self) -> NumberKind {
        match self {
            Number::Integer(_) => NumberKind::Integer,
            Number::Rational(_) => NumberKind::Rational,
            Number::MachineReal(_) => NumberKind::MachineReal,
            Number::PrecisionReal(_) => NumberKind::PrecisionReal,
            Number::Complex(_) => NumberKind::Complex,
        }
    }

    /// True for the exact integer zero only.
    #[must_use]
    pub fn is_exact_zero(&self) -> bool {
        matches!(self, Number::Integer(n) if n.is_zero())
    }

    /// Nearest machine float of a real number; `None` for complex numbers.
    ///
    /// The result may be infinite for exact values beyond the double range.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Number::Integer(n) => Some(n.to_f64()),
            Number::Rational(r) => Some(r.to_f64()),
            Number::MachineReal(x) => Some(x.value()),
            Number::PrecisionReal(x) => Some(x.to_f64()),
            Number::Complex(_) => None,
        }
    }

    /// Real and imaginary parts as machine floats.
    #[must_use]
    pub fn to_complex_f64(&self) -> (f64, f64) {
        match self {
            Number::Complex(z) => (
                z.real().to_f64().unwrap_or(f64::NAN),
                z.imag().to_f64().unwrap_or(f64::NAN),
            ),
            real => (real.to_f64().unwrap_or(f64::NAN), 0.0),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{n}"),
            Number::Rational(r) => write!(f, "{r}"),
            Number::MachineReal(x) => write!(f, "{x}"),
            Number::PrecisionReal(x) => write!(f, "{x}"),
            Number::Complex(z) => write!(f, "{z}"),
        }
    }
}

impl From<Integer> for Number {
    fn from(value: Integer) -> Self {
        Number::Integer(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(Integer::new(value))
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(Integer::from(value))
    }
}

impl From<Rational> for Number {
    fn from(value: Rational) -> Self {
        Number::Rational(value)
    }
}

impl From<MachineReal> for Number {
    fn from(value: MachineReal) -> Self {
        Number::MachineReal(value)
    }
}

impl From<PrecisionReal> for Number {
    fn from(value: PrecisionReal) -> Self {
        Number::PrecisionReal(value)
    }
}
