//! Machine and arbitrary-precision reals.
//!
//! A real is either a [`MachineReal`] (an IEEE double that is always finite)
//! or a [`PrecisionReal`] (a decimal float carrying its precision in bits).
//! Which one a given input becomes is decided by [`make_real`]: anything at or
//! below [`MACHINE_PRECISION_BITS`] is a machine real.

use dashu::float::DBig;
use dashu::integer::IBig;
use std::fmt;

use crate::error::{NumberError, Result};
use crate::number::Number;
use crate::precision::{
    bits_to_decimal_digits, decimal_digits_to_bits, MACHINE_PRECISION_BITS,
};
use crate::rational::decimal_to_f64;
use crate::{Integer, Rational};

/// A machine-precision real number.
///
/// Invariant: the value is finite.
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct MachineReal(f64);

impl MachineReal {
    /// Wraps a finite `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::Overflow`] for infinities and NaN.
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(NumberError::Overflow)
        }
    }

    /// Parses decimal text (`-1.25`, `3e-7`, `2.5*^10`) to the nearest
    /// machine real.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::MalformedLiteral`] for text that is not a
    /// decimal number, and [`NumberError::Overflow`] when it is out of range.
    pub fn parse(text: &str) -> Result<Self> {
        let (significand, exponent) = parse_decimal(text)?;
        Self::new(decimal_to_f64(&DBig::from_parts(significand, exponent)))
    }

    /// The wrapped value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// The exact value of the double as a rational.
    #[must_use]
    pub fn to_exact(self) -> Rational {
        let bits = self.0.to_bits();
        let negative = bits >> 63 == 1;
        let biased = i64::try_from((bits >> 52) & 0x7ff).unwrap_or_default();
        let fraction = bits & ((1 << 52) - 1);
        // subnormals have no implicit leading bit
        let (mantissa, exponent) = if biased == 0 {
            (fraction, -1074)
        } else {
            (fraction | (1 << 52), biased - 1075)
        };
        let significand = IBig::from(mantissa);
        let significand = if negative { -significand } else { significand };
        Rational::from_binary_parts(significand, exponent)
    }
}

impl fmt::Debug for MachineReal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MachineReal({:?})", self.0)
    }
}

impl fmt::Display for MachineReal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 && self.0.abs() < 1e16 {
            write!(f, "{}.", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// An arbitrary-precision real number.
///
/// The value is stored as a decimal float rounded to
/// `bits_to_decimal_digits(bits)` significant digits.
#[derive(Clone)]
pub struct PrecisionReal {
    value: DBig,
    bits: u32,
}

impl PrecisionReal {
    /// Rounds `value` to the decimal significance of `bits`.
    #[must_use]
    pub fn new(value: DBig, bits: u32) -> Self {
        let digits = bits_to_decimal_digits(bits) as usize;
        Self {
            value: value.with_precision(digits).value(),
            bits,
        }
    }

    /// Rounds `value` to `digits` significant decimal digits.
    #[must_use]
    pub fn with_digits(value: DBig, digits: u32) -> Self {
        Self::new(value, decimal_digits_to_bits(digits))
    }

    /// Rounds an exact rational to `digits` significant decimal digits.
    #[must_use]
    pub fn from_rational(value: &Rational, digits: u32) -> Self {
        Self::with_digits(value.to_decimal(digits as usize), digits)
    }

    /// Parses decimal text at `digits` significant decimal digits.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::MalformedLiteral`] for text that is not a
    /// decimal number.
    pub fn parse(text: &str, digits: u32) -> Result<Self> {
        let (significand, exponent) = parse_decimal(text)?;
        Ok(Self::with_digits(
            DBig::from_parts(significand, exponent),
            digits,
        ))
    }

    /// Precision in bits.
    #[must_use]
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Precision in decimal digits.
    #[must_use]
    pub fn decimal_digits(&self) -> u32 {
        bits_to_decimal_digits(self.bits)
    }

    /// The rounded decimal value.
    #[must_use]
    pub fn value(&self) -> &DBig {
        &self.value
    }

    /// The exact value of the stored decimal as a rational.
    #[must_use]
    pub fn to_exact(&self) -> Rational {
        let repr = self.value.repr();
        Rational::from_decimal_parts(repr.significand().clone(), repr.exponent())
    }

    /// Nearest machine float, infinite when out of range.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        decimal_to_f64(&self.value)
    }
}

impl PartialEq for PrecisionReal {
    fn eq(&self, other: &Self) -> bool {
        self.to_exact() == other.to_exact()
    }
}

impl fmt::Debug for PrecisionReal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrecisionReal({}, {} bits)", self.value, self.bits)
    }
}

impl fmt::Display for PrecisionReal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}`{}", self.value, self.decimal_digits())
    }
}

/// The shapes a real can be built from.
#[derive(Clone, Debug)]
pub enum RealInput<'a> {
    /// Decimal literal text, e.g. `"0.000123"` or `"1.5e10"`.
    Text(&'a str),
    /// A decimal float; its own precision is used when none is requested.
    Decimal(DBig),
    /// A native double.
    Machine(f64),
    /// An exact integer.
    Integer(Integer),
    /// An exact rational.
    Rational(Rational),
}

/// Builds a machine or arbitrary-precision real from `input`.
///
/// With `bits` unspecified the precision is inferred from the input: text
/// by its count of significant digits, decimals by their own precision, and
/// native or exact values default to machine precision. The result is a
/// [`MachineReal`] when the resolved precision is at most
/// [`MACHINE_PRECISION_BITS`], and a [`PrecisionReal`] otherwise.
///
/// # Errors
///
/// Returns [`NumberError::Overflow`] when a machine real would not be finite
/// and [`NumberError::MalformedLiteral`] for unparseable text.
pub fn make_real(input: RealInput<'_>, bits: Option<u32>) -> Result<Number> {
    let above_machine = |bits: u32| bits > MACHINE_PRECISION_BITS;
    match input {
        RealInput::Text(text) => {
            let bits = match bits {
                Some(bits) => bits,
                None => infer_text_bits(text)?,
            };
            if above_machine(bits) {
                let (significand, exponent) = parse_decimal(text)?;
                Ok(PrecisionReal::new(DBig::from_parts(significand, exponent), bits).into())
            } else {
                Ok(MachineReal::parse(text)?.into())
            }
        }
        RealInput::Decimal(value) => {
            let bits = bits.unwrap_or_else(|| decimal_bits(&value));
            if above_machine(bits) {
                Ok(PrecisionReal::new(value, bits).into())
            } else {
                Ok(MachineReal::new(decimal_to_f64(&value))?.into())
            }
        }
        RealInput::Machine(value) => {
            let machine = MachineReal::new(value)?;
            match bits {
                // shortest round-trip text, so 0.1 means 0.1 and not 0.1000000000000000055...
                Some(bits) if above_machine(bits) => {
                    make_real(RealInput::Text(&value.to_string()), Some(bits))
                }
                _ => Ok(machine.into()),
            }
        }
        RealInput::Integer(value) => match bits {
            Some(bits) if above_machine(bits) => {
                Ok(PrecisionReal::new(value.to_decimal(), bits).into())
            }
            _ => Ok(MachineReal::new(value.to_f64())?.into()),
        },
        RealInput::Rational(value) => match bits {
            Some(bits) if above_machine(bits) => {
                let digits = bits_to_decimal_digits(bits) as usize;
                Ok(PrecisionReal::new(value.to_decimal(digits), bits).into())
            }
            _ => Ok(MachineReal::new(value.to_f64())?.into()),
        },
    }
}

/// Precision implied by a decimal literal.
///
/// A pure-zero literal (`0.000`) takes its precision from its length, never
/// below machine precision. Otherwise the significant digit count is used,
/// widened to machine-equivalent digits so short literals stay machine reals.
fn infer_text_bits(text: &str) -> Result<u32> {
    let (mantissa, _) = split_exponent(text);
    let significant = mantissa
        .chars()
        .filter(char::is_ascii_digit)
        .skip_while(|&c| c == '0')
        .count();
    if significant == 0 {
        let width = digit_count_u32(text.replace("0.", "").len());
        Ok(decimal_digits_to_bits(width).max(MACHINE_PRECISION_BITS))
    } else {
        let floor = bits_to_decimal_digits(MACHINE_PRECISION_BITS);
        Ok(decimal_digits_to_bits(digit_count_u32(significant).max(floor)))
    }
}

fn decimal_bits(value: &DBig) -> u32 {
    let digits = match value.precision() {
        0 => value.repr().digits(),
        precision => precision,
    };
    decimal_digits_to_bits(digit_count_u32(digits))
}

fn digit_count_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Splits `1.5e10` / `1.5*^10` into mantissa and exponent text.
fn split_exponent(text: &str) -> (&str, Option<&str>) {
    if let Some((mantissa, exponent)) = text.split_once("*^") {
        return (mantissa, Some(exponent));
    }
    match text.find(['e', 'E']) {
        Some(at) => (&text[..at], Some(&text[at + 1..])),
        None => (text, None),
    }
}

/// Parses decimal text into `(significand, exponent)` with
/// `value = significand * 10^exponent`.
///
/// Accepts an optional sign, digits with at most one decimal point (at least
/// one digit overall), and an optional `e`/`E`/`*^` exponent.
///
/// # Errors
///
/// Returns [`NumberError::MalformedLiteral`] when `text` is not of that form.
pub fn parse_decimal(text: &str) -> Result<(IBig, isize)> {
    let malformed = || NumberError::MalformedLiteral(text.to_string());
    let trimmed = text.trim();
    let (mantissa, exponent) = split_exponent(trimmed);
    let exponent: isize = match exponent {
        Some(exp) => exp.trim_start_matches('+').parse().map_err(|_| malformed())?,
        None => 0,
    };

    let (negative, unsigned) = match mantissa.as_bytes().first() {
        Some(b'-') => (true, &mantissa[1..]),
        Some(b'+') => (false, &mantissa[1..]),
        _ => (false, mantissa),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.len() + fraction.len() == 0 || !all_digits(whole) || !all_digits(fraction) {
        return Err(malformed());
    }

    let digits = format!("{whole}{fraction}");
    let magnitude = IBig::from_str_radix(&digits, 10).map_err(|_| malformed())?;
    let significand = if negative { -magnitude } else { magnitude };
    let scale = isize::try_from(fraction.len()).map_err(|_| malformed())?;
    Ok((significand, exponent - scale))
}
