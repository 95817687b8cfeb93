//! Precision inference for number literals.
//!
//! A literal's digits decide what kind of number it becomes. Literals without
//! a point are exact. Literals with a point become machine reals unless they
//! carry more digits than a machine real can reproduce, or a precision or
//! accuracy suffix asks for arbitrary precision.

use mathx_numbers::{reconstruct_digits, Integer, Rational, MACHINE_PRECISION_BITS};

use crate::ast::NumberLiteral;
use crate::error::{LowerError, Result};
use crate::lower::{Lowered, PrecisionSource};

/// How the digits after the back-quote are to be read.
enum Suffix<'a> {
    /// No back-quote.
    Absent,
    /// A bare back-quote.
    Machine,
    /// `` ``N ``: accuracy, digits after the point.
    Accuracy(&'a str),
    /// `` `N ``: precision, significant digits.
    Precision(&'a str),
}

impl<'a> Suffix<'a> {
    fn of(literal: &'a NumberLiteral) -> Self {
        match literal.suffix.as_deref() {
            None => Suffix::Absent,
            Some("") => Suffix::Machine,
            Some(text) => match text.strip_prefix('`') {
                Some(accuracy) => Suffix::Accuracy(accuracy),
                None => Suffix::Precision(text),
            },
        }
    }
}

/// Decimal digits above which a literal is kept at arbitrary precision.
fn machine_threshold() -> f64 {
    f64::from(reconstruct_digits(MACHINE_PRECISION_BITS))
}

/// Classifies a number literal into its intermediate form.
///
/// # Errors
///
/// Returns [`LowerError::MalformedNumber`] when the digits are not valid in
/// the literal's base, the base is outside `2..=36`, or the suffix is not a
/// finite number.
pub fn convert_number(literal: &NumberLiteral) -> Result<Lowered> {
    let malformed = || LowerError::MalformedNumber(describe(literal));
    if !(2..=36).contains(&literal.base) || !valid_digits(&literal.digits, literal.base) {
        return Err(malformed());
    }

    let suffix = Suffix::of(literal);
    let lowered = if literal.digits.contains('.') {
        if literal.base == 10 {
            decimal_real(literal, &literal.digits, &suffix)?
        } else {
            radix_real(literal, &literal.digits, &suffix)?
        }
    } else if matches!(suffix, Suffix::Absent) {
        exact(literal)?
    } else {
        // a suffix makes the literal inexact even without a point
        let digits = format!("{}.", literal.digits);
        if literal.base == 10 {
            decimal_real(literal, &digits, &suffix)?
        } else {
            radix_real(literal, &digits, &suffix)?
        }
    };

    tracing::trace!(
        literal = %describe(literal),
        kind = lowered.tag(),
        "classified number literal"
    );
    Ok(lowered)
}

fn exact(literal: &NumberLiteral) -> Result<Lowered> {
    let malformed = || LowerError::MalformedNumber(describe(literal));
    let magnitude = Integer::from_str_radix(&literal.digits, literal.base)?;
    let value = if literal.sign < 0 { -magnitude } else { magnitude };
    let scale = u32::try_from(literal.exponent.unsigned_abs()).map_err(|_| malformed())?;
    let power = Integer::from(u64::from(literal.base)).pow(scale);

    if literal.exponent < 0 {
        Ok(Lowered::Rational(value, power))
    } else {
        Ok(Lowered::Integer(&value * &power))
    }
}

/// A base-10 literal with a point; `mantissa` includes the point.
fn decimal_real(literal: &NumberLiteral, mantissa: &str, suffix: &Suffix<'_>) -> Result<Lowered> {
    let mut text = mantissa.to_string();
    if literal.exponent != 0 {
        text.push_str(&format!("E{}", literal.exponent));
    }
    let magnitude: f64 = text
        .parse()
        .map_err(|_| LowerError::MalformedNumber(describe(literal)))?;
    let signed = |x: f64| if literal.sign < 0 { -x } else { x };
    let decimal = || {
        PrecisionSource::DecimalString(if literal.sign < 0 {
            format!("-{text}")
        } else {
            text.clone()
        })
    };

    match suffix {
        Suffix::Absent => {
            let digits = count_to_f64(mantissa.chars().count() - 1);
            if digits < machine_threshold() {
                Ok(Lowered::MachineReal(signed(magnitude)))
            } else {
                Ok(Lowered::PrecisionReal(decimal(), digits))
            }
        }
        Suffix::Machine => Ok(Lowered::MachineReal(signed(magnitude))),
        Suffix::Accuracy(accuracy) => {
            let accuracy = suffix_number(literal, accuracy)?;
            let digits = if magnitude == 0.0 {
                accuracy
            } else {
                accuracy + magnitude.log10()
            };
            Ok(Lowered::PrecisionReal(decimal(), finite(literal, digits)?))
        }
        Suffix::Precision(precision) => {
            let digits = suffix_number(literal, precision)?;
            Ok(Lowered::PrecisionReal(decimal(), digits))
        }
    }
}

/// A literal in a base other than 10 with a point; `mantissa` includes the
/// point. The value is kept exact and rounded on materialization.
fn radix_real(literal: &NumberLiteral, mantissa: &str, suffix: &Suffix<'_>) -> Result<Lowered> {
    let malformed = || LowerError::MalformedNumber(describe(literal));
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let fraction_len = i64::try_from(fraction.len()).map_err(|_| malformed())?;

    let magnitude = Integer::from_str_radix(&format!("{whole}{fraction}"), literal.base)?;
    let significand = if literal.sign < 0 { -magnitude } else { magnitude };
    let exponent = literal.exponent - fraction_len;
    let scale = u32::try_from(exponent.unsigned_abs()).map_err(|_| malformed())?;
    let power = Integer::from(u64::from(literal.base)).pow(scale);
    let (p, q) = if exponent >= 0 {
        (&significand * &power, Integer::from(1))
    } else {
        (significand, power)
    };

    let x = Rational::new(p.clone(), q.clone())?.to_f64();
    let log_base = f64::from(literal.base).log10();
    let with_magnitude = |digits: f64| {
        if x == 0.0 {
            digits
        } else {
            digits + x.abs().log10()
        }
    };

    let digits = match suffix {
        Suffix::Absent => {
            let digits = with_magnitude(count_to_f64(fraction.len()) * log_base);
            (digits >= machine_threshold()).then_some(digits)
        }
        Suffix::Machine => None,
        Suffix::Accuracy(accuracy) => {
            Some(with_magnitude(suffix_number(literal, accuracy)? * log_base))
        }
        Suffix::Precision(precision) => Some(suffix_number(literal, precision)? * log_base),
    };

    match digits {
        Some(digits) => Ok(Lowered::PrecisionReal(
            PrecisionSource::Rational(p, q),
            finite(literal, digits)?,
        )),
        None => Ok(Lowered::MachineReal(x)),
    }
}

/// Digits of `base` with at most one point and at least one digit.
fn valid_digits(digits: &str, base: u32) -> bool {
    let mut points = 0;
    let mut count = 0;
    for c in digits.chars() {
        if c == '.' {
            points += 1;
        } else if c.is_digit(base) {
            count += 1;
        } else {
            return false;
        }
    }
    points <= 1 && count > 0
}

fn suffix_number(literal: &NumberLiteral, text: &str) -> Result<f64> {
    let value: f64 = text
        .parse()
        .map_err(|_| LowerError::MalformedNumber(describe(literal)))?;
    finite(literal, value)
}

fn finite(literal: &NumberLiteral, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LowerError::MalformedNumber(describe(literal)))
    }
}

#[allow(clippy::cast_precision_loss)]
fn count_to_f64(count: usize) -> f64 {
    count as f64
}

/// The literal as it would be written, e.g. ``-16^^ff.8*^2`30``.
fn describe(literal: &NumberLiteral) -> String {
    let mut out = String::new();
    if literal.sign < 0 {
        out.push('-');
    }
    if literal.base != 10 {
        out.push_str(&format!("{}^^", literal.base));
    }
    out.push_str(&literal.digits);
    if let Some(suffix) = &literal.suffix {
        out.push('`');
        out.push_str(suffix);
    }
    if literal.exponent != 0 {
        out.push_str(&format!("*^{}", literal.exponent));
    }
    out
}
