//! Precision queries and precision-reducing coercion.

use crate::complex::Complex;
use crate::error::{NumberError, Result};
use crate::number::Number;
use crate::precision::{bits_to_decimal_digits, MACHINE_PRECISION_BITS};
use crate::real::{MachineReal, PrecisionReal};

/// Binary precision of a real number.
///
/// # Errors
///
/// Returns [`NumberError::UnsupportedType`] for exact and complex numbers.
pub fn precision_of(number: &Number) -> Result<u32> {
    match number {
        Number::MachineReal(_) => Ok(MACHINE_PRECISION_BITS),
        Number::PrecisionReal(x) => Ok(x.bits()),
        other => Err(NumberError::UnsupportedType {
            kind: other.kind().name(),
            operation: "precision",
        }),
    }
}

/// Rounds a number to machine precision, or to `digits` decimal digits.
///
/// With `digits` given, exact and machine values become precision reals at
/// exactly that many digits, while a precision real is only ever rounded
/// down: its precision becomes the smaller of its own and `digits`. Complex
/// numbers are coerced part by part and rebuilt.
///
/// # Errors
///
/// Returns [`NumberError::Overflow`] when a value is out of the machine
/// range.
pub fn coerce(number: &Number, digits: Option<u32>) -> Result<Number> {
    match (number, digits) {
        (Number::Complex(z), _) => {
            Complex::new(coerce(z.real(), digits)?, coerce(z.imag(), digits)?)
        }
        (Number::MachineReal(x), None) => Ok(Number::MachineReal(*x)),
        (real, None) => {
            let value = real.to_f64().unwrap_or(f64::NAN);
            Ok(MachineReal::new(value)?.into())
        }
        (Number::Integer(n), Some(digits)) => {
            Ok(PrecisionReal::with_digits(n.to_decimal(), digits).into())
        }
        (Number::Rational(r), Some(digits)) => Ok(PrecisionReal::from_rational(r, digits).into()),
        (Number::MachineReal(x), Some(digits)) => {
            Ok(PrecisionReal::from_rational(&x.to_exact(), digits).into())
        }
        (Number::PrecisionReal(x), Some(digits)) => {
            let own = bits_to_decimal_digits(x.bits());
            if digits >= own {
                Ok(number.clone())
            } else {
                Ok(PrecisionReal::with_digits(x.value().clone(), digits).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Integer, Rational};

    fn precise(text: &str, digits: u32) -> Number {
        PrecisionReal::parse(text, digits).unwrap().into()
    }

    #[test]
    fn test_precision_of() {
        let x = Number::from(MachineReal::new(1.0).unwrap());
        assert_eq!(precision_of(&x), Ok(53));
        assert_eq!(precision_of(&precise("1.5", 30)), Ok(103));
        assert_eq!(
            precision_of(&Number::from(1)),
            Err(NumberError::UnsupportedType {
                kind: "Integer",
                operation: "precision",
            })
        );
    }

    #[test]
    fn test_coerce_to_machine() {
        let r = Number::from(Rational::from_i64(1, 4).unwrap());
        assert!(matches!(coerce(&r, None).unwrap(), Number::MachineReal(x) if x.value() == 0.25));

        let p = precise("2.5", 40);
        assert!(matches!(coerce(&p, None).unwrap(), Number::MachineReal(x) if x.value() == 2.5));

        // 1 + 2^-53 + 2^-100 lies above the midpoint to the next double
        let two = Integer::new(2);
        let denominator = two.pow(100);
        let numerator = &denominator + &(two.pow(47) + Integer::new(1));
        let r = Number::from(Rational::new(numerator, denominator).unwrap());
        assert!(matches!(
            coerce(&r, None).unwrap(),
            Number::MachineReal(x) if x.value() == 1.0 + f64::EPSILON
        ));

        let huge = Number::from(Integer::new(10).pow(400));
        assert_eq!(coerce(&huge, None).unwrap_err(), NumberError::Overflow);
    }

    #[test]
    fn test_coerce_to_digits() {
        match coerce(&Number::from(7), Some(30)).unwrap() {
            Number::PrecisionReal(x) => assert_eq!(x.decimal_digits(), 30),
            other => panic!("expected a precision real, got {other:?}"),
        }

        let machine = Number::from(MachineReal::new(0.5).unwrap());
        match coerce(&machine, Some(25)).unwrap() {
            Number::PrecisionReal(x) => {
                assert_eq!(x.decimal_digits(), 25);
                assert_eq!(x.to_exact(), Rational::from_i64(1, 2).unwrap());
            }
            other => panic!("expected a precision real, got {other:?}"),
        }
    }

    #[test]
    fn test_precision_never_increases() {
        let x = precise("1.234567890123456789", 10);
        match coerce(&x, Some(50)).unwrap() {
            Number::PrecisionReal(y) => assert_eq!(y.decimal_digits(), 10),
            other => panic!("expected a precision real, got {other:?}"),
        }
        match coerce(&x, Some(4)).unwrap() {
            Number::PrecisionReal(y) => {
                assert_eq!(y.decimal_digits(), 4);
                assert_eq!(y.to_exact(), Rational::from_i64(1235, 1000).unwrap());
            }
            other => panic!("expected a precision real, got {other:?}"),
        }
    }

    #[test]
    fn test_coerce_complex_componentwise() {
        let z = Complex::new(Number::from(1), Number::from(Rational::from_i64(1, 2).unwrap()))
            .unwrap();
        let Number::Complex(w) = coerce(&z, None).unwrap() else {
            panic!("expected a complex number");
        };
        assert!(matches!(w.real(), Number::MachineReal(x) if x.value() == 1.0));
        assert!(matches!(w.imag(), Number::MachineReal(x) if x.value() == 0.5));

        let Number::Complex(w) = coerce(&z, Some(20)).unwrap() else {
            panic!("expected a complex number");
        };
        assert!(matches!(w.real(), Number::PrecisionReal(_)));
        assert!(matches!(w.imag(), Number::PrecisionReal(_)));
    }
}
