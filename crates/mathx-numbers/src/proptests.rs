//! Property-based tests for the numeric tower.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        bits_to_decimal_digits, coerce, decimal_digits_to_bits, Complex, Integer, MachineReal,
        Number, PrecisionReal, Rational,
    };

    // Strategy for finite doubles across most of the exponent range
    fn finite_f64() -> impl Strategy<Value = f64> {
        prop_oneof![
            -1e300f64..1e300f64,
            -1.0f64..1.0f64,
            Just(0.0),
            Just(f64::MIN_POSITIVE),
        ]
    }

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn machine_value(number: &Number) -> Option<f64> {
        match number {
            Number::MachineReal(x) => Some(x.value()),
            _ => None,
        }
    }

    proptest! {
        // Precision conversions

        #[test]
        fn digits_conversion_idempotent(bits in 1u32..100_000) {
            let once = bits_to_decimal_digits(decimal_digits_to_bits(bits_to_decimal_digits(bits)));
            let twice = bits_to_decimal_digits(decimal_digits_to_bits(once));
            prop_assert_eq!(once, twice);
            prop_assert!(once >= 1);
        }

        #[test]
        fn digits_survive_round_trip(digits in 1u32..10_000) {
            prop_assert_eq!(bits_to_decimal_digits(decimal_digits_to_bits(digits)), digits);
        }

        // Machine reals

        #[test]
        fn machine_exact_value_round_trips(x in finite_f64()) {
            let machine = MachineReal::new(x).unwrap();
            prop_assert_eq!(machine.to_exact().to_f64(), x);
        }

        #[test]
        fn machine_coercion_idempotent(x in finite_f64()) {
            let number = Number::from(MachineReal::new(x).unwrap());
            let once = coerce(&number, None).unwrap();
            let twice = coerce(&once, None).unwrap();
            prop_assert_eq!(machine_value(&once), machine_value(&twice));
        }

        #[test]
        fn rational_coercion_idempotent(num in small_int(), den in non_zero_int()) {
            let number = Number::from(Rational::from_i64(num, den).unwrap());
            let once = coerce(&number, None).unwrap();
            let twice = coerce(&once, None).unwrap();
            prop_assert_eq!(machine_value(&once), machine_value(&twice));
            #[allow(clippy::cast_precision_loss)]
            let expected = num as f64 / den as f64;
            prop_assert_eq!(machine_value(&once), Some(expected));
        }

        #[test]
        fn precision_coercion_idempotent(whole in 0u64..1_000_000, digits in 1u32..80) {
            let text = format!("{whole}.142857142857142857142857142857");
            let number = Number::from(PrecisionReal::parse(&text, digits).unwrap());
            let once = coerce(&number, None).unwrap();
            let twice = coerce(&once, None).unwrap();
            prop_assert!(machine_value(&once).is_some());
            prop_assert_eq!(machine_value(&once), machine_value(&twice));
        }

        #[test]
        fn complex_coercion_idempotent(re in small_int(), im in non_zero_int(), x in finite_f64()) {
            let exact = Complex::new(Number::from(re), Number::from(im)).unwrap();
            let mixed = Complex::new(
                Number::from(MachineReal::new(x).unwrap()),
                Number::from(Rational::from_i64(im, 7).unwrap()),
            )
            .unwrap();
            for z in [exact, mixed] {
                let once = coerce(&z, None).unwrap();
                let twice = coerce(&once, None).unwrap();
                let (Number::Complex(a), Number::Complex(b)) = (&once, &twice) else {
                    return Err(TestCaseError::fail("expected complex numbers"));
                };
                prop_assert_eq!(machine_value(a.real()), machine_value(b.real()));
                prop_assert_eq!(machine_value(a.imag()), machine_value(b.imag()));
                prop_assert!(machine_value(a.real()).is_some());
                prop_assert!(machine_value(a.imag()).is_some());
            }
        }

        // Precision reals

        #[test]
        fn coercion_never_raises_precision(own in 1u32..80, target in 1u32..160) {
            let x = Number::from(PrecisionReal::parse("2.718281828459045235360287471352662497757", own).unwrap());
            match coerce(&x, Some(target)).unwrap() {
                Number::PrecisionReal(y) => {
                    prop_assert_eq!(y.decimal_digits(), own.min(target));
                }
                other => prop_assert!(false, "expected a precision real, got {:?}", other),
            }
        }

        #[test]
        fn integer_coercion_is_exact_when_wide_enough(n in small_int(), digits in 5u32..60) {
            match coerce(&Number::from(n), Some(digits)).unwrap() {
                Number::PrecisionReal(y) => {
                    prop_assert_eq!(y.to_exact(), Rational::from_integer(Integer::new(n)));
                }
                other => prop_assert!(false, "expected a precision real, got {:?}", other),
            }
        }

        // Complex invariants

        #[test]
        fn complex_never_has_exact_zero_imaginary(re in small_int(), im in small_int()) {
            let z = Complex::new(Number::from(re), Number::from(im)).unwrap();
            match z {
                Number::Complex(z) => {
                    prop_assert!(im != 0);
                    prop_assert!(!z.imag().is_exact_zero());
                }
                Number::Integer(n) => {
                    prop_assert_eq!(im, 0);
                    prop_assert_eq!(n, Integer::new(re));
                }
                other => prop_assert!(false, "unexpected {:?}", other),
            }
        }

        #[test]
        fn complex_never_mixes_machine_parts(re in finite_f64(), num in small_int(), den in non_zero_int()) {
            prop_assume!(num != 0);
            let exact = Number::from(Rational::from_i64(num, den).unwrap());
            let machine = Number::from(MachineReal::new(re).unwrap());
            for z in [
                Complex::new(machine.clone(), exact.clone()).unwrap(),
                Complex::new(exact.clone(), machine.clone()).unwrap(),
            ] {
                let Number::Complex(z) = z else {
                    return Err(TestCaseError::fail("expected a complex number"));
                };
                prop_assert!(matches!(z.real(), Number::MachineReal(_)));
                prop_assert!(matches!(z.imag(), Number::MachineReal(_)));
            }
        }
    }
}
