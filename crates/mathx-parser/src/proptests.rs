//! Property-based tests for literal decoding and lowering.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use mathx_core::{same_q, Expr};
    use mathx_numbers::{Integer, Number};

    use crate::{convert_number, decode_string, lower, Lowered, NumberLiteral, SystemResolver};

    fn digit_string(len: std::ops::Range<usize>) -> impl Strategy<Value = String> {
        prop::collection::vec(0u8..10, len)
            .prop_map(|digits| digits.into_iter().map(|d| char::from(b'0' + d)).collect())
    }

    proptest! {
        #[test]
        fn text_without_escapes_is_unchanged(text in "[^\\\\]{0,40}") {
            prop_assert_eq!(decode_string(&text), text);
        }

        #[test]
        fn integer_literals_are_exact(n in 0u64..u64::MAX, base in 2u32..=36) {
            let digits = to_radix(n, base);
            let lowered = convert_number(&NumberLiteral::decimal(digits).with_base(base)).unwrap();
            prop_assert_eq!(lowered, Lowered::Integer(Integer::from(n)));
        }

        #[test]
        fn short_decimals_are_machine_reals(whole in digit_string(1..8), fraction in digit_string(0..8)) {
            let text = format!("{whole}.{fraction}");
            let lowered = convert_number(&NumberLiteral::decimal(text.clone())).unwrap();
            prop_assert_eq!(lowered, Lowered::MachineReal(text.parse().unwrap()));
        }

        #[test]
        fn long_decimals_keep_their_digit_count(head in 1u8..10, rest in digit_string(16..60)) {
            let text = format!("{head}.{rest}");
            let node = NumberLiteral::decimal(text).into();
            let expr = lower(&node, &SystemResolver::default()).unwrap();
            match expr.as_number() {
                Some(Number::PrecisionReal(x)) => {
                    prop_assert_eq!(x.decimal_digits() as usize, rest.len() + 1);
                }
                other => prop_assert!(false, "expected a precision real, got {:?}", other),
            }
        }

        #[test]
        fn lowering_is_deterministic(n in -1000i64..1000, exponent in -5i64..5) {
            let mut literal = NumberLiteral::decimal(n.unsigned_abs().to_string()).with_exponent(exponent);
            if n < 0 {
                literal = literal.negated();
            }
            let node = literal.into();
            let a: Expr = lower(&node, &SystemResolver::default()).unwrap();
            let b: Expr = lower(&node, &SystemResolver::default()).unwrap();
            prop_assert!(same_q(&a, &b));
        }
    }

    fn to_radix(mut n: u64, base: u32) -> String {
        if n == 0 {
            return "0".to_string();
        }
        let mut digits = Vec::new();
        while n > 0 {
            let d = u32::try_from(n % u64::from(base)).unwrap();
            digits.push(char::from_digit(d, base).unwrap());
            n /= u64::from(base);
        }
        digits.iter().rev().collect()
    }
}
