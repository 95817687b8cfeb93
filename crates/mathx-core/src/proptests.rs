//! Property-based tests for interning and structural identity.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use mathx_numbers::{Complex, MachineReal, Number, PrecisionReal, Rational};

    use crate::{intern_symbol, same_q, Expr};

    fn short_name() -> impl Strategy<Value = String> {
        "[a-z][a-zA-Z0-9]{0,7}"
    }

    fn context() -> impl Strategy<Value = String> {
        prop_oneof![Just("Global".to_string()), Just("System".to_string()), "[A-Z][a-z]{1,5}"]
    }

    fn real() -> impl Strategy<Value = Number> {
        prop_oneof![
            (-1000i64..1000).prop_map(Number::from),
            (-1000i64..1000, 1i64..100)
                .prop_map(|(n, d)| Number::from(Rational::from_i64(n, d).unwrap())),
            (-1e6f64..1e6).prop_map(|x| Number::from(MachineReal::new(x).unwrap())),
            ("-?[0-9]{1,12}\\.[0-9]{1,30}", 1u32..60)
                .prop_map(|(text, digits)| {
                    Number::from(PrecisionReal::parse(&text, digits).unwrap())
                }),
        ]
    }

    fn number() -> impl Strategy<Value = Number> {
        prop_oneof![
            3 => real(),
            1 => (real(), real()).prop_map(|(re, im)| Complex::new(re, im).unwrap()),
        ]
    }

    fn atom() -> impl Strategy<Value = Expr> {
        prop_oneof![
            3 => number().prop_map(Expr::Number),
            1 => "[a-z ]{0,6}".prop_map(Expr::string),
            1 => (context(), short_name())
                .prop_map(|(c, n)| Expr::symbol(&format!("{c}`{n}")).unwrap()),
        ]
    }

    fn expr() -> impl Strategy<Value = Expr> {
        atom().prop_recursive(4, 64, 5, |inner| {
            (inner.clone(), prop::collection::vec(inner, 0..5))
                .prop_map(|(head, leaves)| Expr::expression(head, leaves))
        })
    }

    /// Rebuilds `e` from scratch so no node is shared with it.
    fn deep_copy(e: &Expr) -> Expr {
        match e {
            Expr::Compound(c) => {
                Expr::expression(deep_copy(c.head()), c.leaves().iter().map(deep_copy))
            }
            Expr::String(s) => Expr::string(s.to_string()),
            Expr::Number(Number::Integer(n)) => Expr::Number(Number::Integer(n.clone())),
            other => other.clone(),
        }
    }

    proptest! {
        #[test]
        fn interning_returns_identical_symbol(ctx in context(), name in short_name()) {
            let raw = format!("{ctx}`{name}");
            let a = intern_symbol(&raw).unwrap();
            let b = intern_symbol(&raw).unwrap();
            prop_assert!(a.ptr_eq(&b));
            prop_assert_eq!(a.context(), ctx.as_str());
            prop_assert_eq!(a.short_name(), name.as_str());
        }

        #[test]
        fn same_q_reflexive(e in expr()) {
            prop_assert!(same_q(&e, &e));
            prop_assert!(same_q(&e, &deep_copy(&e)));
        }

        #[test]
        fn same_q_symmetric(a in expr(), b in expr()) {
            prop_assert_eq!(same_q(&a, &b), same_q(&b, &a));
        }

        #[test]
        fn machine_coercion_idempotent(n in number()) {
            let e = Expr::Number(n);
            let once = e.coerce(None).unwrap();
            let twice = once.coerce(None).unwrap();
            prop_assert!(same_q(&once, &twice));
        }

        #[test]
        fn machine_coercion_leaves_no_precision_real(n in number()) {
            let once = Expr::Number(n).coerce(None).unwrap();
            let parts = match once.as_number() {
                Some(Number::Complex(z)) => vec![z.real().clone(), z.imag().clone()],
                Some(other) => vec![other.clone()],
                None => vec![],
            };
            for part in parts {
                prop_assert!(matches!(part, Number::MachineReal(_)));
            }
        }

        #[test]
        fn coercion_of_non_numbers_fails(ctx in context(), name in short_name()) {
            let symbol = Expr::symbol(&format!("{ctx}`{name}")).unwrap();
            prop_assert!(symbol.coerce(None).is_err());
        }
    }
}
