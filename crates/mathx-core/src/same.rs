//! Structural identity of values (`SameQ`).
//!
//! Two values are the same when they are the same object, or have the same
//! kind and exactly the same content. The one cross-kind rule: a machine real
//! and a precision real are the same when their exact values coincide. No
//! numeric tolerance is ever applied.

use std::sync::Arc;

use mathx_numbers::Number;

use crate::expr::Expr;

/// Structural identity of two values.
///
/// ```
/// use mathx_core::{same_q, Expr};
///
/// let a = Expr::expression(Expr::symbol("Global`f").unwrap(), [Expr::integer(1)]);
/// let b = Expr::expression(Expr::symbol("Global`f").unwrap(), [Expr::integer(1)]);
/// assert!(same_q(&a, &b));
/// assert!(!same_q(&a, &Expr::integer(1)));
/// ```
#[must_use]
pub fn same_q(lhs: &Expr, rhs: &Expr) -> bool {
    match (lhs, rhs) {
        (Expr::Symbol(a), Expr::Symbol(b)) => {
            a.ptr_eq(b) || a.qualified_name() == b.qualified_name()
        }
        (Expr::Compound(a), Expr::Compound(b)) => {
            Arc::ptr_eq(a, b)
                || (a.leaves().len() == b.leaves().len()
                    && same_q(a.head(), b.head())
                    && a.leaves()
                        .iter()
                        .zip(b.leaves())
                        .all(|(l, r)| same_q(l, r)))
        }
        (Expr::String(a), Expr::String(b)) => Arc::ptr_eq(a, b) || a == b,
        (Expr::Number(a), Expr::Number(b)) => same_number(a, b),
        (Expr::Symbol(_) | Expr::Compound(_) | Expr::String(_) | Expr::Number(_), _) => false,
    }
}

/// Structural identity of two numbers.
///
/// Same-kind numbers compare by exact value. A machine real and a precision
/// real are promoted to exact rationals and compared. Any other pair of
/// different kinds, such as `2` and `2/1`, is never the same.
#[must_use]
pub fn same_number(lhs: &Number, rhs: &Number) -> bool {
    match (lhs, rhs) {
        (Number::Integer(a), Number::Integer(b)) => a == b,
        (Number::Rational(a), Number::Rational(b)) => a == b,
        (Number::MachineReal(a), Number::MachineReal(b)) => a.value() == b.value(),
        (Number::PrecisionReal(a), Number::PrecisionReal(b)) => a == b,
        (Number::MachineReal(m), Number::PrecisionReal(p))
        | (Number::PrecisionReal(p), Number::MachineReal(m)) => m.to_exact() == p.to_exact(),
        (Number::Complex(a), Number::Complex(b)) => {
            Arc::ptr_eq(a, b)
                || (same_number(a.real(), b.real()) && same_number(a.imag(), b.imag()))
        }
        (
            Number::Integer(_)
            | Number::Rational(_)
            | Number::MachineReal(_)
            | Number::PrecisionReal(_)
            | Number::Complex(_),
            _,
        ) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathx_numbers::{make_real, Complex, MachineReal, PrecisionReal, Rational, RealInput};

    fn machine(x: f64) -> Expr {
        Expr::Number(MachineReal::new(x).unwrap().into())
    }

    fn precise(text: &str, bits: u32) -> Expr {
        Expr::Number(make_real(RealInput::Text(text), Some(bits)).unwrap())
    }

    fn rational(num: i64, den: i64) -> Expr {
        Expr::Number(Rational::from_i64(num, den).unwrap().into())
    }

    #[test]
    fn test_same_integers() {
        assert!(same_q(&Expr::integer(2), &Expr::integer(2)));
        assert!(!same_q(&Expr::integer(2), &Expr::integer(3)));
    }

    #[test]
    fn test_integer_and_rational_differ() {
        assert!(!same_q(&Expr::integer(2), &rational(2, 1)));
        assert!(same_q(&rational(4, 6), &rational(2, 3)));
    }

    #[test]
    fn test_machine_and_precision_reals() {
        assert!(same_q(&machine(0.5), &precise("0.5", 60)));
        assert!(same_q(&precise("0.5", 60), &machine(0.5)));
        // 0.1 is not exactly representable, so the exact values differ
        assert!(!same_q(&machine(0.1), &precise("0.1", 60)));
    }

    #[test]
    fn test_no_tolerance() {
        assert!(!same_q(&machine(1.0), &machine(1.0 + f64::EPSILON)));
        assert!(!same_q(&machine(2.0), &Expr::integer(2)));
        assert!(!same_q(&rational(1, 2), &machine(0.5)));
    }

    #[test]
    fn test_precision_reals_compare_values() {
        assert!(same_q(&precise("1.25", 80), &precise("1.25", 200)));
        assert!(!same_q(&precise("1.25", 80), &precise("1.26", 80)));
    }

    #[test]
    fn test_complex() {
        let a = Expr::Number(Complex::new(1.into(), 2.into()).unwrap());
        let b = Expr::Number(Complex::new(1.into(), 2.into()).unwrap());
        let c = Expr::Number(Complex::new(1.into(), 3.into()).unwrap());
        assert!(same_q(&a, &b));
        assert!(!same_q(&a, &c));

        let collapsed = Expr::Number(Complex::new(3.into(), 0.into()).unwrap());
        assert!(same_q(&collapsed, &Expr::integer(3)));
    }

    #[test]
    fn test_strings_and_symbols() {
        assert!(same_q(&Expr::string("abc"), &Expr::string(String::from("abc"))));
        assert!(!same_q(&Expr::string("x"), &Expr::symbol("x").unwrap()));
        assert!(same_q(
            &Expr::symbol("Global`x").unwrap(),
            &Expr::symbol("Global`x").unwrap()
        ));
        assert!(!same_q(
            &Expr::symbol("Global`x").unwrap(),
            &Expr::symbol("Other`x").unwrap()
        ));
    }

    #[test]
    fn test_expressions() {
        let f = Expr::symbol("Global`f").unwrap();
        let g = Expr::symbol("Global`g").unwrap();
        let e1 = Expr::expression(f.clone(), [Expr::integer(1), machine(0.5)]);
        let e2 = Expr::expression(f.clone(), [Expr::integer(1), precise("0.5", 100)]);
        let e3 = Expr::expression(f.clone(), [Expr::integer(1)]);
        let e4 = Expr::expression(g, [Expr::integer(1), machine(0.5)]);

        assert!(same_q(&e1, &e1));
        assert!(same_q(&e1, &e2));
        assert!(!same_q(&e1, &e3));
        assert!(!same_q(&e1, &e4));
        assert!(!same_q(&e1, &f));
    }

    #[test]
    fn test_number_kinds_never_cross() {
        let p: Number = PrecisionReal::parse("2", 30).unwrap().into();
        assert!(!same_number(&p, &Number::from(2)));
    }
}
