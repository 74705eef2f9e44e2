//! Property-based tests for the expression evaluator.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use polycalc_numeric::Rational;

    use crate::evaluate;

    // Strategy for generating small literal operands
    fn literal() -> impl Strategy<Value = i64> {
        0i64..1000i64
    }

    fn non_zero_literal() -> impl Strategy<Value = i64> {
        1i64..1000i64
    }

    proptest! {
        #[test]
        fn literal_round_trip(n in literal()) {
            prop_assert_eq!(evaluate(&n.to_string()).unwrap(), Rational::from_integer(n));
        }

        #[test]
        fn addition_matches(a in literal(), b in literal()) {
            let value = evaluate(&format!("{a} + {b}")).unwrap();
            prop_assert_eq!(value, Rational::from_integer(a + b));
        }

        #[test]
        fn division_is_exact(a in literal(), b in non_zero_literal()) {
            let value = evaluate(&format!("{a} / {b}")).unwrap();
            prop_assert_eq!(value, Rational::new(a, b).unwrap());
        }

        #[test]
        fn multiplication_binds_tighter_than_addition(
            a in literal(),
            b in literal(),
            c in literal(),
        ) {
            let value = evaluate(&format!("{a} + {b} * {c}")).unwrap();
            prop_assert_eq!(value, Rational::from_integer(a + b * c));
        }

        #[test]
        fn parentheses_override_precedence(a in literal(), b in literal(), c in literal()) {
            let value = evaluate(&format!("({a} + {b}) * {c}")).unwrap();
            prop_assert_eq!(value, Rational::from_integer((a + b) * c));
        }

        #[test]
        fn unary_sign_run_folds_by_parity(n in literal(), signs in 1usize..6) {
            let expr = format!("{}{n}", "-".repeat(signs));
            let expected = if signs % 2 == 0 { n } else { -n };
            prop_assert_eq!(evaluate(&expr).unwrap(), Rational::from_integer(expected));
        }

        #[test]
        fn whitespace_is_insignificant(a in literal(), b in literal()) {
            let spaced = evaluate(&format!(" {a} \t*\n {b} ")).unwrap();
            let dense = evaluate(&format!("{a}*{b}")).unwrap();
            prop_assert_eq!(spaced, dense);
        }

        #[test]
        fn parenthesized_value_is_unchanged(n in literal()) {
            prop_assert_eq!(
                evaluate(&format!("(({n}))")).unwrap(),
                Rational::from_integer(n)
            );
        }
    }
}
