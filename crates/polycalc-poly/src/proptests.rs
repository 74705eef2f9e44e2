//! Property-based tests for polynomial algebra.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Polynomial, EPSILON};

    // Strategy for coefficient/exponent pairs with comfortably non-zero
    // coefficients so cancellation is the only path to zero.
    fn term() -> impl Strategy<Value = (f64, i32)> {
        (
            prop_oneof![(-100.0f64..=-0.5), (0.5f64..=100.0)],
            -6i32..=6,
        )
    }

    fn poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(term(), 0..8).prop_map(Polynomial::from_terms)
    }

    fn invariant_holds(p: &Polynomial) -> bool {
        p.terms().windows(2).all(|w| w[0].exponent > w[1].exponent)
            && p.terms().iter().all(|t| t.coefficient.abs() >= EPSILON)
    }

    proptest! {
        #[test]
        fn construction_preserves_invariant(p in poly()) {
            prop_assert!(invariant_holds(&p));
        }

        #[test]
        fn operators_preserve_invariant(a in poly(), b in poly()) {
            prop_assert!(invariant_holds(&(&a + &b)));
            prop_assert!(invariant_holds(&(&a - &b)));
            prop_assert!(invariant_holds(&(&a * &b)));
            prop_assert!(invariant_holds(&-&a));
            prop_assert!(invariant_holds(&a.derivative()));
        }

        #[test]
        fn add_commutative(a in poly(), b in poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn sub_self_is_zero(a in poly()) {
            prop_assert!((&a - &a).is_zero());
        }

        #[test]
        fn mul_by_zero_is_zero(a in poly()) {
            prop_assert!((&a * &Polynomial::new()).is_zero());
        }

        #[test]
        fn addition_agrees_with_evaluation(a in poly(), b in poly(), x in 0.5f64..2.0) {
            let lhs = (&a + &b).evaluate(x);
            let rhs = a.evaluate(x) + b.evaluate(x);
            prop_assert!((lhs - rhs).abs() < 1e-6 * (1.0 + rhs.abs()));
        }

        #[test]
        fn multiplication_agrees_with_evaluation(a in poly(), b in poly(), x in 0.5f64..2.0) {
            let lhs = (&a * &b).evaluate(x);
            let rhs = a.evaluate(x) * b.evaluate(x);
            prop_assert!((lhs - rhs).abs() < 1e-5 * (1.0 + rhs.abs()));
        }
    }
}
