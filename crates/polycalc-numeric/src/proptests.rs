//! Property-based tests for rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::Rational;

    fn gcd(mut a: i64, mut b: i64) -> i64 {
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a.abs()
    }

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
    }

    proptest! {
        // Normalization invariant

        #[test]
        fn construction_normalizes(n in small_int(), d in non_zero_int()) {
            let r = Rational::new(n, d).unwrap();
            prop_assert!(r.denominator() > 0);
            if r.numerator() == 0 {
                prop_assert_eq!(r.denominator(), 1);
            } else {
                prop_assert_eq!(gcd(r.numerator(), r.denominator()), 1);
            }
        }

        #[test]
        fn results_stay_normalized(a in rational(), b in rational()) {
            for r in [a + b, a - b, a * b] {
                prop_assert!(r.denominator() > 0);
                prop_assert_eq!(gcd(r.numerator().abs().max(1), r.denominator()), 1);
            }
        }

        // Field axioms

        #[test]
        fn add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn add_identity(a in rational()) {
            prop_assert_eq!(a + Rational::zero(), a);
        }

        #[test]
        fn sub_self_is_zero(a in rational()) {
            prop_assert_eq!(a - a, Rational::zero());
        }

        #[test]
        fn div_round_trip(a in rational(), b in non_zero_rational()) {
            prop_assert_eq!(a.checked_div(b).unwrap() * b, a);
        }

        // Ordering

        #[test]
        fn ordering_matches_difference_sign(a in rational(), b in rational()) {
            use std::cmp::Ordering;
            let expected = match (a - b).signum() {
                1 => Ordering::Greater,
                -1 => Ordering::Less,
                _ => Ordering::Equal,
            };
            prop_assert_eq!(a.cmp(&b), expected);
        }

        #[test]
        fn ordering_matches_float_approximation(a in rational(), b in rational()) {
            if a != b {
                prop_assert_eq!(a < b, a.to_f64() < b.to_f64());
            }
        }

        // Exponentiation

        #[test]
        fn pow_zero_is_one(a in non_zero_rational()) {
            prop_assert_eq!(a.pow(0).unwrap(), Rational::one());
        }

        #[test]
        fn pow_negative_inverts(a in non_zero_rational(), n in 1i64..6) {
            let inv = Rational::one().checked_div(a).unwrap();
            prop_assert_eq!(a.pow(-n).unwrap(), inv.pow(n).unwrap());
        }

        #[test]
        fn pow_adds_exponents(a in non_zero_rational(), m in 0i64..4, n in 0i64..4) {
            prop_assert_eq!(
                a.pow(m).unwrap() * a.pow(n).unwrap(),
                a.pow(m + n).unwrap()
            );
        }
    }
}
