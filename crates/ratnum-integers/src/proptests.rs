//! Property-based tests for rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{gcd, Integer, Rational, RationalError};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    // k * p^e with |k| <= 1000.
    fn huge_int(p: i64, min_exp: u32) -> impl Strategy<Value = Integer> {
        (non_zero_int(), min_exp..min_exp + 12)
            .prop_map(move |(k, e)| Integer::new(k) * Integer::new(p).pow(e))
    }

    // Reduction removes at most a factor of 1000 from either side, and
    // 7^28 / 1000 and 11^22 / 1000 both still exceed i64::MAX.
    fn huge_rational() -> impl Strategy<Value = Rational> {
        (huge_int(7, 28), huge_int(11, 22)).prop_map(|(n, d)| Rational::new(n, d).unwrap())
    }

    // Mix of small and beyond-i64 values.
    fn any_rational() -> impl Strategy<Value = Rational> {
        prop_oneof![rational(), huge_rational()]
    }

    fn is_canonical(r: &Rational) -> bool {
        let positive = r.denominator().signum() == 1;
        let g = gcd(r.numerator(), r.denominator()).unwrap();
        let reduced = g.is_one() || (r.numerator().is_zero() && r.denominator().is_one());
        positive && reduced
    }

    proptest! {
        // Canonical form

        #[test]
        fn construction_is_canonical(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d).unwrap();
            prop_assert!(is_canonical(&r));
        }

        #[test]
        fn construction_preserves_value(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d).unwrap();
            // n/d == p/q  <=>  n*q == p*d
            prop_assert_eq!(
                Integer::new(n) * r.denominator().clone(),
                r.numerator().clone() * Integer::new(d)
            );
        }

        #[test]
        fn canonicalization_is_idempotent(a in rational()) {
            let again = Rational::new(a.numerator().clone(), a.denominator().clone()).unwrap();
            prop_assert_eq!(again.numerator(), a.numerator());
            prop_assert_eq!(again.denominator(), a.denominator());
        }

        #[test]
        fn zero_denominator_is_rejected(n in small_int()) {
            prop_assert_eq!(Rational::from_i64(n, 0), Err(RationalError::InvalidDenominator));
        }

        #[test]
        fn operation_results_are_canonical(a in any_rational(), b in prop_oneof![non_zero_rational(), huge_rational()]) {
            prop_assert!(is_canonical(&(&a + &b)));
            prop_assert!(is_canonical(&(&a - &b)));
            prop_assert!(is_canonical(&(&a * &b)));
            prop_assert!(is_canonical(&a.checked_div(&b).unwrap()));
        }

        // Field axioms

        #[test]
        fn add_commutative(a in any_rational(), b in any_rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn identities(a in rational()) {
            prop_assert_eq!(&a + &Rational::from(0), a.clone());
            prop_assert_eq!(&a * &Rational::from(1), a);
        }

        #[test]
        fn inverses(a in rational(), b in non_zero_rational()) {
            prop_assert!((&a - &a).is_zero());
            prop_assert_eq!(b.checked_div(&b), Ok(Rational::one()));
            prop_assert!((&b * &b.recip().unwrap()).is_one());
        }

        #[test]
        fn division_by_zero_fails(a in rational(), d in non_zero_int()) {
            let zero = Rational::from_i64(0, d).unwrap();
            prop_assert_eq!(a.checked_div(&zero), Err(RationalError::InvalidDenominator));
        }

        // Ordering

        #[test]
        fn ordering_is_strict(a in any_rational(), b in any_rational()) {
            let lt = a.less_than(&b);
            let gt = b.less_than(&a);
            prop_assert!(!(lt && gt));
            prop_assert_eq!(!lt && !gt, a == b);
        }

        #[test]
        fn ordering_matches_subtraction(a in any_rational(), b in any_rational()) {
            prop_assert_eq!(a.less_than(&b), (&a - &b).is_negative());
        }

        #[test]
        fn huge_components_exceed_i64(r in huge_rational()) {
            prop_assert_eq!(r.numerator().to_i64(), None);
            prop_assert_eq!(r.denominator().to_i64(), None);
        }

        // pow and int_part

        #[test]
        fn pow_zero_is_one(a in rational()) {
            prop_assert_eq!(a.pow(0), Ok(Rational::one()));
        }

        #[test]
        fn pow_negative_is_reciprocal(a in non_zero_rational(), k in 1i32..6) {
            let direct = a.pow(-k).unwrap();
            let via_recip = a.recip().unwrap().pow(k).unwrap();
            prop_assert_eq!(direct.clone(), via_recip);
            prop_assert!((&direct * &a.pow(k).unwrap()).is_one());
        }

        #[test]
        fn int_part_truncates_toward_zero(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d).unwrap();
            prop_assert_eq!(r.int_part().to_i64(), Some(n / d));
        }

        // GCD properties

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = gcd(&a, &b).unwrap();

            prop_assert!(!g.is_negative());
            prop_assert!((a % g.clone()).is_zero());
            prop_assert!((b % g).is_zero());
        }

        #[test]
        fn gcd_commutative(a in small_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(gcd(&a, &b), gcd(&b, &a));
        }
    }
}
