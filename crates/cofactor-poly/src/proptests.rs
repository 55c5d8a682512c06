//! Randomised checks of the polynomial ring and division laws.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algorithms::division::div_rem;
    use crate::algorithms::gcd::{extended_gcd, gcd};
    use crate::polynomial::Polynomial;
    use cofactor_rings::rationals::Q;
    use cofactor_rings::traits::Ring;

    fn small_coeff() -> impl Strategy<Value = Q> {
        (-100i64..100i64).prop_map(Q::from_integer)
    }

    // degree at most 4
    fn small_poly() -> impl Strategy<Value = Polynomial<Q>> {
        proptest::collection::vec(small_coeff(), 1..=5).prop_map(Polynomial::new)
    }

    fn nonzero_poly() -> impl Strategy<Value = Polynomial<Q>> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    proptest! {
        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            let left = &a * &(&b + &c);
            let right = &(&a * &b) + &(&a * &c);
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!((&a + &(-&a)).is_zero());
            prop_assert_eq!(&a - &a, Polynomial::zero());
        }

        #[test]
        fn poly_canonical_after_ops(a in small_poly(), b in small_poly()) {
            for p in [&a + &b, &a - &b, &a * &b] {
                prop_assert!(!p.coeffs().is_empty());
                prop_assert!(p.coeffs().len() == 1 || !p.leading_coeff().is_zero());
            }
        }

        #[test]
        fn poly_mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
            let product = &a * &b;
            prop_assert_eq!(product.degree(), Some(a.degree().unwrap() + b.degree().unwrap()));
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in small_coeff()) {
            prop_assert_eq!((&a * &b).eval(&x), a.eval(&x) * b.eval(&x));
        }

        #[test]
        fn poly_compose_evaluates(a in small_poly(), b in small_poly(), x in small_coeff()) {
            // (a ∘ b)(x) = a(b(x))
            prop_assert_eq!(a.compose(&b).eval(&x), a.eval(&b.eval(&x)));
        }

        #[test]
        fn division_identity(p in small_poly(), d in nonzero_poly()) {
            let (quot, rem) = div_rem(&p, &d).unwrap();
            prop_assert_eq!(&(&quot * &d) + &rem, p);
            prop_assert!(rem.is_zero() || rem.degree() < d.degree());
        }

        #[test]
        fn gcd_divides_both(a in nonzero_poly(), b in nonzero_poly()) {
            let g = gcd(&a, &b).unwrap();
            prop_assert!(g.leading_coeff().is_one());
            prop_assert!((&a % &g).is_zero());
            prop_assert!((&b % &g).is_zero());
        }

        #[test]
        fn extended_gcd_bezout(a in small_poly(), b in small_poly()) {
            let (g, s, t) = extended_gcd(&a, &b).unwrap();
            prop_assert_eq!(&(&s * &a) + &(&t * &b), g.clone());
            prop_assert_eq!(g, gcd(&a, &b).unwrap());
        }
    }
}
