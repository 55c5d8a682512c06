//! Property-based tests for permutation group laws and enumeration.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::permutation::Permutation;

    // Random permutation of 0..n via a shuffled image array
    fn permutation(max_len: usize) -> impl Strategy<Value = Permutation> {
        (0..=max_len)
            .prop_flat_map(|n| Just((0..n).collect::<Vec<usize>>()).prop_shuffle())
            .prop_map(Permutation::from_images)
    }

    fn factorial(n: usize) -> usize {
        (1..=n).product()
    }

    proptest! {
        #[test]
        fn compose_with_inverse_is_identity(p in permutation(8)) {
            prop_assert_eq!(p.compose(&p.inverse()), Permutation::identity(p.len()));
            prop_assert_eq!(p.inverse().compose(&p), Permutation::identity(p.len()));
        }

        #[test]
        fn pow_zero_is_identity(p in permutation(8)) {
            prop_assert_eq!(p.pow(0), Permutation::identity(p.len()));
        }

        #[test]
        fn compose_is_associative(a in permutation(6), b in permutation(6), c in permutation(6)) {
            prop_assert_eq!(a.compose(&b).compose(&c), a.compose(&b.compose(&c)));
        }

        #[test]
        fn pow_adds_exponents(p in permutation(7), j in -20i64..20, k in -20i64..20) {
            prop_assert_eq!(p.pow(j).compose(&p.pow(k)), p.pow(j + k));
        }

        #[test]
        fn sign_is_multiplicative(a in permutation(7), b in permutation(7)) {
            prop_assert_eq!(a.compose(&b).sign(), a.sign() * b.sign());
        }

        #[test]
        fn sign_of_inverse_matches(p in permutation(8)) {
            prop_assert_eq!(p.inverse().sign(), p.sign());
        }

        #[test]
        fn validated_construction_accepts_bijections(p in permutation(8)) {
            let images = p.images().to_vec();
            prop_assert_eq!(Permutation::try_from_images(images), Ok(p));
        }
    }

    #[test]
    fn enumeration_visits_all_in_increasing_order() {
        for n in 0..=6 {
            let mut p = Permutation::identity(n);
            let mut count = 1;
            loop {
                let previous = p.clone();
                if !p.next() {
                    break;
                }
                assert!(previous < p, "{previous} should precede {p}");
                count += 1;
            }
            assert_eq!(count, factorial(n));
            assert_eq!(Permutation::iter_all(n).count(), factorial(n));
        }
    }
}
