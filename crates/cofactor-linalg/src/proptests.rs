//! Property-based tests for matrix algebra.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense_matrix::Matrix;
    use crate::elimination::FirstNonZero;
    use crate::error::MatrixError;
    use cofactor_rings::rationals::Q;
    use cofactor_rings::traits::Ring;

    fn small_coeff() -> impl Strategy<Value = Q> {
        (-9i64..10i64).prop_map(Q::from_integer)
    }

    fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<Q>> {
        proptest::collection::vec(proptest::collection::vec(small_coeff(), cols), rows)
            .prop_map(Matrix::from_rows)
    }

    // Square matrices of order 0 through 5
    fn square() -> impl Strategy<Value = Matrix<Q>> {
        (0usize..=5).prop_flat_map(|n| matrix(n, n))
    }

    // Three matrices with chainable shapes a x b, b x c, c x d
    fn chain() -> impl Strategy<Value = (Matrix<Q>, Matrix<Q>, Matrix<Q>)> {
        (1usize..=4, 1usize..=4, 1usize..=4, 1usize..=4)
            .prop_flat_map(|(a, b, c, d)| (matrix(a, b), matrix(b, c), matrix(c, d)))
    }

    proptest! {
        #[test]
        fn transpose_involution(m in (1usize..=4, 1usize..=4).prop_flat_map(|(r, c)| matrix(r, c))) {
            prop_assert_eq!(m.transpose().transpose(), m);
        }

        #[test]
        fn transpose_of_product((a, b, _) in chain()) {
            prop_assert_eq!((&a * &b).transpose(), &b.transpose() * &a.transpose());
        }

        #[test]
        fn product_associative((a, b, c) in chain()) {
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn elimination_determinant_matches_leibniz(m in square()) {
            prop_assert_eq!(m.determinant(), m.slow_determinant());
        }

        #[test]
        fn pivot_rule_does_not_change_determinant(m in square()) {
            prop_assert_eq!(m.determinant(), m.determinant_with(&FirstNonZero));
        }

        #[test]
        fn determinant_multiplicative(
            (a, b) in (1usize..=4).prop_flat_map(|n| (matrix(n, n), matrix(n, n)))
        ) {
            let lhs = (&a * &b).determinant().unwrap();
            let rhs = a.determinant().unwrap() * b.determinant().unwrap();
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn inverse_iff_nonzero_determinant(m in square()) {
            let det = m.determinant().unwrap();
            match m.inverse() {
                Ok(inv) => {
                    prop_assert!(!det.is_zero());
                    prop_assert_eq!(&m * &inv, Matrix::identity(m.vertical_size()));
                    prop_assert_eq!(&inv * &m, Matrix::identity(m.vertical_size()));
                }
                Err(e) => {
                    prop_assert_eq!(e, MatrixError::Singular);
                    prop_assert!(det.is_zero());
                }
            }
        }

        #[test]
        fn gauss_is_idempotent(m in (1usize..=4, 1usize..=5).prop_flat_map(|(r, c)| matrix(r, c))) {
            let once = m.gauss();
            prop_assert_eq!(once.gauss(), once.clone());
            prop_assert_eq!(once.rank(), m.rank());
        }

        #[test]
        fn rank_of_transpose(m in (1usize..=4, 1usize..=4).prop_flat_map(|(r, c)| matrix(r, c))) {
            prop_assert_eq!(m.rank(), m.transpose().rank());
        }

        #[test]
        fn solve_nonsingular(
            (m, b) in (1usize..=4).prop_flat_map(|n| (matrix(n, n), proptest::collection::vec(small_coeff(), n)))
        ) {
            prop_assume!(!m.determinant().unwrap().is_zero());
            let x = m.solve(&b).unwrap();
            prop_assert_eq!(m.mv(&x).unwrap(), b);
        }

        #[test]
        fn characteristic_polynomial_at_zero(m in (0usize..=4).prop_flat_map(|n| matrix(n, n))) {
            let p = m.characteristic_polynomial().unwrap();
            let det = m.determinant().unwrap();
            let expected = if m.vertical_size() % 2 == 0 { det } else { -det };
            prop_assert_eq!(p.eval(&Q::zero()), expected);
        }

        #[test]
        fn concatenate_then_cut(
            (a, b) in (1usize..=4, 1usize..=3, 1usize..=3)
                .prop_flat_map(|(r, c1, c2)| (matrix(r, c1), matrix(r, c2)))
        ) {
            let joined = &a | &b;
            let (rows, left) = a.size();
            prop_assert_eq!(joined.cut_to(rows, left).unwrap(), a);
            prop_assert_eq!(joined.cut(0, left, rows, joined.horizontal_size()).unwrap(), b);
        }
    }
}
