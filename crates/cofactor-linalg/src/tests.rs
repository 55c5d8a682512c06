//! Integration tests for cofactor-linalg.

#[cfg(test)]
mod integration_tests {
    use crate::dense_matrix::Matrix;
    use crate::determinant::LeibnizConfig;
    use crate::elimination::FirstNonZero;
    use cofactor_poly::Polynomial;
    use cofactor_rings::finite_field::FiniteField;
    use cofactor_rings::integers::Z;
    use cofactor_rings::rationals::Q;
    use cofactor_rings::traits::Ring;

    type F5 = FiniteField<5>;

    fn q(rows: &[&[i64]]) -> Matrix<Q> {
        Matrix::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|&v| Q::from_integer(v)).collect())
                .collect(),
        )
    }

    #[test]
    fn test_elimination_matches_leibniz() {
        let m = q(&[
            &[3, -1, 4, 1],
            &[5, 9, -2, 6],
            &[5, 3, 5, -8],
            &[9, 7, 9, 3],
        ]);
        assert_eq!(m.determinant(), m.slow_determinant());
    }

    #[test]
    fn test_inverse_round_trip() {
        let m = q(&[&[1, 2, 0], &[0, 1, 3], &[4, 0, 1]]);
        let inv = m.inverse().unwrap();
        assert_eq!(&m * &inv, Matrix::identity(3));
        assert_eq!(&inv * &m, Matrix::identity(3));
        assert_eq!(inv.inverse().unwrap(), m);
    }

    #[test]
    fn test_determinant_of_inverse() {
        let m = q(&[&[2, 1], &[1, 1]]);
        let det = m.determinant().unwrap();
        let inv_det = m.inverse().unwrap().determinant().unwrap();
        assert!((det * inv_det).is_one());
    }

    #[test]
    fn test_cayley_hamilton() {
        // p(A) = 0 for the characteristic polynomial p
        let a = q(&[&[1, 2], &[3, 4]]);
        let p = a.characteristic_polynomial().unwrap();

        let mut value: Matrix<Q> = Matrix::zeros(2, 2);
        let mut power = Matrix::identity(2);
        for c in p.iter() {
            value = &value + &power.scale(c);
            power = &power * &a;
        }
        assert_eq!(value, Matrix::zeros(2, 2));
    }

    #[test]
    fn test_characteristic_polynomial_constant_term() {
        // p(0) = det(-A) = (-1)^n det(A)
        let a = q(&[&[2, 7, 1], &[0, 3, 5], &[4, 1, 6]]);
        let p = a.characteristic_polynomial().unwrap();
        let det = a.determinant().unwrap();
        assert_eq!(p.eval(&Q::zero()), -det);
        assert_eq!(p.degree(), Some(3));
        assert!(p.leading_coeff().is_one());
    }

    #[test]
    fn test_characteristic_polynomial_over_finite_field() {
        let a = Matrix::from_rows(vec![
            vec![F5::new(1), F5::new(1)],
            vec![F5::new(0), F5::new(1)],
        ]);
        let p = a.characteristic_polynomial().unwrap();
        // (x - 1)^2 = x^2 - 2x + 1 = x^2 + 3x + 1 mod 5
        assert_eq!(p, Polynomial::new(vec![F5::new(1), F5::new(3), F5::new(1)]));
    }

    #[test]
    fn test_finite_field_elimination() {
        let a = Matrix::from_rows(vec![
            vec![F5::new(2), F5::new(3), F5::new(1)],
            vec![F5::new(4), F5::new(1), F5::new(0)],
            vec![F5::new(1), F5::new(1), F5::new(1)],
        ]);
        assert_eq!(a.determinant_with(&FirstNonZero), a.slow_determinant());

        let inv = a.inverse_with(&FirstNonZero).unwrap();
        assert_eq!(&a * &inv, Matrix::identity(3));

        let b = [F5::new(1), F5::new(2), F5::new(3)];
        let x = a.solve_with(&b, &FirstNonZero).unwrap();
        assert_eq!(a.mv(&x).unwrap(), b.to_vec());
    }

    #[test]
    fn test_integer_leibniz() {
        let a = Matrix::from_rows(vec![
            vec![Z::new(6), Z::new(1), Z::new(1)],
            vec![Z::new(4), Z::new(-2), Z::new(5)],
            vec![Z::new(2), Z::new(8), Z::new(7)],
        ]);
        assert_eq!(a.slow_determinant(), Ok(Z::new(-306)));
    }

    #[test]
    fn test_polynomial_matrix_determinant() {
        // det [[x, 1], [1, x]] = x^2 - 1
        let x = Polynomial::<Q>::x();
        let one = Polynomial::<Q>::one();
        let m = Matrix::from_rows(vec![vec![x.clone(), one.clone()], vec![one, x]]);
        let det = m.slow_determinant_with(&LeibnizConfig::default()).unwrap();
        assert_eq!(
            det,
            Polynomial::new(vec![Q::from_integer(-1), Q::zero(), Q::one()])
        );
    }

    #[test]
    fn test_block_assembly() {
        let a = q(&[&[1, 2], &[3, 4]]);
        let id = Matrix::identity(2);
        let joined = &a | &id;
        assert_eq!(joined.size(), (2, 4));
        assert_eq!(joined.cut(0, 0, 2, 2).unwrap(), a);
        assert_eq!(joined.cut(0, 2, 2, 4).unwrap(), id);

        let reduced = joined.gauss();
        assert_eq!(reduced.cut(0, 0, 2, 2).unwrap(), id);
        assert_eq!(reduced.cut(0, 2, 2, 4).unwrap(), a.inverse().unwrap());
    }
}
