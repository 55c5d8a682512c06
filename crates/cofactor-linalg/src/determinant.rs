//! Permutation-expansion determinants and characteristic polynomials.
//!
//! The Leibniz formula needs only ring operations, so it works for integer
//! and polynomial entries where elimination cannot divide. It enumerates all
//! `n!` permutations; [`LeibnizConfig`] puts a ceiling on the order.

use cofactor_perm::Permutation;
use cofactor_poly::Polynomial;
use cofactor_rings::traits::Ring;

use crate::dense_matrix::Matrix;
use crate::error::{MatrixError, Result};

/// Limits for the permutation expansion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeibnizConfig {
    /// Largest matrix order that will be expanded.
    pub max_order: usize,
}

impl Default for LeibnizConfig {
    fn default() -> Self {
        Self { max_order: 10 }
    }
}

impl LeibnizConfig {
    /// Config with no effective limit.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            max_order: usize::MAX,
        }
    }
}

impl<T: Ring> Matrix<T> {
    /// Determinant by the Leibniz formula under the default limits.
    ///
    /// # Errors
    ///
    /// See [`Matrix::slow_determinant_with`].
    pub fn slow_determinant(&self) -> Result<T> {
        self.slow_determinant_with(&LeibnizConfig::default())
    }

    /// Determinant as the signed sum over all permutations `p` of
    /// `a[0][p(0)] * ... * a[n-1][p(n-1)]`. The empty matrix has
    /// determinant one.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for non-square matrices and
    /// [`MatrixError::TooLarge`] when the order exceeds `config.max_order`.
    pub fn slow_determinant_with(&self, config: &LeibnizConfig) -> Result<T> {
        self.ensure_square()?;
        let n = self.vertical_size();
        if n > config.max_order {
            return Err(MatrixError::TooLarge {
                order: n,
                max: config.max_order,
            });
        }
        log::debug!("Leibniz expansion of order {n}");

        let mut permutation = Permutation::identity(n);
        let mut result = T::zero();
        loop {
            if let Some(term) = self.diagonal_product(&permutation) {
                result = result + term.signed(permutation.sign());
            }
            if !permutation.next() {
                break;
            }
        }

        Ok(result)
    }

    /// Product of `a[i][p(i)]`, or `None` as soon as a factor is zero.
    fn diagonal_product(&self, permutation: &Permutation) -> Option<T> {
        let mut product = T::one();
        for i in 0..self.vertical_size() {
            let entry = &self[(i, permutation[i])];
            if entry.is_zero() {
                return None;
            }
            product = product * entry.clone();
        }
        Some(product)
    }

    /// Characteristic polynomial `det(x I - A)` under the default limits.
    ///
    /// # Errors
    ///
    /// See [`Matrix::characteristic_polynomial_with`].
    pub fn characteristic_polynomial(&self) -> Result<Polynomial<T>> {
        self.characteristic_polynomial_with(&LeibnizConfig::default())
    }

    /// Characteristic polynomial `det(x I - A)`, expanded over a matrix of
    /// polynomials.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for non-square matrices and
    /// [`MatrixError::TooLarge`] when the order exceeds `config.max_order`.
    pub fn characteristic_polynomial_with(&self, config: &LeibnizConfig) -> Result<Polynomial<T>> {
        self.ensure_square()?;
        let n = self.vertical_size();

        let mut shifted: Matrix<Polynomial<T>> = Matrix::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                let entry = Polynomial::constant(-self[(i, j)].clone());
                shifted[(i, j)] = if i == j {
                    entry + Polynomial::x()
                } else {
                    entry
                };
            }
        }

        shifted.slow_determinant_with(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cofactor_rings::integers::Z;
    use cofactor_rings::rationals::Q;

    fn z(rows: &[&[i64]]) -> Matrix<Z> {
        Matrix::from_rows(rows.iter().map(|r| r.iter().copied().map(Z::new).collect()).collect())
    }

    #[test]
    fn test_small_determinants() {
        assert_eq!(z(&[&[2, 1], &[1, 1]]).slow_determinant(), Ok(Z::new(1)));
        assert_eq!(z(&[&[5]]).slow_determinant(), Ok(Z::new(5)));
        assert_eq!(Matrix::<Z>::new().slow_determinant(), Ok(Z::new(1)));
        assert_eq!(
            z(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 10]]).slow_determinant(),
            Ok(Z::new(-3))
        );
        assert_eq!(z(&[&[1, 2], &[2, 4]]).slow_determinant(), Ok(Z::new(0)));
    }

    #[test]
    fn test_permutation_matrix_sign() {
        // swaps rows 0 and 2 of the identity
        let m = z(&[&[0, 0, 1], &[0, 1, 0], &[1, 0, 0]]);
        assert_eq!(m.slow_determinant(), Ok(Z::new(-1)));
    }

    #[test]
    fn test_not_square() {
        assert!(matches!(
            z(&[&[1, 2]]).slow_determinant(),
            Err(MatrixError::NotSquare(_))
        ));
    }

    #[test]
    fn test_order_limit() {
        let m: Matrix<Z> = Matrix::identity(4);
        let config = LeibnizConfig { max_order: 3 };
        assert_eq!(
            m.slow_determinant_with(&config),
            Err(MatrixError::TooLarge { order: 4, max: 3 })
        );
        assert_eq!(m.slow_determinant_with(&LeibnizConfig::unbounded()), Ok(Z::new(1)));
    }

    #[test]
    fn test_characteristic_polynomial_diagonal() {
        let m = z(&[&[2, 0], &[0, 3]]);
        let p = m.characteristic_polynomial().unwrap();
        assert_eq!(p, Polynomial::new(vec![Z::new(6), Z::new(-5), Z::new(1)]));
        assert_eq!(p.to_string(), "x^2-5*x+6");
    }

    #[test]
    fn test_characteristic_polynomial_general() {
        // trace 5, determinant -2
        let m = Matrix::from_rows(vec![
            vec![Q::from_integer(1), Q::from_integer(2)],
            vec![Q::from_integer(3), Q::from_integer(4)],
        ]);
        let p = m.characteristic_polynomial().unwrap();
        assert_eq!(
            p,
            Polynomial::new(vec![Q::from_integer(-2), Q::from_integer(-5), Q::from_integer(1)])
        );
    }

    #[test]
    fn test_characteristic_polynomial_empty() {
        let p = Matrix::<Z>::new().characteristic_polynomial().unwrap();
        assert_eq!(p, Polynomial::one());
    }
}
