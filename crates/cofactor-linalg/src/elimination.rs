//! Gauss-Jordan elimination over a field.
//!
//! Reduction always produces the reduced row echelon form: each pivot row is
//! normalised to a leading one and the pivot column is cleared in every other
//! row. Pivot choice is pluggable through [`PivotRule`]; exact coefficients
//! make the choice irrelevant for correctness, but it changes the amount of
//! work and the size of intermediate values.

use cofactor_rings::traits::{Field, OrderedField};

use crate::dense_matrix::Matrix;
use crate::error::{MatrixError, Result, Shape};

/// Chooses the pivot row for a column during elimination.
pub trait PivotRule<T> {
    /// Returns the row in `from_row..` holding the pivot for `col`, or `None`
    /// if the column has no usable entry there.
    fn select(&self, matrix: &Matrix<T>, from_row: usize, col: usize) -> Option<usize>;
}

/// Partial pivoting: the entry of largest absolute value wins, first one on
/// ties.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LargestMagnitude;

impl<T: OrderedField> PivotRule<T> for LargestMagnitude {
    fn select(&self, matrix: &Matrix<T>, from_row: usize, col: usize) -> Option<usize> {
        let mut best: Option<(usize, T)> = None;
        for row in from_row..matrix.vertical_size() {
            let entry = &matrix[(row, col)];
            if entry.is_zero() {
                continue;
            }
            let magnitude = entry.abs();
            if best.as_ref().map_or(true, |(_, b)| magnitude > *b) {
                best = Some((row, magnitude));
            }
        }
        best.map(|(row, _)| row)
    }
}

/// Takes the first non-zero entry. Works over any field, including finite
/// ones that have no order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FirstNonZero;

impl<T: Field> PivotRule<T> for FirstNonZero {
    fn select(&self, matrix: &Matrix<T>, from_row: usize, col: usize) -> Option<usize> {
        (from_row..matrix.vertical_size()).find(|&row| !matrix[(row, col)].is_zero())
    }
}

/// What a reduction did to reach row echelon form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reduction<T> {
    /// `(row, col)` of every pivot, in order.
    pub pivots: Vec<(usize, usize)>,
    /// Number of row swaps performed.
    pub swaps: usize,
    /// Product of the pivot values before normalisation.
    pub pivot_product: T,
}

impl<T: Field> Reduction<T> {
    /// Number of pivots found.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    /// Sign of the row permutation applied: `1` or `-1`.
    #[must_use]
    pub fn sign(&self) -> i8 {
        if self.swaps % 2 == 0 {
            1
        } else {
            -1
        }
    }

    /// Determinant of the original matrix, given that it was `order x order`.
    #[must_use]
    pub fn determinant(&self, order: usize) -> T {
        if self.rank() < order {
            T::zero()
        } else {
            self.pivot_product.clone().signed(self.sign())
        }
    }
}

impl<T: Field> Matrix<T> {
    /// Reduces the matrix in place to reduced row echelon form using `rule`.
    pub fn make_gauss_with<P: PivotRule<T>>(&mut self, rule: &P) -> Reduction<T> {
        let rows = self.vertical_size();
        let cols = self.horizontal_size();

        let mut reduction = Reduction {
            pivots: Vec::new(),
            swaps: 0,
            pivot_product: T::one(),
        };

        let mut pivot_row = 0;
        let mut pivot_col = 0;

        while pivot_row < rows && pivot_col < cols {
            let Some(selected) = rule.select(self, pivot_row, pivot_col) else {
                pivot_col += 1;
                continue;
            };

            let pivot_val = self[(selected, pivot_col)].clone();
            let Some(inv) = pivot_val.inv() else {
                pivot_col += 1;
                continue;
            };

            if selected != pivot_row {
                self.swap_rows(pivot_row, selected);
                reduction.swaps += 1;
            }
            log::trace!("pivot at ({pivot_row}, {pivot_col}) taken from row {selected}");

            self.scale_row(pivot_row, &inv);
            for row in 0..rows {
                if row != pivot_row && !self[(row, pivot_col)].is_zero() {
                    let factor = -self[(row, pivot_col)].clone();
                    self.add_scaled_row(row, pivot_row, &factor);
                }
            }

            reduction.pivots.push((pivot_row, pivot_col));
            reduction.pivot_product = reduction.pivot_product * pivot_val;
            pivot_row += 1;
            pivot_col += 1;
        }

        if reduction.rank() < rows.min(cols) {
            log::debug!(
                "reduction of {rows}x{cols} matrix is rank deficient: rank {}",
                reduction.rank()
            );
        }

        reduction
    }

    /// Copying variant of [`Matrix::make_gauss_with`].
    #[must_use]
    pub fn gauss_with<P: PivotRule<T>>(&self, rule: &P) -> (Self, Reduction<T>) {
        let mut reduced = self.clone();
        let reduction = reduced.make_gauss_with(rule);
        (reduced, reduction)
    }

    /// Rank under `rule`.
    #[must_use]
    pub fn rank_with<P: PivotRule<T>>(&self, rule: &P) -> usize {
        self.gauss_with(rule).1.rank()
    }

    /// Determinant by elimination under `rule`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for non-square matrices.
    pub fn determinant_with<P: PivotRule<T>>(&self, rule: &P) -> Result<T> {
        self.ensure_square()?;
        Ok(self.gauss_with(rule).1.determinant(self.vertical_size()))
    }

    /// Inverse by reducing `[A | I]` under `rule`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for non-square matrices and
    /// [`MatrixError::Singular`] when no inverse exists.
    pub fn inverse_with<P: PivotRule<T>>(&self, rule: &P) -> Result<Self> {
        self.ensure_square()?;
        let n = self.vertical_size();
        if n == 0 {
            return Ok(Self::new());
        }

        let mut augmented = self.concatenate_horizontally(&Self::identity(n));
        augmented.make_gauss_with(rule);

        if augmented[(n - 1, n - 1)].is_zero() {
            log::debug!("{n}x{n} matrix is singular, no inverse");
            return Err(MatrixError::Singular);
        }

        augmented.cut(0, n, n, 2 * n)
    }

    /// Reduces `[A | b]` under `rule` and returns the augmented column.
    ///
    /// Inconsistent or underdetermined systems are not reported; the column
    /// is whatever the reduction leaves in it.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] unless `b` has one entry per
    /// row.
    pub fn solve_with<P: PivotRule<T>>(&self, b: &[T], rule: &P) -> Result<Vec<T>> {
        if b.len() != self.vertical_size() {
            return Err(MatrixError::ShapeMismatch {
                op: "solve",
                left: self.shape(),
                right: Shape::from((b.len(), 1)),
            });
        }
        if self.is_empty() {
            return Ok(Vec::new());
        }

        let column = Self::from_rows(b.iter().map(|v| vec![v.clone()]).collect());
        let mut augmented = self.concatenate_horizontally(&column);
        augmented.make_gauss_with(rule);
        Ok(augmented.col(self.horizontal_size()))
    }
}

impl<T: OrderedField> Matrix<T> {
    /// Reduces the matrix in place with largest-magnitude pivoting.
    pub fn make_gauss(&mut self) -> Reduction<T> {
        self.make_gauss_with(&LargestMagnitude)
    }

    /// Returns the reduced row echelon form.
    #[must_use]
    pub fn gauss(&self) -> Self {
        self.gauss_with(&LargestMagnitude).0
    }

    /// Returns the rank.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rank_with(&LargestMagnitude)
    }

    /// Determinant by elimination.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for non-square matrices.
    pub fn determinant(&self) -> Result<T> {
        self.determinant_with(&LargestMagnitude)
    }

    /// Returns the inverse as a new matrix.
    ///
    /// # Errors
    ///
    /// See [`Matrix::inverse_with`].
    pub fn inverse(&self) -> Result<Self> {
        self.inverse_with(&LargestMagnitude)
    }

    /// Replaces the matrix with its inverse. The matrix is untouched on error.
    ///
    /// # Errors
    ///
    /// See [`Matrix::inverse_with`].
    pub fn invert(&mut self) -> Result<&mut Self> {
        *self = self.inverse()?;
        Ok(self)
    }

    /// Solves `A x = b` by reduction of the augmented matrix.
    ///
    /// # Errors
    ///
    /// See [`Matrix::solve_with`].
    pub fn solve(&self, b: &[T]) -> Result<Vec<T>> {
        self.solve_with(b, &LargestMagnitude)
    }
}
