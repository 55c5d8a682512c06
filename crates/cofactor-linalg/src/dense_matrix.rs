//! Dense matrix storage and ring arithmetic.
//!
//! Everything in this module only needs a [`Ring`]: construction, reshaping,
//! transposition, sums and products. Elimination lives in
//! [`crate::elimination`] and the permutation expansion in
//! [`crate::determinant`].

use std::fmt;
use std::ops::{Add, BitOr, BitOrAssign, Index, IndexMut, Mul, Neg, Sub};

use cofactor_rings::traits::Ring;

use crate::error::{MatrixError, Result, Shape};

/// A rectangular grid of ring elements, stored flat in row-major order.
///
/// A matrix with no rows also reports no columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    /// Entries, row after row.
    data: Vec<T>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            num_rows: 0,
            num_cols: 0,
        }
    }
}

impl<T> Matrix<T> {
    /// Creates an empty matrix with no rows and no columns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn from_parts(data: Vec<T>, num_rows: usize, num_cols: usize) -> Self {
        debug_assert_eq!(data.len(), num_rows * num_cols);
        if num_rows == 0 {
            return Self::default();
        }
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from rows, checking that they all have the same
    /// length.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Ragged`] for the first row whose length differs
    /// from the first row's.
    pub fn try_from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(num_rows * num_cols);
        for (row, entries) in rows.into_iter().enumerate() {
            if entries.len() != num_cols {
                return Err(MatrixError::Ragged {
                    row,
                    expected: num_cols,
                    found: entries.len(),
                });
            }
            data.extend(entries);
        }

        Ok(Self::from_parts(data, num_rows, num_cols))
    }

    /// Builds a matrix from its rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        Self::try_from_rows(rows).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Row count.
    #[must_use]
    pub fn vertical_size(&self) -> usize {
        self.num_rows
    }

    /// Column count.
    #[must_use]
    pub fn horizontal_size(&self) -> usize {
        self.num_cols
    }

    /// Returns `(rows, columns)`.
    #[must_use]
    pub fn size(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Returns the shape, as used in error reports.
    #[must_use]
    pub fn shape(&self) -> Shape {
        Shape::from(self.size())
    }

    /// Returns true if the matrix has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.num_rows == 0
    }

    /// True when rows and columns agree.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    pub(crate) fn ensure_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(MatrixError::NotSquare(self.shape()))
        }
    }

    /// Entry at `(row, col)`, or `None` outside the matrix.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Mutable entry at `(row, col)`, or `None` outside the matrix.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.num_rows && col < self.num_cols {
            Some(&mut self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Flat position of `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the matrix.
    #[track_caller]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.num_rows && col < self.num_cols,
            "index ({row}, {col}) out of bounds for {} matrix",
            self.shape()
        );
        row * self.num_cols + col
    }

    #[track_caller]
    fn row_start(&self, row: usize) -> usize {
        assert!(
            row < self.num_rows,
            "row {row} out of bounds for {} matrix",
            self.shape()
        );
        row * self.num_cols
    }

    /// View of row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not a row of the matrix.
    #[must_use]
    #[track_caller]
    pub fn row(&self, row: usize) -> &[T] {
        let start = self.row_start(row);
        &self.data[start..start + self.num_cols]
    }

    /// Mutable view of row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not a row of the matrix.
    #[track_caller]
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let start = self.row_start(row);
        &mut self.data[start..start + self.num_cols]
    }

    /// Iterates over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.num_rows).map(move |row| self.row(row))
    }

    /// Exchanges rows `i` and `j`.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }
}

impl<T: Ring> Matrix<T> {
    /// A `num_rows x num_cols` matrix of zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self::from_parts(vec![T::zero(); num_rows * num_cols], num_rows, num_cols)
    }

    /// The `n x n` identity.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Copies column `col` out.
    ///
    /// # Panics
    ///
    /// Panics if `col` is not a column of a non-empty matrix.
    #[must_use]
    pub fn col(&self, col: usize) -> Vec<T> {
        (0..self.num_rows)
            .map(|row| self[(row, col)].clone())
            .collect()
    }

    /// The product `self * x` for a column vector `x`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if `x` does not have one entry
    /// per column.
    pub fn mv(&self, x: &[T]) -> Result<Vec<T>> {
        if x.len() != self.num_cols {
            return Err(MatrixError::ShapeMismatch {
                op: "matrix-vector product",
                left: self.shape(),
                right: Shape::from((x.len(), 1)),
            });
        }
        Ok(self
            .rows()
            .map(|row| {
                row.iter()
                    .zip(x.iter())
                    .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
            })
            .collect())
    }

    /// The transposed matrix.
    ///
    /// An `n x 0` matrix transposes to the empty matrix, since a matrix with
    /// no rows reports no columns. Transposing twice therefore gives back
    /// `0 x 0`, not `n x 0`.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.num_cols {
            for i in 0..self.num_rows {
                data.push(self[(i, j)].clone());
            }
        }
        Self::from_parts(data, self.num_cols, self.num_rows)
    }

    /// Transposes the matrix in place.
    pub fn transpose_in_place(&mut self) -> &mut Self {
        *self = self.transpose();
        self
    }

    /// Multiplies every entry by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: &T) -> Self {
        Self {
            data: self.data.iter().map(|v| v.clone() * scalar.clone()).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }

    /// Row operation `row[target] += scale * row[source]`.
    pub fn add_scaled_row(&mut self, target: usize, source: usize, scale: &T) {
        for k in 0..self.num_cols {
            let val = self[(source, k)].clone() * scale.clone();
            self[(target, k)] = self[(target, k)].clone() + val;
        }
    }

    /// Multiplies row `row` by `scale`.
    pub fn scale_row(&mut self, row: usize, scale: &T) {
        for entry in self.row_mut(row) {
            *entry = entry.clone() * scale.clone();
        }
    }

    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] unless both shapes agree.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "addition", |a, b| a + b)
    }

    /// Elementwise difference.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] unless both shapes agree.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "subtraction", |a, b| a - b)
    }

    /// The product `self * other`.
    ///
    /// The right operand is transposed first so that both inner-loop reads
    /// walk a row.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] unless the column count of
    /// `self` equals the row count of `other`.
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        if self.num_cols != other.num_rows {
            return Err(MatrixError::ShapeMismatch {
                op: "multiplication",
                left: self.shape(),
                right: other.shape(),
            });
        }

        let other_t = other.transpose();
        let mut data = Vec::with_capacity(self.num_rows * other.num_cols);
        for i in 0..self.num_rows {
            let lhs = self.row(i);
            for j in 0..other.num_cols {
                let rhs = other_t.row(j);
                let sum = lhs
                    .iter()
                    .zip(rhs)
                    .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone());
                data.push(sum);
            }
        }

        Ok(Self::from_parts(data, self.num_rows, other.num_cols))
    }

    fn zip_with(&self, other: &Self, op: &'static str, f: impl Fn(T, T) -> T) -> Result<Self> {
        if self.size() != other.size() {
            return Err(MatrixError::ShapeMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }

        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| f(a.clone(), b.clone()))
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        })
    }

    /// Sets the row count, truncating or appending zero rows.
    pub fn resize_vertically(&mut self, new_rows: usize) -> &mut Self {
        self.data.resize(new_rows * self.num_cols, T::zero());
        self.num_rows = new_rows;
        if new_rows == 0 {
            self.num_cols = 0;
        }
        self
    }

    /// Sets the column count, truncating or appending zero columns.
    pub fn resize_horizontally(&mut self, new_cols: usize) -> &mut Self {
        if self.num_rows == 0 {
            return self;
        }

        let mut data = Vec::with_capacity(self.num_rows * new_cols);
        for i in 0..self.num_rows {
            let row = self.row(i);
            let keep = row.len().min(new_cols);
            data.extend_from_slice(&row[..keep]);
            data.extend(std::iter::repeat_with(T::zero).take(new_cols - keep));
        }
        self.data = data;
        self.num_cols = new_cols;
        self
    }

    /// Extracts rows `top..bottom` and columns `left..right`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfBounds`] if the region is inverted or
    /// does not fit inside the matrix.
    pub fn cut(&self, top: usize, left: usize, bottom: usize, right: usize) -> Result<Self> {
        if top > bottom || left > right || bottom > self.num_rows || right > self.num_cols {
            return Err(MatrixError::OutOfBounds {
                top,
                left,
                bottom,
                right,
                shape: self.shape(),
            });
        }

        let data = (top..bottom)
            .flat_map(|i| self.row(i)[left..right].iter().cloned())
            .collect();
        Ok(Self::from_parts(data, bottom - top, right - left))
    }

    /// In-place variant of [`Matrix::cut`]. The matrix is untouched on error.
    ///
    /// # Errors
    ///
    /// See [`Matrix::cut`].
    pub fn cut_in_place(&mut self, top: usize, left: usize, bottom: usize, right: usize) -> Result<&mut Self> {
        *self = self.cut(top, left, bottom, right)?;
        Ok(self)
    }

    /// Keeps the top-left `rows x cols` block.
    ///
    /// # Errors
    ///
    /// See [`Matrix::cut`].
    pub fn cut_to(&self, rows: usize, cols: usize) -> Result<Self> {
        self.cut(0, 0, rows, cols)
    }

    /// In-place variant of [`Matrix::cut_to`].
    ///
    /// # Errors
    ///
    /// See [`Matrix::cut`].
    pub fn cut_to_in_place(&mut self, rows: usize, cols: usize) -> Result<&mut Self> {
        self.cut_in_place(0, 0, rows, cols)
    }

    /// Appends the columns of `other` to the right of `self`.
    ///
    /// If `other` has more rows, `self` first grows zero rows to match; if it
    /// has fewer, its missing rows count as zeros.
    pub fn concatenate_horizontally_in_place(&mut self, other: &Self) -> &mut Self {
        if other.num_rows > self.num_rows {
            self.resize_vertically(other.num_rows);
        }
        let old_cols = self.num_cols;
        self.resize_horizontally(old_cols + other.num_cols);
        for i in 0..self.num_rows.min(other.num_rows) {
            for (j, value) in other.row(i).iter().enumerate() {
                self[(i, old_cols + j)] = value.clone();
            }
        }
        self
    }

    /// Copying variant of [`Matrix::concatenate_horizontally_in_place`].
    #[must_use]
    pub fn concatenate_horizontally(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.concatenate_horizontally_in_place(other);
        result
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[self.offset(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = [T];

    #[track_caller]
    fn index(&self, row: usize) -> &Self::Output {
        self.row(row)
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    #[track_caller]
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        self.row_mut(row)
    }
}

impl<T: Ring> Add for &Matrix<T> {
    type Output = Matrix<T>;

    /// # Panics
    ///
    /// Panics if the shapes differ; use [`Matrix::checked_add`] to recover.
    fn add(self, other: Self) -> Matrix<T> {
        self.checked_add(other).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Ring> Add for Matrix<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        &self + &other
    }
}

impl<T: Ring> Sub for &Matrix<T> {
    type Output = Matrix<T>;

    /// # Panics
    ///
    /// Panics if the shapes differ; use [`Matrix::checked_sub`] to recover.
    fn sub(self, other: Self) -> Matrix<T> {
        self.checked_sub(other).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Ring> Sub for Matrix<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        &self - &other
    }
}

impl<T: Ring> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    /// # Panics
    ///
    /// Panics if the inner dimensions differ; use [`Matrix::checked_mul`] to
    /// recover.
    fn mul(self, other: Self) -> Matrix<T> {
        self.checked_mul(other).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Ring> Mul for Matrix<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        &self * &other
    }
}

impl<T: Ring> Mul<&T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, scalar: &T) -> Matrix<T> {
        self.scale(scalar)
    }
}

impl<T: Ring> Mul<T> for Matrix<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        self.scale(&scalar)
    }
}

impl<T: Ring> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        Matrix {
            data: self.data.iter().map(|v| -v.clone()).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

impl<T: Ring> Neg for Matrix<T> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

impl<T: Ring> BitOr for &Matrix<T> {
    type Output = Matrix<T>;

    fn bitor(self, other: Self) -> Matrix<T> {
        self.concatenate_horizontally(other)
    }
}

impl<T: Ring> BitOrAssign<&Matrix<T>> for Matrix<T> {
    fn bitor_assign(&mut self, other: &Matrix<T>) {
        self.concatenate_horizontally_in_place(other);
    }
}

/// Renders `(row0,\nrow1)` with each row as `(e0, e1)`.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, row) in self.rows().enumerate() {
            if i != 0 {
                writeln!(f, ",")?;
            }
            write!(f, "(")?;
            for (j, entry) in row.iter().enumerate() {
                if j != 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{entry}")?;
            }
            write!(f, ")")?;
        }
        write!(f, ")")
    }
}
