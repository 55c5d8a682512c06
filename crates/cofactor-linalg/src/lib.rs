//! # cofactor-linalg
//!
//! Dense matrices with exact coefficients for the cofactor toolkit.
//!
//! This crate provides:
//! - `Matrix<T>` over any [`Ring`](cofactor_rings::Ring): sums, products,
//!   transposition, block cuts and horizontal concatenation
//! - Gauss-Jordan reduction, rank, determinant, inverse and linear solves
//!   over a [`Field`](cofactor_rings::Field), with a pluggable pivot rule
//! - Leibniz determinants and characteristic polynomials, which only need
//!   ring arithmetic
//!
//! ## Pivot selection
//!
//! - Ordered fields such as `Q` default to [`LargestMagnitude`]
//! - Any field, finite ones included, can use [`FirstNonZero`] through the
//!   `*_with` methods

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;
pub mod determinant;
pub mod elimination;
pub mod error;

pub use dense_matrix::Matrix;
pub use determinant::LeibnizConfig;
pub use elimination::{FirstNonZero, LargestMagnitude, PivotRule, Reduction};
pub use error::{MatrixError, Result, Shape};

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;
