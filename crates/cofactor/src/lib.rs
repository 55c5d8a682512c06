//! # Cofactor
//!
//! Exact linear algebra over generic coefficient rings.
//!
//! Matrices, polynomials and permutations are generic over the algebraic
//! traits in [`rings`], so the same code computes with big rationals,
//! big integers, prime fields and even polynomials as matrix entries.
//!
//! ## Features
//!
//! - **Matrices**: Gauss-Jordan reduction, rank, determinants, inverses,
//!   linear solves, block cuts and concatenation
//! - **Polynomials**: ring arithmetic, Horner evaluation, composition,
//!   Euclidean division and GCD
//! - **Permutations**: composition, powers, signs and lexicographic
//!   enumeration
//! - **Characteristic polynomials** through Leibniz expansion over
//!   polynomial entries
//!
//! ## Quick Start
//!
//! ```rust
//! use cofactor::prelude::*;
//!
//! let m = Matrix::from_rows(vec![
//!     vec![Q::from_integer(2), Q::from_integer(1)],
//!     vec![Q::from_integer(1), Q::from_integer(1)],
//! ]);
//!
//! assert_eq!(m.determinant(), Ok(Q::from_integer(1)));
//! assert_eq!(m.characteristic_polynomial().unwrap().to_string(), "x^2-3*x+1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use cofactor_linalg as linalg;
pub use cofactor_perm as perm;
pub use cofactor_poly as poly;
pub use cofactor_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use cofactor_linalg::{FirstNonZero, LargestMagnitude, LeibnizConfig, Matrix, MatrixError, PivotRule};
    pub use cofactor_perm::{Permutation, PermutationError};
    pub use cofactor_poly::{PolyError, Polynomial};
    pub use cofactor_rings::{EuclideanDomain, Field, FiniteField, OrderedRing, Ring, Q, Z};
}
