//! # cofactor-perm
//!
//! Finite permutations of `{0, .., n-1}` for the cofactor toolkit.
//!
//! Besides the usual group operations (composition, inverse, powers) this
//! crate drives exhaustive enumeration: [`Permutation::next`] steps through
//! all permutations of a given size in lexicographic order, which is how the
//! Leibniz determinant in `cofactor-linalg` visits its terms.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod permutation;

#[cfg(test)]
mod proptests;

pub use error::{PermutationError, Result};
pub use permutation::{LexicographicIter, Permutation};
