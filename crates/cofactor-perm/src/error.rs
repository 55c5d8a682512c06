//! Errors raised when building permutations.

use thiserror::Error;

/// Errors that can occur when validating a permutation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PermutationError {
    /// The image array is not a bijection on `0..size`.
    #[error("image {image} is out of range or repeated in a permutation of size {size}")]
    NotABijection {
        /// The offending image value.
        image: usize,
        /// Size of the permutation being built.
        size: usize,
    },
}

/// Result alias for permutation construction.
pub type Result<T, E = PermutationError> = std::result::Result<T, E>;
