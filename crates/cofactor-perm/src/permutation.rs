//! Permutations stored as image arrays.

use std::fmt;
use std::ops::{Index, Mul, MulAssign};

use crate::error::{PermutationError, Result};

/// A bijection of `{0, .., n-1}`.
///
/// `images[i]` is the image of `i`. Permutations of different sizes may be
/// composed: the smaller one is padded with fixed points first.
///
/// The derived order is lexicographic on the image array, which is the order
/// [`Permutation::next`] walks.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Permutation {
    images: Vec<usize>,
}

impl Permutation {
    /// Creates the identity permutation on `n` elements.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self {
            images: (0..n).collect(),
        }
    }

    /// Creates a permutation from its image array without validation.
    ///
    /// The caller must supply a bijection on `0..images.len()`; use
    /// [`Permutation::try_from_images`] for untrusted input.
    #[must_use]
    pub fn from_images(images: Vec<usize>) -> Self {
        Self { images }
    }

    /// Creates a permutation from its image array, checking that it is a
    /// bijection.
    ///
    /// # Errors
    ///
    /// Returns [`PermutationError::NotABijection`] if an image is out of
    /// range or appears twice.
    pub fn try_from_images(images: Vec<usize>) -> Result<Self> {
        let size = images.len();
        let mut seen = vec![false; size];
        for &image in &images {
            if image >= size || seen[image] {
                return Err(PermutationError::NotABijection { image, size });
            }
            seen[image] = true;
        }
        Ok(Self { images })
    }

    /// Builds a permutation of `size` elements from a chain of points by
    /// swapping each consecutive pair, starting from the identity.
    ///
    /// For `points = [a, b, c]` this swaps positions `a, b` and then `b, c`.
    ///
    /// # Panics
    ///
    /// Panics if a point is not below `size`.
    #[must_use]
    pub fn cycle(size: usize, points: &[usize]) -> Self {
        let mut result = Self::identity(size);
        for pair in points.windows(2) {
            result.swap(pair[0], pair[1]);
        }
        result
    }

    /// Returns the number of elements permuted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns true for the permutation of zero elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Returns the image array.
    #[must_use]
    pub fn images(&self) -> &[usize] {
        &self.images
    }

    /// Returns the image of `i`; points beyond the size are fixed.
    #[must_use]
    pub fn apply(&self, i: usize) -> usize {
        self.images.get(i).copied().unwrap_or(i)
    }

    /// Returns true if every point is fixed.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.images.iter().enumerate().all(|(i, &image)| i == image)
    }

    /// Swaps the images at positions `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.images.swap(i, j);
    }

    /// Grows the permutation to `new_size` elements, adding fixed points.
    ///
    /// Never shrinks.
    pub fn resize(&mut self, new_size: usize) -> &mut Self {
        let old_size = self.len();
        if new_size > old_size {
            self.images.extend(old_size..new_size);
        }
        self
    }

    /// Composes two permutations: the result maps `i` to `self[other[i]]`.
    ///
    /// `other` is applied first. The result has the larger of the two sizes.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        let size = self.len().max(other.len());
        Self {
            images: (0..size).map(|i| self.apply(other.apply(i))).collect(),
        }
    }

    /// Returns the inverse permutation.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut images = vec![0; self.len()];
        for (i, &image) in self.images.iter().enumerate() {
            images[image] = i;
        }
        Self { images }
    }

    /// Inverts the permutation in place.
    pub fn invert(&mut self) -> &mut Self {
        *self = self.inverse();
        self
    }

    /// Raises the permutation to an integer power.
    ///
    /// Uses binary exponentiation, so only O(log |k|) compositions are
    /// performed. Negative powers invert first; `pow(0)` is the identity of
    /// the same size.
    #[must_use]
    pub fn pow(&self, k: i64) -> Self {
        let mut base = if k < 0 { self.inverse() } else { self.clone() };
        let mut result = Self::identity(self.len());
        let mut exp = k.unsigned_abs();

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.compose(&base);
            }
            base = base.compose(&base);
            exp >>= 1;
        }

        result
    }

    /// Raises the permutation to an integer power in place.
    pub fn pow_assign(&mut self, k: i64) -> &mut Self {
        *self = self.pow(k);
        self
    }

    /// Advances to the lexicographic successor.
    ///
    /// Returns `false`, leaving the permutation unchanged, when it is
    /// already the last permutation of its size (the decreasing one).
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        let n = self.len();
        if n < 2 {
            return false;
        }

        // Rightmost ascent
        let Some(i) = (0..n - 1).rev().find(|&i| self.images[i] < self.images[i + 1]) else {
            return false;
        };

        // The suffix after i is decreasing, so the rightmost larger element is
        // the smallest one exceeding images[i]
        let pivot = self.images[i];
        let j = (i + 1..n)
            .rev()
            .find(|&j| self.images[j] > pivot)
            .unwrap_or(i + 1);

        self.images.swap(i, j);
        self.images[i + 1..].reverse();
        true
    }

    /// Returns the sign of the permutation: `1` if even, `-1` if odd.
    ///
    /// Each cycle of even length contributes a factor of `-1`.
    #[must_use]
    pub fn sign(&self) -> i8 {
        let mut visited = vec![false; self.len()];
        let mut sign = 1;

        for start in 0..self.len() {
            if visited[start] {
                continue;
            }
            let mut length = 0usize;
            let mut j = start;
            while !visited[j] {
                visited[j] = true;
                j = self.images[j];
                length += 1;
            }
            if length % 2 == 0 {
                sign = -sign;
            }
        }

        sign
    }

    /// Decomposes the permutation into disjoint cycles, fixed points
    /// included, each starting at its smallest element.
    #[must_use]
    pub fn cycles(&self) -> Vec<Vec<usize>> {
        let mut visited = vec![false; self.len()];
        let mut cycles = Vec::new();

        for start in 0..self.len() {
            if visited[start] {
                continue;
            }
            let mut cycle = Vec::new();
            let mut j = start;
            while !visited[j] {
                visited[j] = true;
                cycle.push(j);
                j = self.images[j];
            }
            cycles.push(cycle);
        }

        cycles
    }

    /// Iterates over every permutation of `n` elements in lexicographic
    /// order, starting from the identity.
    #[must_use]
    pub fn iter_all(n: usize) -> LexicographicIter {
        LexicographicIter {
            current: Some(Self::identity(n)),
        }
    }
}

/// Iterator over all permutations of a fixed size, in lexicographic order.
///
/// Created by [`Permutation::iter_all`].
#[derive(Clone, Debug)]
pub struct LexicographicIter {
    current: Option<Permutation>,
}

impl Iterator for LexicographicIter {
    type Item = Permutation;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        let mut successor = current.clone();
        if successor.next() {
            self.current = Some(successor);
        }
        Some(current)
    }
}

impl Index<usize> for Permutation {
    type Output = usize;

    fn index(&self, i: usize) -> &Self::Output {
        &self.images[i]
    }
}

impl Mul for &Permutation {
    type Output = Permutation;

    fn mul(self, rhs: Self) -> Permutation {
        self.compose(rhs)
    }
}

impl Mul for Permutation {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl MulAssign<&Permutation> for Permutation {
    fn mul_assign(&mut self, rhs: &Permutation) {
        *self = self.compose(rhs);
    }
}

impl From<Permutation> for Vec<usize> {
    fn from(value: Permutation) -> Self {
        value.images
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, image) in self.images.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{image}")?;
        }
        write!(f, ")")
    }
}
