//! The coefficient hierarchy.
//!
//! These traits describe what a coefficient type must provide before it can
//! be stored in a polynomial or a matrix. The split mirrors what each
//! algorithm actually needs:
//!
//! - [`Ring`] is enough for sums, products and the Leibniz determinant.
//! - [`Field`] adds inverses and unlocks elimination and division.
//! - [`OrderedRing`] adds a total order and an absolute value, which only the
//!   largest-magnitude pivot rule relies on.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// Coefficients that can be added, subtracted and multiplied.
///
/// Implementors must satisfy the ring axioms: `+` forms an abelian group
/// with neutral element [`Ring::zero`], `*` is associative with neutral
/// element [`Ring::one`], and `*` distributes over `+`. Commutativity of `*`
/// is not assumed here.
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// Neutral element of addition.
    fn zero() -> Self;

    /// Neutral element of multiplication.
    fn one() -> Self;

    /// True for the neutral element of addition.
    fn is_zero(&self) -> bool;

    /// True for the neutral element of multiplication.
    fn is_one(&self) -> bool;

    /// The integer multiple `n * self`, by repeated doubling.
    fn mul_by_scalar(&self, n: i64) -> Self {
        let mut acc = Self::zero();
        let mut addend = self.clone();
        let mut k = n.unsigned_abs();

        while k != 0 {
            if k & 1 == 1 {
                acc = acc + addend.clone();
            }
            k >>= 1;
            if k != 0 {
                addend = addend.clone() + addend;
            }
        }

        if n < 0 {
            -acc
        } else {
            acc
        }
    }

    /// `self` raised to the `n`-th power; `pow(0)` is one.
    fn pow(&self, n: u32) -> Self {
        let mut acc = Self::one();
        let mut square = self.clone();
        let mut k = n;

        while k != 0 {
            if k & 1 == 1 {
                acc = acc * square.clone();
            }
            k >>= 1;
            if k != 0 {
                square = square.clone() * square;
            }
        }

        acc
    }

    /// Multiplies by a permutation sign: negates when `sign` is negative.
    #[must_use]
    fn signed(self, sign: i8) -> Self {
        if sign < 0 {
            -self
        } else {
            self
        }
    }
}

/// Rings whose multiplication commutes.
pub trait CommutativeRing: Ring {}

/// Commutative rings without zero divisors: `a * b = 0` forces `a = 0` or
/// `b = 0`.
pub trait IntegralDomain: CommutativeRing {}

/// Integral domains with a division algorithm.
///
/// `div_rem(a, b)` returns `(q, r)` with `a = b * q + r`, where `r` is zero
/// or strictly smaller than `b` under the domain's size function.
pub trait EuclideanDomain: IntegralDomain {
    /// Quotient and remainder of `self` by `other`.
    ///
    /// # Panics
    ///
    /// Implementations may panic when `other` is zero.
    fn div_rem(&self, other: &Self) -> (Self, Self);

    /// Quotient part of [`EuclideanDomain::div_rem`].
    fn div(&self, other: &Self) -> Self {
        self.div_rem(other).0
    }

    /// Remainder part of [`EuclideanDomain::div_rem`].
    fn rem(&self, other: &Self) -> Self {
        self.div_rem(other).1
    }

    /// A greatest common divisor, by Euclid's algorithm. Not normalised.
    fn gcd(&self, other: &Self) -> Self {
        let (mut a, mut b) = (self.clone(), other.clone());
        while !b.is_zero() {
            let r = a.rem(&b);
            a = std::mem::replace(&mut b, r);
        }
        a
    }

    /// A least common multiple; zero if either side is zero.
    fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            Self::zero()
        } else {
            self.div(&self.gcd(other)) * other.clone()
        }
    }

    /// Returns `(g, s, t)` with `g = gcd(self, other) = self * s + other * t`.
    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self);
}

/// Euclidean domains where every non-zero element is a unit.
pub trait Field: EuclideanDomain {
    /// Multiplicative inverse, or `None` for zero.
    fn inv(&self) -> Option<Self>;

    /// `self / other`, or `None` when `other` is zero.
    fn field_div(&self, other: &Self) -> Option<Self> {
        other.inv().map(|inv| self.clone() * inv)
    }
}

/// Rings with a total order compatible with addition.
pub trait OrderedRing: Ring + Ord {
    /// `self` or `-self`, whichever is not negative.
    fn abs(&self) -> Self;

    /// `-1`, `0` or `1` according to the sign of `self`.
    fn signum(&self) -> i8;
}

/// A field with a total order compatible with its arithmetic.
///
/// Blanket implemented; exists so that pivot selection can ask for a single
/// bound.
pub trait OrderedField: Field + OrderedRing {}

impl<T: Field + OrderedRing> OrderedField for T {}

/// Absolute value for any ordered ring element.
///
/// Works without an [`OrderedRing`] implementation: only the order and
/// negation are used.
pub fn abs<T: Ring + Ord>(value: &T) -> T {
    if *value < T::zero() {
        -value.clone()
    } else {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integers::Z;
    use crate::rationals::Q;

    #[test]
    fn test_default_pow() {
        let two = Z::new(2);
        assert_eq!(Ring::pow(&two, 10), Z::new(1024));
        assert_eq!(Ring::pow(&two, 0), Z::new(1));
    }

    #[test]
    fn test_mul_by_scalar() {
        let q = Q::new(1, 3);
        assert_eq!(q.mul_by_scalar(3), Q::from_integer(1));
        assert_eq!(q.mul_by_scalar(-6), Q::from_integer(-2));
        assert!(q.mul_by_scalar(0).is_zero());
    }

    #[test]
    fn test_signed() {
        assert_eq!(Z::new(5).signed(-1), Z::new(-5));
        assert_eq!(Z::new(5).signed(1), Z::new(5));
    }

    #[test]
    fn test_abs_helper() {
        assert_eq!(abs(&Z::new(-7)), Z::new(7));
        assert_eq!(abs(&Q::new(3, 4)), Q::new(3, 4));
        assert_eq!(abs(&Q::new(-3, 4)), Q::new(3, 4));
    }

    #[test]
    fn test_field_div() {
        let a = Q::new(1, 2);
        assert_eq!(a.field_div(&Q::new(1, 4)), Some(Q::from_integer(2)));
        assert_eq!(a.field_div(&Q::from_integer(0)), None);
    }
}
