//! The ring of integers Z.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use dashu::base::{Abs, Signed as DashuSigned};
use dashu::integer::IBig;

use crate::traits::{CommutativeRing, IntegralDomain, OrderedRing, Ring};

/// The ring of integers.
///
/// Not a field: matrices over `Z` support products and the Leibniz
/// determinant but not elimination.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Z(pub IBig);

impl Z {
    /// Creates a new integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Converts to `i64` if the value fits.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(self.0.clone()).ok()
    }
}

impl Ring for Z {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl CommutativeRing for Z {}
impl IntegralDomain for Z {}

impl OrderedRing for Z {
    fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }
}

impl Add for Z {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Z {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Z {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Z {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Z {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<IBig> for Z {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

impl fmt::Display for Z {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_laws() {
        let a = Z::new(10);
        let b = Z::new(3);

        assert!(Z::zero().is_zero());
        assert!(Z::one().is_one());

        assert_eq!((a.clone() + b.clone()).to_i64(), Some(13));
        assert_eq!((a.clone() - b.clone()).to_i64(), Some(7));
        assert_eq!((a * b).to_i64(), Some(30));
    }

    #[test]
    fn test_ordering() {
        assert_eq!(Z::new(-4).abs(), Z::new(4));
        assert_eq!(Z::new(-4).signum(), -1);
        assert!(Z::new(-4) < Z::new(2));
    }
}
