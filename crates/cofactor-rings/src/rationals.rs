//! Arbitrary precision rationals.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use dashu::base::{Abs, Inverse, Signed as DashuSigned};
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;

use crate::traits::{CommutativeRing, EuclideanDomain, Field, IntegralDomain, OrderedRing, Ring};

/// An element of the rational field, the default coefficient type for
/// elimination.
///
/// Backed by `dashu::rational::RBig`, so values are always kept in lowest
/// terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(pub RBig);

impl Q {
    /// The fraction `num / den`, reduced.
    ///
    /// # Panics
    ///
    /// Panics when `den` is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "denominator cannot be zero");
        let num = if den < 0 { -IBig::from(num) } else { IBig::from(num) };
        Self(RBig::from_parts(num, UBig::from(den.unsigned_abs())))
    }

    /// The rational `n / 1`.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(RBig::from(IBig::from(n)))
    }

    /// Numerator in lowest terms.
    #[must_use]
    pub fn numerator(&self) -> &IBig {
        self.0.numerator()
    }

    /// Denominator in lowest terms, always positive.
    #[must_use]
    pub fn denominator(&self) -> &UBig {
        self.0.denominator()
    }

    /// Returns the inner `RBig`.
    #[must_use]
    pub fn into_inner(self) -> RBig {
        self.0
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl CommutativeRing for Q {}
impl IntegralDomain for Q {}

impl EuclideanDomain for Q {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        // Division is exact in a field
        (Self(self.0.clone() / other.0.clone()), Self::zero())
    }

    fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() && other.is_zero() {
            Self::zero()
        } else {
            Self::one()
        }
    }

    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        if self.is_zero() && other.is_zero() {
            return (Self::zero(), Self::zero(), Self::zero());
        }

        if self.is_zero() {
            (Self::one(), Self::zero(), Self(other.0.clone().inv()))
        } else {
            (Self::one(), Self(self.0.clone().inv()), Self::zero())
        }
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self(self.0.clone().inv()))
        }
    }
}

impl OrderedRing for Q {
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

impl Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Div for Q {
    type Output = Self;

    /// # Panics
    ///
    /// Panics on division by zero.
    fn div(self, rhs: Self) -> Self::Output {
        assert!(!rhs.is_zero(), "division by zero");
        Self(self.0 / rhs.0)
    }
}

impl Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<RBig> for Q {
    fn from(value: RBig) -> Self {
        Self(value)
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self.denominator() == UBig::ONE {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}
