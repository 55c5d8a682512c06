//! Prime fields Z_p.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::traits::{CommutativeRing, EuclideanDomain, Field, IntegralDomain, Ring};

/// The finite field Z_p for prime p.
///
/// Elements are stored reduced into `0..P`. There is no meaningful order, so
/// this type exercises the parts of the crate that only need a [`Field`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct FiniteField<const P: u64>(u64);

impl<const P: u64> FiniteField<P> {
    /// Creates a new field element, reducing modulo `P`.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value % P)
    }

    /// Reduces a signed integer into `0..P`.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        let p = i128::from(P);
        let reduced = i128::from(value).rem_euclid(p);
        // rem_euclid keeps the value in 0..P, which fits in u64
        Self(u64::try_from(reduced).unwrap_or_default())
    }

    /// Returns the canonical representative in `0..P`.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The modulus `P`.
    #[must_use]
    pub const fn characteristic() -> u64 {
        P
    }

    fn pow_u64(self, mut exp: u64) -> Self {
        let mut result = Self::new(1);
        let mut base = self;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            exp >>= 1;
        }
        result
    }
}

impl<const P: u64> Ring for FiniteField<P> {
    fn zero() -> Self {
        Self(0)
    }

    fn one() -> Self {
        Self::new(1)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }

    fn is_one(&self) -> bool {
        self.0 == 1 % P
    }
}

impl<const P: u64> CommutativeRing for FiniteField<P> {}
impl<const P: u64> IntegralDomain for FiniteField<P> {}

impl<const P: u64> EuclideanDomain for FiniteField<P> {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        match other.inv() {
            Some(inv) => (*self * inv, Self::zero()),
            None => panic!("division by zero in Z_{}", P),
        }
    }

    fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() && other.is_zero() {
            Self::zero()
        } else {
            Self::one()
        }
    }

    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        match (self.inv(), other.inv()) {
            (Some(inv), _) => (Self::one(), inv, Self::zero()),
            (None, Some(inv)) => (Self::one(), Self::zero(), inv),
            (None, None) => (Self::zero(), Self::zero(), Self::zero()),
        }
    }
}

impl<const P: u64> Field for FiniteField<P> {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            // Fermat: a^(p-2) = a^(-1)
            Some(self.pow_u64(P - 2))
        }
    }
}

impl<const P: u64> Add for FiniteField<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let sum = u128::from(self.0) + u128::from(rhs.0);
        Self((sum % u128::from(P)) as u64)
    }
}

impl<const P: u64> Sub for FiniteField<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<const P: u64> Mul for FiniteField<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let product = u128::from(self.0) * u128::from(rhs.0);
        Self((product % u128::from(P)) as u64)
    }
}

impl<const P: u64> Neg for FiniteField<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.0 == 0 {
            self
        } else {
            Self(P - self.0)
        }
    }
}

impl<const P: u64> fmt::Display for FiniteField<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
