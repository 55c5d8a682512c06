//! The `Polynomial` type and its ring arithmetic.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use cofactor_rings::traits::{CommutativeRing, IntegralDomain, Ring};

/// A polynomial in one variable with every coefficient stored.
///
/// Coefficients are stored in ascending degree order: index `i` holds the
/// coefficient of `x^i`.
///
/// # Invariant
///
/// The coefficient vector is never empty and has no trailing zeros, except
/// that the zero polynomial is stored as the single coefficient `0`. Every
/// constructor and arithmetic operation restores this form, so structural
/// equality is polynomial equality.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Polynomial<T: Ring> {
    coeffs: Vec<T>,
}

impl<T: Ring> Polynomial<T> {
    /// Creates a new polynomial from coefficients in ascending degree order.
    #[must_use]
    pub fn new(coeffs: Vec<T>) -> Self {
        let mut p = Self { coeffs };
        p.trim();
        p
    }

    /// The zero polynomial, stored as `[0]`.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![T::zero()],
        }
    }

    /// The constant one.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![T::one()],
        }
    }

    /// The constant polynomial `c`.
    #[must_use]
    pub fn constant(c: T) -> Self {
        Self::new(vec![c])
    }

    /// The variable itself.
    #[must_use]
    pub fn x() -> Self {
        Self::new(vec![T::zero(), T::one()])
    }

    /// The single term `c * x^n`.
    #[must_use]
    pub fn monomial(c: T, n: usize) -> Self {
        let mut coeffs = vec![T::zero(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        if self.is_zero() {
            None
        } else {
            Some(self.coeffs.len() - 1)
        }
    }

    /// Returns the degree with the zero polynomial mapped to `-1`.
    #[must_use]
    pub fn signed_degree(&self) -> isize {
        self.degree()
            .and_then(|d| isize::try_from(d).ok())
            .unwrap_or(-1)
    }

    /// True only for the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns the leading coefficient (zero for the zero polynomial).
    #[must_use]
    pub fn leading_coeff(&self) -> &T {
        // never empty by invariant
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns the coefficient of x^i, zero past the degree.
    #[must_use]
    pub fn coeff(&self, i: usize) -> T {
        self.coeffs.get(i).cloned().unwrap_or_else(T::zero)
    }

    /// Returns all coefficients in ascending degree order.
    #[must_use]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// Iterates over the coefficients in ascending degree order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.coeffs.iter()
    }

    /// Consumes the polynomial, returning its coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<T> {
        self.coeffs
    }

    /// Value at `x`, by Horner's rule.
    #[must_use]
    pub fn eval(&self, x: &T) -> T {
        let mut result = T::zero();
        for c in self.coeffs.iter().rev() {
            result = result * x.clone() + c.clone();
        }
        result
    }

    /// Substitutes `other` for the variable: returns `self(other(x))`.
    ///
    /// Accumulates successive powers of `other`, so this costs O(deg²)
    /// polynomial multiplications.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        let mut power = Self::one();
        for (i, c) in self.coeffs.iter().enumerate() {
            if !c.is_zero() {
                result += &power.scale(c);
            }
            if i + 1 < self.coeffs.len() {
                power *= other;
            }
        }
        result
    }

    /// Multiplies every coefficient by a scalar.
    #[must_use]
    pub fn scale(&self, c: &T) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self::new(self.coeffs.iter().map(|x| x.clone() * c.clone()).collect())
    }

    /// Formal derivative `d/dx`.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.coeffs.len() == 1 {
            return Self::zero();
        }

        Self::new(
            self.coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, c)| c.mul_by_scalar(i64::try_from(i).unwrap_or(i64::MAX)))
                .collect(),
        )
    }

    /// `self^n` by square and multiply.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }

        result
    }

    /// Removes trailing zeros, keeping at least one coefficient.
    fn trim(&mut self) {
        while self.coeffs.len() > 1 && self.coeffs.last().is_some_and(|c| c.is_zero()) {
            self.coeffs.pop();
        }
        if self.coeffs.is_empty() {
            self.coeffs.push(T::zero());
        }
    }

    /// Coefficient-wise combination, padding the shorter side with zeros.
    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        Self::new((0..len).map(|i| f(self.coeff(i), other.coeff(i))).collect())
    }

    /// Schoolbook convolution of the coefficient sequences.
    fn convolve(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![T::zero(); n + m - 1];

        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] = result[i + j].clone() + a.clone() * b.clone();
            }
        }

        Self::new(result)
    }
}

impl<T: Ring> Default for Polynomial<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Ring> From<T> for Polynomial<T> {
    fn from(value: T) -> Self {
        Self::constant(value)
    }
}

impl<T: Ring> FromIterator<T> for Polynomial<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T: Ring> IntoIterator for &'a Polynomial<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.coeffs.iter()
    }
}

impl<T: Ring> Add for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, other: Self) -> Polynomial<T> {
        self.zip_with(other, |a, b| a + b)
    }
}

impl<T: Ring> Add for Polynomial<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        &self + &other
    }
}

impl<T: Ring> AddAssign<&Polynomial<T>> for Polynomial<T> {
    fn add_assign(&mut self, other: &Self) {
        *self = &*self + other;
    }
}

impl<T: Ring> Sub for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, other: Self) -> Polynomial<T> {
        self.zip_with(other, |a, b| a - b)
    }
}

impl<T: Ring> Sub for Polynomial<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        &self - &other
    }
}

impl<T: Ring> SubAssign<&Polynomial<T>> for Polynomial<T> {
    fn sub_assign(&mut self, other: &Self) {
        *self = &*self - other;
    }
}

impl<T: Ring> Mul for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, other: Self) -> Polynomial<T> {
        self.convolve(other)
    }
}

impl<T: Ring> Mul for Polynomial<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.convolve(&other)
    }
}

impl<T: Ring> MulAssign<&Polynomial<T>> for Polynomial<T> {
    fn mul_assign(&mut self, other: &Self) {
        *self = self.convolve(other);
    }
}

impl<T: Ring> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        // negation never creates trailing zeros
        Polynomial {
            coeffs: self.coeffs.iter().map(|c| -c.clone()).collect(),
        }
    }
}

impl<T: Ring> Neg for Polynomial<T> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

impl<T: Ring> Ring for Polynomial<T> {
    fn zero() -> Self {
        Polynomial::zero()
    }

    fn one() -> Self {
        Polynomial::one()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }

    fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_one()
    }
}

impl<T: CommutativeRing> CommutativeRing for Polynomial<T> {}
impl<T: IntegralDomain> IntegralDomain for Polynomial<T> {}

impl<T: Ring> num_traits::Zero for Polynomial<T> {
    fn zero() -> Self {
        Polynomial::zero()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl<T: Ring> num_traits::One for Polynomial<T> {
    fn one() -> Self {
        Polynomial::one()
    }
}

/// Renders terms in descending degree, e.g. `x^2-5*x+6`.
///
/// Zero terms are skipped, unit coefficients are omitted except on the
/// constant term, and `*` separates a printed coefficient from the variable.
impl<T: Ring + fmt::Display> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (power, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }

            let rendered = c.to_string();
            let minus_one = (-c.clone()).is_one();
            let negative = rendered.starts_with('-') || (minus_one && power != 0);
            if !first && !negative {
                write!(f, "+")?;
            }
            first = false;

            if power == 0 {
                write!(f, "{rendered}")?;
                continue;
            }

            if minus_one {
                write!(f, "-")?;
            } else if !c.is_one() {
                write!(f, "{rendered}*")?;
            }

            if power == 1 {
                write!(f, "x")?;
            } else {
                write!(f, "x^{power}")?;
            }
        }

        Ok(())
    }
}
