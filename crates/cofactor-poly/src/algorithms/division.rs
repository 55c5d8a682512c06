//! Polynomial long division.

use std::ops::{Div, Rem};

use cofactor_rings::traits::{EuclideanDomain, Field};

use crate::error::{PolyError, Result};
use crate::polynomial::Polynomial;

/// Divides `a` by `b`, returning `(quotient, remainder)`.
///
/// Works from the top degree of the dividend downward, cancelling the current
/// leading term with a multiple of `b`. On success the remainder is zero or has
/// degree below `deg(b)`.
///
/// # Errors
///
/// Returns [`PolyError::DivisionByZero`] if `b` is zero, and
/// [`PolyError::NonInvertibleLeadingCoefficient`] if the leading coefficient
/// of `b` has no inverse.
pub fn div_rem<F: Field>(a: &Polynomial<F>, b: &Polynomial<F>) -> Result<(Polynomial<F>, Polynomial<F>)> {
    if b.is_zero() {
        return Err(PolyError::DivisionByZero);
    }
    let lead_inv = b
        .leading_coeff()
        .inv()
        .ok_or(PolyError::NonInvertibleLeadingCoefficient)?;

    let divisor = b.coeffs();
    let d = divisor.len();
    if a.coeffs().len() < d {
        return Ok((Polynomial::zero(), a.clone()));
    }

    let mut remainder = a.coeffs().to_vec();
    let mut quotient = vec![F::zero(); remainder.len() - d + 1];

    for shift in (0..quotient.len()).rev() {
        let coeff = remainder[shift + d - 1].clone() * lead_inv.clone();
        if coeff.is_zero() {
            continue;
        }
        for (i, bc) in divisor.iter().enumerate() {
            remainder[shift + i] = remainder[shift + i].clone() - coeff.clone() * bc.clone();
        }
        quotient[shift] = coeff;
    }

    // everything from degree deg(b) upward has been cancelled
    remainder.truncate(d - 1);
    Ok((Polynomial::new(quotient), Polynomial::new(remainder)))
}

/// Returns the quotient of `a / b`.
///
/// # Errors
///
/// See [`div_rem`].
pub fn divide<F: Field>(a: &Polynomial<F>, b: &Polynomial<F>) -> Result<Polynomial<F>> {
    div_rem(a, b).map(|(q, _)| q)
}

/// Returns the remainder of `a / b`.
///
/// # Errors
///
/// See [`div_rem`].
pub fn remainder<F: Field>(a: &Polynomial<F>, b: &Polynomial<F>) -> Result<Polynomial<F>> {
    div_rem(a, b).map(|(_, r)| r)
}

impl<F: Field> Polynomial<F> {
    /// Divides by `divisor`, returning `(quotient, remainder)`.
    ///
    /// # Errors
    ///
    /// See [`div_rem`].
    pub fn checked_div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        div_rem(self, divisor)
    }
}

impl<F: Field> Div for &Polynomial<F> {
    type Output = Polynomial<F>;

    /// # Panics
    ///
    /// Panics if the divisor is zero or has a non-invertible leading
    /// coefficient.
    fn div(self, rhs: Self) -> Polynomial<F> {
        divide(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<F: Field> Div for Polynomial<F> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        &self / &rhs
    }
}

impl<F: Field> Rem for &Polynomial<F> {
    type Output = Polynomial<F>;

    /// # Panics
    ///
    /// Panics if the divisor is zero or has a non-invertible leading
    /// coefficient.
    fn rem(self, rhs: Self) -> Polynomial<F> {
        remainder(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<F: Field> Rem for Polynomial<F> {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        &self % &rhs
    }
}

impl<F: Field> EuclideanDomain for Polynomial<F> {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        div_rem(self, other).unwrap_or_else(|e| panic!("{e}"))
    }

    fn gcd(&self, other: &Self) -> Self {
        crate::algorithms::gcd::gcd(self, other).unwrap_or_else(|e| panic!("{e}"))
    }

    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        crate::algorithms::gcd::extended_gcd(self, other).unwrap_or_else(|e| panic!("{e}"))
    }
}
