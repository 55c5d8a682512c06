//! Polynomial GCD algorithms.
//!
//! Euclid's algorithm over a field, normalised so that a non-zero result is
//! monic. A coefficient type whose `inv` fails on a non-zero leading
//! coefficient breaks the [`Field`] contract; the error is reported rather
//! than papered over.

use cofactor_rings::traits::Field;

use crate::algorithms::division::div_rem;
use crate::error::{PolyError, Result};
use crate::polynomial::Polynomial;

/// Computes the monic GCD of two polynomials over a field.
///
/// Repeatedly replaces `(a, b)` by `(b, a mod b)` until `b` vanishes. The
/// result is scaled to leading coefficient 1, except that `gcd(0, 0)` is the
/// zero polynomial.
///
/// # Errors
///
/// Returns [`PolyError::NonInvertibleLeadingCoefficient`] if a remainder's
/// leading coefficient has no inverse.
pub fn gcd<F: Field>(a: &Polynomial<F>, b: &Polynomial<F>) -> Result<Polynomial<F>> {
    let mut p = a.clone();
    let mut q = b.clone();

    while !q.is_zero() {
        let (_, r) = div_rem(&p, &q)?;
        p = std::mem::replace(&mut q, r);
    }

    make_monic(&p)
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, s, t)` with `g = s*a + t*b` and `g` the monic GCD. For two
/// zero inputs all three results are zero.
///
/// # Errors
///
/// See [`gcd`].
pub fn extended_gcd<F: Field>(
    a: &Polynomial<F>,
    b: &Polynomial<F>,
) -> Result<(Polynomial<F>, Polynomial<F>, Polynomial<F>)> {
    let mut old_r = a.clone();
    let mut r = b.clone();
    let mut old_s = Polynomial::one();
    let mut s = Polynomial::zero();
    let mut old_t = Polynomial::zero();
    let mut t = Polynomial::one();

    while !r.is_zero() {
        let (q, rem) = div_rem(&old_r, &r)?;
        old_r = std::mem::replace(&mut r, rem);

        let new_s = &old_s - &(&q * &s);
        old_s = std::mem::replace(&mut s, new_s);

        let new_t = &old_t - &(&q * &t);
        old_t = std::mem::replace(&mut t, new_t);
    }

    if old_r.is_zero() {
        return Ok((old_r, Polynomial::zero(), Polynomial::zero()));
    }

    let lead_inv = leading_inverse(&old_r)?;
    Ok((
        old_r.scale(&lead_inv),
        old_s.scale(&lead_inv),
        old_t.scale(&lead_inv),
    ))
}

/// Computes the monic least common multiple; zero if either side is zero.
///
/// # Errors
///
/// See [`gcd`].
pub fn lcm<F: Field>(a: &Polynomial<F>, b: &Polynomial<F>) -> Result<Polynomial<F>> {
    if a.is_zero() || b.is_zero() {
        return Ok(Polynomial::zero());
    }
    let g = gcd(a, b)?;
    let (product, _) = div_rem(&(a * b), &g)?;
    make_monic(&product)
}

/// Scales a polynomial so its leading coefficient is 1.
///
/// The zero polynomial is returned unchanged.
///
/// # Errors
///
/// Returns [`PolyError::NonInvertibleLeadingCoefficient`] if the leading
/// coefficient has no inverse.
pub fn make_monic<F: Field>(p: &Polynomial<F>) -> Result<Polynomial<F>> {
    if p.is_zero() || p.leading_coeff().is_one() {
        return Ok(p.clone());
    }
    Ok(p.scale(&leading_inverse(p)?))
}

fn leading_inverse<F: Field>(p: &Polynomial<F>) -> Result<F> {
    p.leading_coeff()
        .inv()
        .ok_or(PolyError::NonInvertibleLeadingCoefficient)
}
