//! Euclidean algorithms on polynomials over a field.
//!
//! - Long division with remainder
//! - Monic GCD, extended GCD and LCM

pub mod division;
pub mod gcd;
