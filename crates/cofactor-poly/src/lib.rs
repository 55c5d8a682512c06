//! # cofactor-poly
//!
//! Dense univariate polynomials for the cofactor toolkit.
//!
//! This crate provides:
//! - `Polynomial<T>` over any [`Ring`](cofactor_rings::Ring), kept in
//!   canonical form (no trailing zero coefficients)
//! - Ring arithmetic, Horner evaluation and composition
//! - Euclidean division, remainder and monic GCD over a
//!   [`Field`](cofactor_rings::Field)
//!
//! `Polynomial<T>` itself implements `Ring`, so it can be used as the
//! coefficient type of a matrix; that is how characteristic polynomials are
//! computed.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod error;
pub mod polynomial;

#[cfg(test)]
mod proptests;

pub use algorithms::division::{div_rem, divide, remainder};
pub use algorithms::gcd::{extended_gcd, gcd, lcm, make_monic};
pub use error::{PolyError, Result};
pub use polynomial::Polynomial;
