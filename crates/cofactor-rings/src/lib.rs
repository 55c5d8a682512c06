//! # cofactor-rings
//!
//! Algebraic structures for the cofactor linear algebra toolkit.
//!
//! This crate provides:
//! - Capability traits: `Ring`, `EuclideanDomain`, `Field`, `OrderedRing`
//! - Reference coefficient types: Z, Q, Z_p
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  ├── CommutativeRing
//!  │    └── IntegralDomain
//!  │         └── EuclideanDomain
//!  │              └── Field ──┐
//!  └── OrderedRing ───────────┴── OrderedField
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod finite_field;
pub mod integers;
pub mod rationals;
pub mod traits;

pub use finite_field::FiniteField;
pub use integers::Z;
pub use rationals::Q;
pub use traits::{
    abs, CommutativeRing, EuclideanDomain, Field, IntegralDomain, OrderedField, OrderedRing, Ring,
};
