//! # polycalc-poly
//!
//! Sparse univariate polynomial algebra.
//!
//! Polynomials are exponent-sorted term lists with merge-on-insert
//! arithmetic: every operation funnels through a single term-insertion
//! primitive that keeps the representation sorted, duplicate-free, and
//! free of negligible coefficients.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod sparse;

#[cfg(test)]
mod proptests;

pub use sparse::{Polynomial, Term, EPSILON};
