//! # polycalc-numeric
//!
//! Exact rational arithmetic for the polycalc calculator.
//!
//! This crate provides a fixed-width rational number type (`Rational`)
//! stored in lowest terms with a positive denominator, together with the
//! error type shared by the numeric operations.
//!
//! ## Performance Notes
//!
//! - Values are two machine words and `Copy`; every operation is allocation-free
//! - Exponentiation is binary (square-and-multiply), O(log exp) multiplications

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rational;

#[cfg(test)]
mod proptests;

pub use rational::{NumericError, Rational};
