//! # polycalc-eval
//!
//! Infix expression evaluation over exact rationals.
//!
//! This crate provides:
//! - A growable LIFO stack (`Stack`) with amortized-doubling capacity
//! - A two-stack precedence-climbing evaluator (`evaluate`) that reduces
//!   an infix arithmetic string to a single [`polycalc_numeric::Rational`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod evaluator;
pub mod stack;

#[cfg(test)]
mod proptests;

pub use evaluator::{evaluate, EvalError};
pub use stack::{Stack, StackError};
