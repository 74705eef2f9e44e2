//! # Polycalc
//!
//! Exact rational expression evaluation and sparse polynomial algebra.
//!
//! ## Features
//!
//! - **Exact Arithmetic**: fractions in lowest terms, no floating-point drift
//! - **Expression Evaluation**: two-stack precedence climbing with `+ - * / ^`,
//!   parentheses, and unary signs
//! - **Polynomial Algebra**: sparse exponent-sorted terms with addition,
//!   subtraction, multiplication, evaluation, and differentiation
//!
//! ## Quick Start
//!
//! ```
//! use polycalc::prelude::*;
//!
//! let value = evaluate("(2 + 3) * 4").unwrap();
//! assert_eq!(value.numerator(), 20);
//!
//! let p = Polynomial::from_terms([(2.0, 2), (-1.0, 1), (5.0, 0)]);
//! assert!((p.evaluate(2.0) - 11.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use polycalc_eval as eval;
pub use polycalc_numeric as numeric;
pub use polycalc_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use polycalc_eval::{evaluate, EvalError, Stack, StackError};
    pub use polycalc_numeric::{NumericError, Rational};
    pub use polycalc_poly::{Polynomial, Term};
}
