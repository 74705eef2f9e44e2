//! Exact rational numbers over fixed-width integers.
//!
//! This module provides the fraction value type used by the expression
//! evaluator.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use thiserror::Error;

/// Errors that can occur during rational arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum NumericError {
    /// The divisor (or a constructed denominator) was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Zero cannot be raised to a negative power.
    #[error("zero cannot be raised to a negative power")]
    ZeroToNegativePower,
}

/// An exact rational number backed by `i64` components.
///
/// Rationals are always stored in lowest terms with a positive
/// denominator; the only way to obtain a value is through a normalizing
/// constructor, so the invariant holds for every observable instance.
///
/// The components are fixed-width: arithmetic on very large numerators or
/// denominators can overflow. Widening to arbitrary precision is out of
/// scope for this crate.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    num: i64,
    den: i64,
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.abs()
}

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// The result is reduced to lowest terms with a positive denominator;
    /// a zero numerator normalizes to `0/1`.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::DivisionByZero`] if the denominator is zero.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, NumericError> {
        if denominator == 0 {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::normalized(numerator, denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    /// Normalizes a numerator/denominator pair with a nonzero denominator.
    fn normalized(mut numerator: i64, mut denominator: i64) -> Self {
        debug_assert!(denominator != 0);
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }
        // gcd(0, d) == d, so 0/d reduces to 0/1.
        let d = gcd(numerator, denominator);
        Self {
            num: numerator / d,
            den: denominator / d,
        }
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> i64 {
        self.num
    }

    /// Returns the denominator (always positive).
    #[must_use]
    pub fn denominator(&self) -> i64 {
        self.den
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.den == 1
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i64 {
        self.num.signum()
    }

    /// Returns a floating-point approximation of the value.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Divides by `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(self, rhs: Self) -> Result<Self, NumericError> {
        if rhs.num == 0 {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::normalized(self.num * rhs.den, self.den * rhs.num))
    }

    /// Raises the value to an integer power by square-and-multiply.
    ///
    /// `a^0` is `1/1` for every `a`. A negative exponent inverts the base
    /// and negates the exponent before the bit loop.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::ZeroToNegativePower`] when the base is zero
    /// and the exponent is negative.
    pub fn pow(self, exponent: i64) -> Result<Self, NumericError> {
        if exponent == 0 {
            return Ok(Self::one());
        }
        let mut factor = self;
        let mut exp = exponent;
        if exp < 0 {
            if self.num == 0 {
                return Err(NumericError::ZeroToNegativePower);
            }
            factor = Self::normalized(self.den, self.num);
            exp = -exp;
        }
        let mut result = Self::one();
        while exp > 0 {
            if exp & 1 == 1 {
                result = result * factor;
            }
            if exp > 1 {
                factor = factor * factor;
            }
            exp >>= 1;
        }
        Ok(result)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplication preserves
        // the order; widened to avoid spurious overflow.
        let lhs = i128::from(self.num) * i128::from(other.den);
        let rhs = i128::from(other.num) * i128::from(self.den);
        lhs.cmp(&rhs)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self { num: 0, den: 1 }
    }

    fn is_zero(&self) -> bool {
        self.num == 0
    }
}

impl One for Rational {
    fn one() -> Self {
        Self { num: 1, den: 1 }
    }

    fn is_one(&self) -> bool {
        self.num == 1 && self.den == 1
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.num, self.den)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

// Arithmetic operations; each result passes back through normalization.
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::normalized(
            self.num * rhs.den + rhs.num * self.den,
            self.den * rhs.den,
        )
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::normalized(
            self.num * rhs.den - rhs.num * self.den,
            self.den * rhs.den,
        )
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::normalized(self.num * rhs.num, self.den * rhs.den)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            num: -self.num,
            den: self.den,
        }
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(i64::from(n))
    }
}
