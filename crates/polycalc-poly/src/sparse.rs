//! Sparse univariate polynomials.
//!
//! Terms are stored in strictly descending exponent order with no
//! duplicate exponents and no negligible coefficients, so the zero
//! polynomial is the empty term list.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Coefficients with magnitude below this threshold are treated as zero.
pub const EPSILON: f64 = 1e-9;

fn is_negligible(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Binary floating-point exponentiation; negative exponents go through
/// the reciprocal first.
fn power(mut base: f64, exponent: i32) -> f64 {
    let mut exp = exponent;
    if exp < 0 {
        base = 1.0 / base;
        exp = -exp;
    }
    let mut result = 1.0;
    while exp > 0 {
        if exp & 1 == 1 {
            result *= base;
        }
        base *= base;
        exp >>= 1;
    }
    result
}

/// A single (coefficient, exponent) pair within a polynomial.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Term {
    /// The coefficient; never negligible for a stored term.
    pub coefficient: f64,
    /// The exponent; unique within a polynomial.
    pub exponent: i32,
}

/// A sparse univariate polynomial.
///
/// All mutation funnels through [`Polynomial::add_term`], which preserves
/// the descending-order/no-zero invariant; binary operators always
/// produce a new independent value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polynomial {
    /// Terms in strictly descending exponent order.
    terms: Vec<Term>,
}

impl Polynomial {
    /// Creates the zero polynomial.
    #[must_use]
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Builds a polynomial by inserting each (coefficient, exponent) pair.
    ///
    /// Duplicate exponents merge by summation, exactly as with
    /// [`Polynomial::add_term`].
    #[must_use]
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (f64, i32)>,
    {
        let mut poly = Self::new();
        for (coefficient, exponent) in terms {
            poly.add_term(coefficient, exponent);
        }
        poly
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the terms, highest exponent first.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the exponent of the leading term, if any.
    #[must_use]
    pub fn degree(&self) -> Option<i32> {
        self.terms.first().map(|t| t.exponent)
    }

    /// Inserts a term, merging with any existing term of the same
    /// exponent.
    ///
    /// A negligible incoming coefficient is a no-op; a merge whose sum
    /// becomes negligible removes the term. Otherwise the term is spliced
    /// in at its descending-order position.
    pub fn add_term(&mut self, coefficient: f64, exponent: i32) {
        if is_negligible(coefficient) {
            return;
        }

        // Scan from the highest exponent down.
        match self.terms.iter().position(|t| t.exponent <= exponent) {
            Some(i) if self.terms[i].exponent == exponent => {
                self.terms[i].coefficient += coefficient;
                if is_negligible(self.terms[i].coefficient) {
                    self.terms.remove(i);
                }
            }
            Some(i) => self.terms.insert(
                i,
                Term {
                    coefficient,
                    exponent,
                },
            ),
            None => self.terms.push(Term {
                coefficient,
                exponent,
            }),
        }
    }

    /// Evaluates the polynomial at `x`.
    ///
    /// Uses square-and-multiply exponentiation per term; negative
    /// exponents are supported through the reciprocal of `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms
            .iter()
            .map(|t| t.coefficient * power(x, t.exponent))
            .sum()
    }

    /// Returns the derivative.
    ///
    /// Constant terms vanish; every other term maps to
    /// `(coefficient * exponent, exponent - 1)`.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let mut result = Self::new();
        for t in &self.terms {
            if t.exponent != 0 {
                result.add_term(t.coefficient * f64::from(t.exponent), t.exponent - 1);
            }
        }
        result
    }

    /// Renders the plain form: the term count followed by
    /// `coefficient exponent` pairs, highest exponent first.
    ///
    /// The zero polynomial renders as `0`.
    #[must_use]
    pub fn to_plain_string(&self) -> String {
        if self.terms.is_empty() {
            return "0".to_string();
        }
        let mut out = self.terms.len().to_string();
        for t in &self.terms {
            out.push_str(&format!(" {} {}", t.coefficient, t.exponent));
        }
        out
    }

    /// Renders the typeset (LaTeX) form, `$...$` delimited.
    ///
    /// Coefficients of magnitude 1 on non-constant terms omit the
    /// numeral; terms after the first join with sign-aware ` + `/` - `.
    /// The zero polynomial renders as `$0$`.
    #[must_use]
    pub fn to_latex(&self) -> String {
        format!("${}$", self.typeset_body())
    }

    fn typeset_body(&self) -> String {
        if self.terms.is_empty() {
            return "0".to_string();
        }

        let mut out = String::new();
        for (i, t) in self.terms.iter().enumerate() {
            if i == 0 {
                if t.coefficient < 0.0 {
                    out.push('-');
                }
            } else {
                out.push_str(if t.coefficient < 0.0 { " - " } else { " + " });
            }

            let abs_coeff = t.coefficient.abs();
            let omit_coeff = is_negligible(abs_coeff - 1.0) && t.exponent != 0;
            if !omit_coeff {
                out.push_str(&format!("{abs_coeff}"));
            }

            if t.exponent != 0 {
                out.push('x');
                if t.exponent != 1 {
                    out.push_str(&format!("^{{{}}}", t.exponent));
                }
            }
        }
        out
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.typeset_body())
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        for t in &rhs.terms {
            result.add_term(t.coefficient, t.exponent);
        }
        result
    }
}

impl Add for Polynomial {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        let mut result = Polynomial::new();
        for t in &self.terms {
            result.add_term(-t.coefficient, t.exponent);
        }
        result
    }
}

impl Neg for Polynomial {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Self) -> Self::Output {
        self + &(-rhs)
    }
}

impl Sub for Polynomial {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut result = Polynomial::new();
        for a in &self.terms {
            for b in &rhs.terms {
                result.add_term(a.coefficient * b.coefficient, a.exponent + b.exponent);
            }
        }
        result
    }
}

impl Mul for Polynomial {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}
