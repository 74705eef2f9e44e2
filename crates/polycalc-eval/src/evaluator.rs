//! Infix expression evaluation.
//!
//! This module implements a two-stack precedence-climbing evaluator: one
//! stack holds [`Rational`] operands, the other operator characters. Each
//! call is a pure function over its input string; no state is shared
//! between calls.

use num_traits::Zero;
use polycalc_numeric::{NumericError, Rational};
use thiserror::Error;

use crate::stack::{Stack, StackError};

/// Errors that can occur while evaluating an expression.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The input contained no characters besides whitespace.
    #[error("expression is empty")]
    EmptyExpression,

    /// A character that is neither a digit, a parenthesis, nor a known
    /// operator was encountered.
    #[error("unknown operator '{0}'")]
    UnknownOperator(char),

    /// An integer literal was expected but not found.
    #[error("expected digit")]
    DigitExpected,

    /// An operator had fewer than two operands to apply to.
    #[error("insufficient operands")]
    InsufficientOperands,

    /// The right-hand side of `^` was not an integer.
    #[error("exponent must be an integer")]
    NonIntegerExponent,

    /// A unary `+`/`-` appeared directly after `*`, `/` or `^`.
    #[error("invalid use of unary operator after '*', '/' or '^'")]
    MisplacedUnarySign,

    /// A `)` had no matching `(`.
    #[error("missing opening parenthesis")]
    MissingOpeningParenthesis,

    /// A `(` was never closed.
    #[error("mismatched parentheses")]
    MismatchedParentheses,

    /// The scan finished without reducing to exactly one value.
    #[error("malformed expression")]
    MalformedExpression,

    /// Arithmetic on the operands failed.
    #[error(transparent)]
    Numeric(#[from] NumericError),
}

impl From<StackError> for EvalError {
    fn from(_: StackError) -> Self {
        // The only stack failure mode is popping past the operands an
        // operator needs.
        EvalError::InsufficientOperands
    }
}

fn precedence(op: char) -> Result<u8, EvalError> {
    match op {
        '+' | '-' => Ok(1),
        '*' | '/' => Ok(2),
        '^' => Ok(3),
        _ => Err(EvalError::UnknownOperator(op)),
    }
}

fn is_right_associative(op: char) -> bool {
    op == '^'
}

fn is_unary(op: char, input: &[char], index: usize) -> bool {
    (op == '+' || op == '-')
        && (index == 0 || matches!(input[index - 1], '(' | '+' | '-' | '*' | '/' | '^'))
}

/// Parses a non-negative integer literal starting at `input[*index]`,
/// advancing `index` past it.
fn parse_integer(input: &[char], index: &mut usize) -> Result<i64, EvalError> {
    if *index >= input.len() || !input[*index].is_ascii_digit() {
        return Err(EvalError::DigitExpected);
    }
    let mut value: i64 = 0;
    while *index < input.len() {
        let Some(digit) = input[*index].to_digit(10) else {
            break;
        };
        value = value.wrapping_mul(10).wrapping_add(i64::from(digit));
        *index += 1;
    }
    Ok(value)
}

/// Applies `op` to the top two operands, pushing the result back.
fn apply_operator(values: &mut Stack<Rational>, op: char) -> Result<(), EvalError> {
    if values.len() < 2 {
        return Err(EvalError::InsufficientOperands);
    }
    let rhs = values.pop()?;
    let lhs = values.pop()?;
    let result = match op {
        '+' => lhs + rhs,
        '-' => lhs - rhs,
        '*' => lhs * rhs,
        '/' => lhs.checked_div(rhs)?,
        '^' => {
            if !rhs.is_integer() {
                return Err(EvalError::NonIntegerExponent);
            }
            lhs.pow(rhs.numerator())?
        }
        _ => return Err(EvalError::UnknownOperator(op)),
    };
    values.push(result);
    Ok(())
}

/// Pops and applies stacked operators that bind at least as tightly as
/// `op`, then pushes `op`.
fn process_operator(
    values: &mut Stack<Rational>,
    operators: &mut Stack<char>,
    op: char,
) -> Result<(), EvalError> {
    while let Ok(&top) = operators.top() {
        if top == '(' {
            break;
        }
        let top_prec = precedence(top)?;
        let op_prec = precedence(op)?;
        if top_prec > op_prec || (top_prec == op_prec && !is_right_associative(op)) {
            let top = operators.pop()?;
            apply_operator(values, top)?;
        } else {
            break;
        }
    }
    operators.push(op);
    Ok(())
}

/// Pops and applies operators until the matching `(` is discarded.
fn collapse(values: &mut Stack<Rational>, operators: &mut Stack<char>) -> Result<(), EvalError> {
    while let Ok(&top) = operators.top() {
        if top == '(' {
            break;
        }
        let op = operators.pop()?;
        apply_operator(values, op)?;
    }
    if operators.is_empty() {
        return Err(EvalError::MissingOpeningParenthesis);
    }
    operators.pop()?;
    Ok(())
}

/// Evaluates an infix arithmetic expression to a single rational.
///
/// The grammar accepts non-negative integer literals, the binary
/// operators `+ - * /`, right-associative `^` with an integer exponent,
/// parentheses, and unary `+`/`-` prefixes at the start of the input,
/// after `(`, or after another `+`/`-` binary operator. Whitespace is
/// ignored.
///
/// # Errors
///
/// Returns an [`EvalError`] describing the first syntax or arithmetic
/// failure encountered.
///
/// # Examples
///
/// ```
/// use polycalc_eval::evaluate;
///
/// let value = evaluate("(2 + 3) * 4").unwrap();
/// assert_eq!(value.numerator(), 20);
/// assert_eq!(value.denominator(), 1);
/// ```
pub fn evaluate(expression: &str) -> Result<Rational, EvalError> {
    let input: Vec<char> = expression.chars().filter(|c| !c.is_whitespace()).collect();
    if input.is_empty() {
        return Err(EvalError::EmptyExpression);
    }

    let mut values: Stack<Rational> = Stack::new();
    let mut operators: Stack<char> = Stack::new();

    let mut index = 0;
    while index < input.len() {
        let ch = input[index];

        if ch.is_ascii_digit() {
            let literal = parse_integer(&input, &mut index)?;
            values.push(Rational::from_integer(literal));
            continue;
        }

        if ch == '(' {
            operators.push('(');
            index += 1;
            continue;
        }

        if ch == ')' {
            index += 1;
            collapse(&mut values, &mut operators)?;
            continue;
        }

        let mut op = ch;
        if is_unary(ch, &input, index) {
            // Fold a run of signs into one: odd minus count means '-'.
            let mut minus_count = 0;
            while index < input.len() && (input[index] == '+' || input[index] == '-') {
                if input[index] == '-' {
                    minus_count += 1;
                }
                if index > 0 && matches!(input[index - 1], '*' | '/' | '^') {
                    return Err(EvalError::MisplacedUnarySign);
                }
                index += 1;
            }
            // A pushed zero turns the sign into an ordinary binary operator.
            values.push(Rational::zero());
            op = if minus_count % 2 == 0 { '+' } else { '-' };
            index -= 1; // re-aligned by the increment below
        }

        process_operator(&mut values, &mut operators, op)?;
        index += 1;
    }

    while !operators.is_empty() {
        let op = operators.pop()?;
        if op == '(' || op == ')' {
            return Err(EvalError::MismatchedParentheses);
        }
        apply_operator(&mut values, op)?;
    }

    if values.len() != 1 {
        return Err(EvalError::MalformedExpression);
    }
    Ok(values.pop()?)
}
