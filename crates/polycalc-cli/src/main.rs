//! Interactive command loop for the polycalc calculator.
//!
//! Thin I/O glue around the library crates: a line-oriented REPL with a
//! named-polynomial registry. Errors are printed and the session
//! continues.

use std::collections::{HashMap, VecDeque};
use std::error::Error;
use std::io::{self, BufRead, Write};

use polycalc::prelude::*;

type Result<T, E = Box<dyn Error>> = std::result::Result<T, E>;

/// Session state: the named-polynomial registry.
#[derive(Default)]
struct Session {
    polynomials: HashMap<String, Polynomial>,
}

fn main() -> Result<()> {
    let mut session = Session::default();
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\n> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let (command, payload) = split_command(trimmed);
        if matches!(command.as_str(), "exit" | "quit") {
            println!("bye!");
            break;
        }
        if let Err(err) = run_command(&mut session, &mut lines, &command, payload) {
            println!("error: {err}");
        }
    }
    Ok(())
}

fn split_command(line: &str) -> (String, &str) {
    match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd.to_lowercase(), rest.trim()),
        None => (line.to_lowercase(), ""),
    }
}

fn run_command<I>(
    session: &mut Session,
    lines: &mut I,
    command: &str,
    payload: &str,
) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    match command {
        "help" => print_help(),
        "expr" => run_expr(payload)?,
        "poly" => run_poly(session, lines, payload)?,
        _ => println!("unknown command '{command}', type help for a list"),
    }
    Ok(())
}

fn print_help() {
    println!("commands:");
    for (usage, what) in [
        ("help", "show this help"),
        ("expr <expression>", "evaluate a rational expression"),
        ("poly new <name>", "create a polynomial from term pairs"),
        ("poly list", "list stored polynomials"),
        ("poly show <name> [-l]", "print a polynomial (plain or LaTeX)"),
        ("poly eval <name> <x>", "evaluate P(x)"),
        ("poly deriv <name> [-l]", "print the derivative"),
        ("poly add <A> <B> [-l]", "print A + B"),
        ("poly sub <A> <B> [-l]", "print A - B"),
        ("poly mul <A> <B> [-l]", "print A * B"),
        ("exit", "leave"),
    ] {
        println!("  {usage:<24}{what}");
    }
}

fn run_expr(payload: &str) -> Result<()> {
    if payload.is_empty() {
        return Err("usage: expr <expression>".into());
    }
    let value = evaluate(payload)?;
    println!("result = {value}   (\u{2248} {:.15})", value.to_f64());
    Ok(())
}

fn run_poly<I>(session: &mut Session, lines: &mut I, payload: &str) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let args: Vec<&str> = payload.split_whitespace().collect();
    let Some((&sub, rest)) = args.split_first() else {
        return Err("usage: poly <subcommand> ..., type help for details".into());
    };
    match sub.to_lowercase().as_str() {
        "new" => poly_new(session, lines, rest),
        "list" => {
            poly_list(session);
            Ok(())
        }
        "show" => poly_show(session, rest),
        "eval" => poly_eval(session, rest),
        "deriv" | "diff" => poly_deriv(session, rest),
        op @ ("add" | "sub" | "mul") => poly_binary(session, rest, op),
        other => Err(format!("unknown poly subcommand '{other}'").into()),
    }
}

/// True if the argument asks for the typeset rendering.
fn wants_latex(arg: Option<&&str>) -> bool {
    matches!(arg, Some(&"-l" | &"--latex"))
}

fn print_poly(poly: &Polynomial, latex: bool) {
    if latex {
        println!("{}", poly.to_latex());
    } else {
        println!("{}", poly.to_plain_string());
    }
}

fn require_poly<'a>(session: &'a Session, name: &str) -> Result<&'a Polynomial> {
    session
        .polynomials
        .get(name)
        .ok_or_else(|| format!("no polynomial named '{name}'").into())
}

/// Returns the next whitespace-separated token, pulling further lines
/// from `lines` as needed.
fn next_token<I>(lines: &mut I, pending: &mut VecDeque<String>) -> Result<String>
where
    I: Iterator<Item = io::Result<String>>,
{
    loop {
        if let Some(token) = pending.pop_front() {
            return Ok(token);
        }
        let line = lines.next().ok_or("unexpected end of input")??;
        pending.extend(line.split_whitespace().map(str::to_string));
    }
}

/// Reads a term count followed by that many coefficient/exponent pairs;
/// the tokens may span any number of lines.
fn read_polynomial<I>(lines: &mut I) -> Result<Polynomial>
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut pending = VecDeque::new();
    let count: usize = next_token(lines, &mut pending)?
        .parse()
        .map_err(|_| "the term count must be an integer")?;

    let mut poly = Polynomial::new();
    for _ in 0..count {
        let coefficient: f64 = next_token(lines, &mut pending)?
            .parse()
            .map_err(|_| "coefficients must be numbers")?;
        let exponent: i32 = next_token(lines, &mut pending)?
            .parse()
            .map_err(|_| "exponents must be integers")?;
        poly.add_term(coefficient, exponent);
    }
    Ok(poly)
}

fn poly_new<I>(session: &mut Session, lines: &mut I, args: &[&str]) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let Some(name) = args.first() else {
        return Err("usage: poly new <name>".into());
    };
    println!("enter the term count and the coefficient/exponent pairs, e.g.");
    println!("3  2 2  -1 1  5 0");
    println!("for the 3 terms of 2x^2 - x + 5");
    print!("> ");
    io::stdout().flush()?;

    let poly = read_polynomial(lines)?;
    session.polynomials.insert((*name).to_string(), poly);
    println!("polynomial '{name}' saved");
    Ok(())
}

fn poly_list(session: &Session) {
    if session.polynomials.is_empty() {
        println!("no polynomials saved yet");
        return;
    }
    println!("saved polynomials:");
    let mut names: Vec<&String> = session.polynomials.keys().collect();
    names.sort();
    for name in names {
        println!("  {name}");
    }
}

fn poly_show(session: &Session, args: &[&str]) -> Result<()> {
    let Some(name) = args.first() else {
        return Err("usage: poly show <name> [-l|--latex]".into());
    };
    let poly = require_poly(session, name)?;
    print_poly(poly, wants_latex(args.get(1)));
    Ok(())
}

fn poly_eval(session: &Session, args: &[&str]) -> Result<()> {
    let [name, x] = args else {
        return Err("usage: poly eval <name> <x>".into());
    };
    let poly = require_poly(session, name)?;
    let x: f64 = x.parse().map_err(|_| "x must be a number")?;
    println!("P({x}) = {}", poly.evaluate(x));
    Ok(())
}

fn poly_deriv(session: &Session, args: &[&str]) -> Result<()> {
    let Some(name) = args.first() else {
        return Err("usage: poly deriv <name> [-l|--latex]".into());
    };
    let poly = require_poly(session, name)?;
    print_poly(&poly.derivative(), wants_latex(args.get(1)));
    Ok(())
}

fn poly_binary(session: &Session, args: &[&str], op: &str) -> Result<()> {
    let (Some(lhs_name), Some(rhs_name)) = (args.first(), args.get(1)) else {
        return Err(format!("usage: poly {op} <A> <B> [-l|--latex]").into());
    };
    let lhs = require_poly(session, lhs_name)?;
    let rhs = require_poly(session, rhs_name)?;
    let result = match op {
        "add" => lhs + rhs,
        "sub" => lhs - rhs,
        "mul" => lhs * rhs,
        _ => return Err("unsupported operation".into()),
    };
    print!("{op}({lhs_name}, {rhs_name}) = ");
    print_poly(&result, wants_latex(args.get(2)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(input: &[&str]) -> impl Iterator<Item = io::Result<String>> {
        input
            .iter()
            .map(|s| Ok(s.to_string()))
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_read_polynomial_single_line() {
        let mut input = lines(&["3  2 2  -1 1  5 0"]);
        let poly = read_polynomial(&mut input).unwrap();
        assert_eq!(poly, Polynomial::from_terms([(2.0, 2), (-1.0, 1), (5.0, 0)]));
    }

    #[test]
    fn test_read_polynomial_spans_lines() {
        let mut input = lines(&["3", "2 2", "-1 1", "5 0"]);
        let poly = read_polynomial(&mut input).unwrap();
        assert_eq!(poly, Polynomial::from_terms([(2.0, 2), (-1.0, 1), (5.0, 0)]));
    }

    #[test]
    fn test_read_polynomial_skips_blank_lines() {
        let mut input = lines(&["2", "", "  ", "1 1", "4 0"]);
        let poly = read_polynomial(&mut input).unwrap();
        assert_eq!(poly, Polynomial::from_terms([(1.0, 1), (4.0, 0)]));
    }

    #[test]
    fn test_read_polynomial_truncated_input() {
        let mut input = lines(&["2", "1 1"]);
        assert!(read_polynomial(&mut input).is_err());
    }

    #[test]
    fn test_read_polynomial_rejects_bad_count() {
        let mut input = lines(&["many", "1 1"]);
        assert!(read_polynomial(&mut input).is_err());
    }
}
