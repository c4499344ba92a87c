//! # mixfrac
//!
//! mixfrac evaluates arithmetic on fractions written the way people write
//! them by hand (`1/2`, `9/8`, `3_3/4`) and prints the result in the same
//! notation.
//!
//! An expression alternates operands and the operators `*`, `/`, `+`, `-`,
//! separated by one or more spaces:
//!
//! ```
//! assert_eq!(mixfrac::solve("1/2 * 3_3/4").unwrap(), "1_7/8");
//! assert_eq!(mixfrac::solve("2_3/8   +  9/8").unwrap(), "3_1/2");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::{Evaluator, Options},
        formatter::format_fraction,
        normalizer::normalize,
        parser::parse_expression,
        validator::split_tokens,
    },
};

/// Defines the structure of a parsed expression.
///
/// This module declares the operators, parsed operands and the flat
/// [`Expression`](ast::Expression) the evaluator works on.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while validating,
/// parsing, evaluating or formatting an expression.
///
/// # Responsibilities
/// - Separates malformed input (`ParseError`) from failures during
///   evaluation (`RuntimeError`).
/// - Carries the token position of the failure where one exists.
pub mod error;
/// Orchestrates the stages of solving an expression.
///
/// # Responsibilities
/// - Normalizes and validates the raw input.
/// - Parses operands and operators.
/// - Evaluates the expression and formats the result.
pub mod interpreter;
/// The fixed table of known-good cases behind the `test` command.
pub mod selftest;
/// General utilities for safe numeric conversion.
pub mod util;

pub use crate::interpreter::{
    evaluator::{
        core::{DEFAULT_PRECISION, Options as SolveOptions},
        precedence::Precedence,
    },
    formatter::rational::{Rational, rational_approximation},
    validator::{check, validate},
};

/// Solves an expression with the default options and returns the result as a
/// whole number, fraction or mixed number.
///
/// # Errors
/// Returns a [`ParseError`](error::ParseError) for malformed input and a
/// [`RuntimeError`](error::RuntimeError) if evaluation or formatting fails.
///
/// # Examples
/// ```
/// use mixfrac::solve;
///
/// assert_eq!(solve("1_1/2 + 3 * 2_1/4 - 1/2 / 2").unwrap(), "8");
/// assert_eq!(solve("1/2 + 1/4").unwrap(), "3/4");
///
/// // Operator where an operand is expected.
/// assert!(solve("1_1/2 + / 1 * 2").is_err());
/// ```
pub fn solve(expression: &str) -> Result<String, Error> {
    solve_with(expression, &Options::default())
}

/// Solves an expression with explicit options.
///
/// # Errors
/// See [`solve`]; additionally fails if the options' precision is invalid.
///
/// # Examples
/// ```
/// use mixfrac::{Precedence, SolveOptions, solve_with};
///
/// let options = SolveOptions { precedence: Precedence::Standard,
///                              ..SolveOptions::default() };
/// assert_eq!(solve_with("5 - 2 - 1", &options).unwrap(), "2");
/// ```
pub fn solve_with(expression: &str, options: &Options) -> Result<String, Error> {
    let options = options.validated()?;
    let value = evaluate(expression, &options)?;
    let formatted = format_fraction(value, options.precision)?;
    debug!(value, %formatted, "solved expression");
    Ok(formatted)
}

/// Evaluates an expression to a floating-point value without formatting it.
///
/// # Errors
/// Returns a [`ParseError`](error::ParseError) for malformed input and a
/// [`RuntimeError`](error::RuntimeError) such as division by zero.
///
/// # Examples
/// ```
/// use mixfrac::{SolveOptions, evaluate};
///
/// let value = evaluate("1/2 * 3_3/4", &SolveOptions::default()).unwrap();
/// assert!((value - 1.875).abs() < 1e-12);
/// ```
pub fn evaluate(expression: &str, options: &Options) -> Result<f64, Error> {
    let normalized = normalize(expression);
    debug!(%normalized, "normalized expression");

    let tokens = split_tokens(&normalized)?;
    let parsed = parse_expression(&tokens)?;
    Ok(Evaluator::new(options.precedence).eval(&parsed)?)
}
