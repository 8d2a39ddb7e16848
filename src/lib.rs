//! # rpncalc
//!
//! rpncalc evaluates arithmetic expressions written in infix notation.
//! Expressions are converted to postfix (Reverse Polish) notation with the
//! shunting-yard algorithm and then run on a small stack machine.
//!
//! ```
//! assert_eq!(rpncalc::evaluate("(2+3)*4").unwrap(), 20.0);
//! assert_eq!(rpncalc::to_postfix("2+3*4").unwrap(), "2 3 4 * +");
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
        converter::convert,
        evaluator::{self, read_postfix},
        lexer::tokenize,
        normalizer::normalize,
    },
    notation::Postfix,
};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing,
/// converting, or evaluating an expression. Every error carries the offending
/// token or its byte offset so callers can point at the problem.
///
/// # Responsibilities
/// - Defines error enums for each phase (parsing and evaluation).
/// - Combines them into a single error type for the public entry points.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module holds the lexer, the signed-term normalizer, the infix to
/// postfix converter, and the postfix evaluator. Each stage can be used on
/// its own by callers that want the intermediate forms.
pub mod interpreter;
/// Defines operators, the precedence table, and the term and postfix types
/// passed between pipeline stages.
pub mod notation;
/// General helpers for recognizing and reading numeric literals.
pub mod util;

/// Lexes, normalizes, and converts `expression` into postfix form.
fn parse(expression: &str) -> Result<Postfix<'_>, Error> {
    let tokens = tokenize(expression)?;
    let terms = normalize(&tokens)?;
    Ok(convert(&terms)?)
}

/// Evaluates an infix arithmetic expression.
///
/// Supported operators are `^ * x / % + -` with parentheses and signed terms.
/// Arithmetic is IEEE 754 double precision; division or remainder by zero
/// gives infinity or NaN rather than an error.
///
/// # Errors
/// Returns an error if the expression contains an unknown character or a
/// malformed number, has unbalanced parentheses, or does not reduce to
/// exactly one value.
///
/// # Examples
/// ```
/// use rpncalc::{
///     error::{Error, ParseError, RuntimeError},
///     evaluate,
/// };
///
/// assert_eq!(evaluate("-5+3").unwrap(), -2.0);
/// assert_eq!(evaluate("3x4").unwrap(), 12.0);
///
/// assert!(matches!(evaluate("2+"), Err(Error::Runtime(RuntimeError::InsufficientOperands { .. }))));
/// assert!(matches!(evaluate("(2+3"), Err(Error::Parse(ParseError::UnmatchedOpeningParen { .. }))));
/// ```
pub fn evaluate(expression: &str) -> Result<f64, Error> {
    let postfix = parse(expression)?;
    let value = evaluator::evaluate(&postfix)?;
    debug!(expression, value, "evaluated expression");
    Ok(value)
}

/// Converts an infix arithmetic expression to postfix notation.
///
/// Tokens in the result are separated by single spaces. Numbers are written
/// as they appear in the input, and signed terms show up in their expanded
/// form (`-5` becomes `0 5 -`).
///
/// # Errors
/// Returns an error if the expression contains an unknown character or a
/// malformed number, or has unbalanced parentheses.
///
/// # Examples
/// ```
/// use rpncalc::to_postfix;
///
/// assert_eq!(to_postfix("2+3*4").unwrap(), "2 3 4 * +");
/// assert_eq!(to_postfix("-5+3").unwrap(), "0 5 - 3 +");
/// ```
pub fn to_postfix(expression: &str) -> Result<String, Error> {
    Ok(parse(expression)?.to_string())
}

/// Evaluates an expression that is already in postfix notation, such as
/// `2 3 4 * +`.
///
/// # Errors
/// Returns an error if the input contains an unknown character, a malformed
/// number or a parenthesis, or does not reduce to exactly one value.
///
/// # Examples
/// ```
/// use rpncalc::evaluate_postfix;
///
/// assert_eq!(evaluate_postfix("2 3 4 * +").unwrap(), 14.0);
/// assert!(evaluate_postfix("2 3").is_err());
/// ```
pub fn evaluate_postfix(postfix: &str) -> Result<f64, Error> {
    let postfix = read_postfix(postfix)?;
    Ok(evaluator::evaluate(&postfix)?)
}
