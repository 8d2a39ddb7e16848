use tracing::{debug, trace};

use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        converter::ParseResult,
        lexer::{Token, tokenize},
    },
    notation::{Postfix, PostfixToken},
    util::num::parse_literal,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Runs a postfix sequence on an operand stack and returns the single value
/// left at the end.
///
/// Numbers are pushed. An operator pops the right operand, then the left one,
/// and pushes the result of [`Operator::apply`](crate::notation::Operator::apply).
///
/// # Errors
/// - `InsufficientOperands` if an operator finds fewer than two values.
/// - `EmptyExpression` if the sequence produces no value at all.
/// - `LeftoverOperands` if more than one value remains.
///
/// # Example
/// ```
/// use rpncalc::{
///     error::RuntimeError,
///     interpreter::evaluator::{evaluate, read_postfix},
/// };
///
/// let postfix = read_postfix("2 3 4 * +").unwrap();
/// assert_eq!(evaluate(&postfix).unwrap(), 14.0);
///
/// let postfix = read_postfix("2 +").unwrap();
/// assert!(matches!(evaluate(&postfix), Err(RuntimeError::InsufficientOperands { found: 1, .. })));
/// ```
pub fn evaluate(postfix: &Postfix<'_>) -> EvalResult<f64> {
    let mut operands: Vec<f64> = Vec::with_capacity(postfix.len());

    for &(token, position) in postfix.tokens() {
        match token {
            PostfixToken::Number(literal) => operands.push(literal.value),
            PostfixToken::Operator(operator) => {
                let found = operands.len();
                let (Some(right), Some(left)) = (operands.pop(), operands.pop()) else {
                    return Err(RuntimeError::InsufficientOperands { operator,
                                                                    found,
                                                                    position });
                };
                let result = operator.apply(left, right);
                trace!(%operator, left, right, result, "applied operator");
                operands.push(result);
            },
        }
    }

    match operands.as_slice() {
        [value] => {
            debug!(value, "evaluated postfix expression");
            Ok(*value)
        },
        [] => Err(RuntimeError::EmptyExpression),
        rest => Err(RuntimeError::LeftoverOperands { count: rest.len() }),
    }
}

/// Reads a postfix expression written as text, such as `2 3 4 * +`.
///
/// Tokens are the same as in infix input, except that parentheses are not
/// allowed and `+` and `-` are always binary operators.
///
/// # Errors
/// - `UnexpectedCharacter` for characters outside the expression alphabet.
/// - `MalformedNumber` for numeric lexemes that do not parse.
/// - `UnexpectedToken` for a parenthesis.
pub fn read_postfix(source: &str) -> ParseResult<Postfix<'_>> {
    let mut tokens = Vec::new();

    for (token, position) in tokenize(source)? {
        let token = match (token, token.operator()) {
            (Token::Number(lexeme), _) => PostfixToken::Number(parse_literal(lexeme, position)?),
            (_, Some(op)) => PostfixToken::Operator(op),
            _ => {
                return Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                         position });
            },
        };
        tokens.push((token, position));
    }

    Ok(Postfix::new(tokens))
}
