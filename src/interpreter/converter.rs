use tracing::{debug, trace};

use crate::{
    error::ParseError,
    notation::{Operator, Postfix, PostfixToken, Term},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// An entry on the expression stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Operator(Operator),
    Paren,
}

/// Converts normalized infix terms to postfix order with the shunting-yard
/// algorithm.
///
/// Numbers go straight to the output. Operators wait on the expression stack
/// until an operator that does not yield to them arrives, a `)` closes their
/// group, or the input ends. Which operator yields to which is decided by
/// [`Operator::yields_to`].
///
/// # Parameters
/// - `terms`: Infix terms with signed terms already expanded, paired with
///   their byte offsets.
///
/// # Returns
/// The postfix sequence. Parentheses never appear in it.
///
/// # Errors
/// - `UnmatchedClosingParen` if a `)` has no open `(` to close.
/// - `UnmatchedOpeningParen` if a `(` is still open at the end of input.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{converter::convert, lexer::tokenize, normalizer::normalize};
///
/// let tokens = tokenize("(2+3)*4").unwrap();
/// let terms = normalize(&tokens).unwrap();
/// let postfix = convert(&terms).unwrap();
/// assert_eq!(postfix.to_string(), "2 3 + 4 *");
/// ```
pub fn convert<'s>(terms: &[(Term<'s>, usize)]) -> ParseResult<Postfix<'s>> {
    let mut output = Vec::with_capacity(terms.len());
    let mut stack: Vec<(Pending, usize)> = Vec::new();

    for &(term, position) in terms {
        match term {
            Term::Number(literal) => output.push((PostfixToken::Number(literal), position)),
            Term::LParen => stack.push((Pending::Paren, position)),
            Term::RParen => loop {
                match stack.pop() {
                    Some((Pending::Paren, _)) => break,
                    Some((Pending::Operator(op), at)) => {
                        trace!(%op, "closing group, emitting operator");
                        output.push((PostfixToken::Operator(op), at));
                    },
                    None => return Err(ParseError::UnmatchedClosingParen { position }),
                }
            },
            Term::Operator(op) => {
                while let Some(&(Pending::Operator(top), at)) = stack.last() {
                    if !op.yields_to(top) {
                        break;
                    }
                    trace!(pending = %top, incoming = %op, "emitting pending operator");
                    stack.pop();
                    output.push((PostfixToken::Operator(top), at));
                }
                stack.push((Pending::Operator(op), position));
            },
        }
    }

    while let Some((pending, at)) = stack.pop() {
        match pending {
            Pending::Operator(op) => output.push((PostfixToken::Operator(op), at)),
            Pending::Paren => return Err(ParseError::UnmatchedOpeningParen { position: at }),
        }
    }

    let postfix = Postfix::new(output);
    debug!(%postfix, "converted to postfix");
    Ok(postfix)
}
