use tracing::trace;

use crate::{
    interpreter::{converter::ParseResult, lexer::Token},
    notation::{Literal, Operator, Term},
    util::num::parse_literal,
};

/// Turns lexer tokens into infix terms with every signed term expanded.
///
/// A `+` or `-` is a sign rather than a binary operator when it starts the
/// expression or follows an operator or `(`. A run of signs is folded into a
/// single one (`--` is `+`, `+-` is `-`), and the signed term is rewritten as
/// a subtraction or addition from zero:
///
/// - `-5` becomes `( 0 - 5 )`, with the whole literal inside the parentheses.
/// - `-(2+3)` becomes `( 0 - ( 2 + 3 ) )`.
///
/// A sign followed by anything else is passed through as an operator; the
/// evaluator later reports it as lacking operands.
///
/// Numeric lexemes are read into literals here.
///
/// # Errors
/// Returns `ParseError::MalformedNumber` for a numeric lexeme that does not
/// parse.
///
/// # Example
/// ```
/// use rpncalc::{
///     interpreter::{lexer::tokenize, normalizer::normalize},
///     notation::{Literal, Operator, Term},
/// };
///
/// let tokens = tokenize("3+-2").unwrap();
/// let terms: Vec<Term> = normalize(&tokens).unwrap().into_iter().map(|(t, _)| t).collect();
///
/// let two = Literal { lexeme: "2",
///                     value:  2.0, };
/// let three = Literal { lexeme: "3",
///                       value:  3.0, };
/// assert_eq!(terms,
///            vec![Term::Number(three),
///                 Term::Operator(Operator::Add),
///                 Term::LParen,
///                 Term::Number(Literal::ZERO),
///                 Term::Operator(Operator::Sub),
///                 Term::Number(two),
///                 Term::RParen]);
/// ```
pub fn normalize<'s>(tokens: &[(Token<'s>, usize)]) -> ParseResult<Vec<(Term<'s>, usize)>> {
    let mut terms: Vec<(Term<'s>, usize)> = Vec::with_capacity(tokens.len());
    // Real parenthesis depths at which a synthesized `)` is still owed.
    let mut owed: Vec<usize> = Vec::new();
    let mut depth = 0usize;
    let mut iter = tokens.iter().copied().peekable();

    while let Some((token, position)) = iter.next() {
        match token {
            Token::Plus | Token::Minus if expects_operand(terms.last()) => {
                let mut signs = vec![(token, position)];
                while let Some(next) =
                    iter.next_if(|(t, _)| matches!(t, Token::Plus | Token::Minus))
                {
                    signs.push(next);
                }

                let negative = signs.iter().filter(|(t, _)| *t == Token::Minus).count() % 2 == 1;
                let sign = if negative { Operator::Sub } else { Operator::Add };

                match iter.peek() {
                    Some(&(Token::Number(lexeme), at)) => {
                        iter.next();
                        let literal = parse_literal(lexeme, at)?;
                        trace!(%sign, lexeme, position, "expanding signed literal");
                        terms.extend([(Term::LParen, position),
                                      (Term::Number(Literal::ZERO), position),
                                      (Term::Operator(sign), position),
                                      (Term::Number(literal), at),
                                      (Term::RParen, position)]);
                    },
                    Some(&(Token::LParen, _)) => {
                        trace!(%sign, position, "expanding signed group");
                        owed.push(depth);
                        terms.extend([(Term::LParen, position),
                                      (Term::Number(Literal::ZERO), position),
                                      (Term::Operator(sign), position)]);
                    },
                    _ => {
                        for (t, at) in signs {
                            if let Some(op) = t.operator() {
                                terms.push((Term::Operator(op), at));
                            }
                        }
                    },
                }
            },
            Token::Number(lexeme) => {
                terms.push((Term::Number(parse_literal(lexeme, position)?), position));
            },
            Token::LParen => {
                depth += 1;
                terms.push((Term::LParen, position));
            },
            Token::RParen => {
                depth = depth.saturating_sub(1);
                terms.push((Term::RParen, position));
                while owed.last() == Some(&depth) {
                    owed.pop();
                    terms.push((Term::RParen, position));
                }
            },
            _ => {
                if let Some(op) = token.operator() {
                    terms.push((Term::Operator(op), position));
                }
            },
        }
    }

    Ok(terms)
}

/// Whether the next term has to be an operand, which makes a `+` or `-` in
/// that spot a sign.
const fn expects_operand(previous: Option<&(Term<'_>, usize)>) -> bool {
    matches!(previous, None | Some((Term::Operator(_) | Term::LParen, _)))
}

