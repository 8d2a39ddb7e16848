use logos::Logos;
use tracing::trace;

use crate::{error::ParseError, interpreter::converter::ParseResult, notation::Operator};

/// Represents a lexical token in an arithmetic expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Numbers keep the slice they were read from; they are validated later, when
/// the normalizer turns them into literals.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token<'s> {
    /// Numeric literal tokens, such as `3`, `3.14`, `.5` or `2.`.
    ///
    /// Anything made of digits and dots is taken here so that `1.2.3` is
    /// reported as one malformed number instead of two tokens.
    #[regex(r"[0-9.]+", |lex| lex.slice())]
    Number(&'s str),
    /// `^`
    #[token("^")]
    Caret,
    /// `*`
    #[token("*")]
    Star,
    /// `x` or `X`
    #[token("x")]
    #[token("X")]
    Times,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs, feeds and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl Token<'_> {
    /// The operator this token spells, if any. `+` and `-` map to their binary
    /// forms.
    #[must_use]
    pub const fn operator(self) -> Option<Operator> {
        match self {
            Self::Caret => Some(Operator::Pow),
            Self::Star => Some(Operator::Mul),
            Self::Times => Some(Operator::Times),
            Self::Slash => Some(Operator::Div),
            Self::Percent => Some(Operator::Mod),
            Self::Plus => Some(Operator::Add),
            Self::Minus => Some(Operator::Sub),
            Self::Number(_) | Self::LParen | Self::RParen | Self::Ignored => None,
        }
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(lexeme) => write!(f, "{lexeme}"),
            Self::Caret => write!(f, "^"),
            Self::Star => write!(f, "*"),
            Self::Times => write!(f, "x"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Splits `source` into tokens paired with their byte offsets.
///
/// Whitespace between tokens is skipped.
///
/// # Errors
/// Returns `ParseError::UnexpectedCharacter` on the first character that is
/// not part of the expression alphabet.
///
/// # Example
/// ```
/// use rpncalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("12 + (3)").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number("12"), 0),
///                 (Token::Plus, 3),
///                 (Token::LParen, 5),
///                 (Token::Number("3"), 6),
///                 (Token::RParen, 7)]);
///
/// assert!(tokenize("2 + y").is_err());
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token<'_>, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        if let Ok(tok) = token {
            trace!(%tok, position, "lexed token");
            tokens.push((tok, position));
        } else {
            return Err(ParseError::UnexpectedCharacter { token: lexer.slice().to_string(),
                                                         position });
        }
    }

    Ok(tokens)
}
