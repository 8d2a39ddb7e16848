#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur before evaluation starts: while
/// lexing, normalizing signed terms, or converting infix to postfix.
///
/// Every position is a byte offset into the source expression.
pub enum ParseError {
    /// Found a character that is not part of the expression alphabet.
    UnexpectedCharacter {
        /// The offending slice.
        token:    String,
        /// Byte offset of the slice.
        position: usize,
    },
    /// A numeric lexeme could not be read as a floating-point number, such
    /// as `1.2.3` or a lone `.`.
    MalformedNumber {
        /// The lexeme as written.
        literal:  String,
        /// Byte offset of the lexeme.
        position: usize,
    },
    /// A `)` was found with no `(` left to close.
    UnmatchedClosingParen {
        /// Byte offset of the `)`.
        position: usize,
    },
    /// A `(` was still open at the end of input.
    UnmatchedOpeningParen {
        /// Byte offset of the `(`.
        position: usize,
    },
    /// A token that is valid in infix input but not in postfix input.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::MalformedNumber { position, .. }
            | Self::UnmatchedClosingParen { position }
            | Self::UnmatchedOpeningParen { position }
            | Self::UnexpectedToken { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { token, position } => {
                write!(f, "Error at offset {position}: Unexpected character '{token}'.")
            },
            Self::MalformedNumber { literal, position } => {
                write!(f, "Error at offset {position}: Malformed number '{literal}'.")
            },
            Self::UnmatchedClosingParen { position } => write!(f,
                                                               "Error at offset {position}: Closing parenthesis ')' has no matching '('."),
            Self::UnmatchedOpeningParen { position } => write!(f,
                                                               "Error at offset {position}: Opening parenthesis '(' is never closed."),
            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at offset {position}: Unexpected token: {token}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
