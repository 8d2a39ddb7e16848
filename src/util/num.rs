use crate::{error::ParseError, interpreter::converter::ParseResult, notation::Literal};

/// Checks whether `s` has the shape of a numeric literal.
///
/// A numeric literal is one or more ASCII digits and `.` characters. There is
/// no sign and no exponent; signs are handled by the normalizer. Passing this
/// check does not mean the text parses: `1.2.3` has the right shape but is
/// rejected by [`parse_literal`].
///
/// ## Example
/// ```
/// use rpncalc::util::num::is_numeric;
///
/// assert!(is_numeric("42"));
/// assert!(is_numeric(".5"));
/// assert!(is_numeric("1.2.3"));
/// assert!(!is_numeric(""));
/// assert!(!is_numeric("-1"));
/// assert!(!is_numeric("1e5"));
/// ```
#[must_use]
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}

/// Reads a numeric lexeme into a [`Literal`].
///
/// ## Errors
/// Returns `ParseError::MalformedNumber` if the lexeme is not numeric or
/// holds more than one decimal point.
///
/// ## Parameters
/// - `lexeme`: The literal as written in the source.
/// - `position`: Byte offset of the lexeme, for error reporting.
///
/// ## Example
/// ```
/// use rpncalc::{error::ParseError, util::num::parse_literal};
///
/// let literal = parse_literal("2.50", 0).unwrap();
/// assert_eq!(literal.value, 2.5);
/// assert_eq!(literal.lexeme, "2.50");
///
/// let err = parse_literal("1.2.3", 4).unwrap_err();
/// assert!(matches!(err, ParseError::MalformedNumber { position: 4, .. }));
/// ```
pub fn parse_literal(lexeme: &str, position: usize) -> ParseResult<Literal<'_>> {
    let malformed = || ParseError::MalformedNumber { literal: lexeme.to_string(),
                                                     position };

    if !is_numeric(lexeme) {
        return Err(malformed());
    }

    let value = lexeme.parse::<f64>().map_err(|_| malformed())?;

    Ok(Literal { lexeme, value })
}
