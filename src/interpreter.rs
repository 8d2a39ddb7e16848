/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw expression and produces tokens for numeric
/// literals, operator symbols, and parentheses, each paired with its byte
/// offset. Whitespace is skipped. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input characters into tokens with source offsets.
/// - Reports characters outside the expression alphabet.
pub mod lexer;
/// The normalizer module expands signed terms.
///
/// It decides which `+` and `-` tokens are signs, folds runs of signs, and
/// rewrites each signed term as an addition or subtraction from zero so the
/// converter only ever sees binary operators.
///
/// # Responsibilities
/// - Turns tokens into infix terms.
/// - Reads numeric lexemes into literals, reporting malformed numbers.
pub mod normalizer;
/// The converter module turns infix terms into postfix order.
///
/// It runs the shunting-yard algorithm over an expression stack of pending
/// operators and open parentheses, using the precedence table to decide when
/// a pending operator is emitted.
///
/// # Responsibilities
/// - Produces the postfix sequence.
/// - Reports unbalanced parentheses.
pub mod converter;
/// The evaluator module executes postfix sequences.
///
/// A stack machine pushes numbers and applies each operator to the two values
/// on top of the operand stack.
///
/// # Responsibilities
/// - Computes the value of a postfix sequence.
/// - Reports operators without enough operands and leftover values.
/// - Reads postfix sequences written as text.
pub mod evaluator;
