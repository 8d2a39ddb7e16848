use crate::notation::Operator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while running the postfix stack
/// machine.
///
/// Division and remainder by zero are deliberately absent: they follow
/// IEEE 754 and produce infinity or NaN.
pub enum RuntimeError {
    /// An operator was reached with fewer than two values on the operand
    /// stack.
    InsufficientOperands {
        /// The operator that could not be applied.
        operator: Operator,
        /// How many operands were available.
        found:    usize,
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// More than one value was left on the operand stack once every token was
    /// consumed.
    LeftoverOperands {
        /// Number of values left on the stack.
        count: usize,
    },
    /// There was nothing to evaluate.
    EmptyExpression,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientOperands { operator,
                                         found,
                                         position, } => write!(f,
                                                               "Error at offset {position}: Operator '{operator}' needs two operands, but found {found}."),
            Self::LeftoverOperands { count } => write!(f,
                                                       "Malformed expression: {count} values were left without an operator to combine them."),
            Self::EmptyExpression => write!(f, "Malformed expression: nothing to evaluate."),
        }
    }
}

impl std::error::Error for RuntimeError {}
