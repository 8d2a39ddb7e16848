/// Numeric literal helpers.
///
/// This module decides what counts as a number and turns numeric lexemes
/// into values, reporting malformed literals with their position.
pub mod num;
