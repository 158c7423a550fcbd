//! This module contains the error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};

/// The error raised by the solver whenever a grid admits no solution, that
/// is, no assignment of digits to its empty cells satisfies the Sudoku rules.
/// A grid whose filled cells already conflict is also unsolvable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Unsolvable;

impl Display for Unsolvable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "grid is unsolvable")
    }
}

/// Syntactic sugar for `Result<V, Unsolvable>`.
pub type SolveResult<V> = Result<V, Unsolvable>;

/// An enumeration of the errors that may occur when importing a puzzle from
/// its 81-character line code.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValidationError {

    /// Indicates that the code does not consist of exactly 81 characters.
    /// The length is checked before anything else, so a code of the wrong
    /// length raises this error even if it also contains invalid characters.
    WrongLength,

    /// Indicates that the code contains a character which is neither a digit
    /// from `'1'` to `'9'` nor a space.
    InvalidCharacter,

    /// Indicates that the code is well-formed, but the puzzle it describes
    /// has no solution.
    Unsolvable
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::WrongLength =>
                write!(f, "wrong input length"),
            ValidationError::InvalidCharacter =>
                write!(f, "invalid character in input"),
            ValidationError::Unsolvable =>
                write!(f, "puzzle is unsolvable"),
        }
    }
}

impl From<Unsolvable> for ValidationError {
    fn from(_: Unsolvable) -> Self {
        ValidationError::Unsolvable
    }
}

/// Syntactic sugar for `Result<V, ValidationError>`.
pub type ValidationResult<V> = Result<V, ValidationError>;
