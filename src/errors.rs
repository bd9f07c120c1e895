//! Crate-wide error types.
//!
//! Book lookup misses and legal-move query misses are deliberately *not*
//! errors: those are ordinary absent results and are modeled with `Option`
//! or empty collections at their call sites.

use std::error::Error;
use std::fmt;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The provided FEN string is malformed (illegal character, bad digit,
    /// wrong field count). Aborts position construction.
    InvalidFen(String),
    /// The move generator produced more candidates than the safety cap
    /// allows. This signals a generator defect, never a valid position.
    MoveListOverflow(usize),
    /// A byte slice handed to the book-record parser was shorter than one
    /// full 16-byte record.
    BookRecordTooShort(usize),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
            ChessError::MoveListOverflow(count) => {
                write!(f, "move list overflow: {count} candidates exceed the safety cap")
            }
            ChessError::BookRecordTooShort(len) => {
                write!(f, "book record needs 16 bytes, got {len}")
            }
        }
    }
}

impl Error for ChessError {}
