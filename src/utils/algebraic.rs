//! Square and coordinate conversions.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! `(file << 3) | rank` square indexing reused by FEN, notation, and book
//! components.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Pack zero-based file and rank into a square index.
#[inline]
pub const fn square_index(file: u8, rank: u8) -> Square {
    ((file & 7) << 3) | (rank & 7)
}

/// Zero-based file (0 = a) of a square index.
#[inline]
pub const fn square_file(square: Square) -> u8 {
    square >> 3
}

/// Zero-based rank (0 = rank 1) of a square index.
#[inline]
pub const fn square_rank(square: Square) -> u8 {
    square & 7
}

/// File letter (`a..=h`) for a zero-based file index.
#[inline]
pub const fn file_char(file: u8) -> char {
    (b'a' + (file & 7)) as char
}

/// Rank digit (`1..=8`) for a zero-based rank index.
#[inline]
pub const fn rank_char(rank: u8) -> char {
    (b'1' + (rank & 7)) as char
}

/// Convert coordinates like "e4" to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidFen(format!("invalid square name: {square}")));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::InvalidFen(format!("invalid file letter: {}", file as char)));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidFen(format!("invalid rank digit: {}", rank as char)));
    }

    Ok(square_index(file - b'a', rank - b'1'))
}

/// Convert a square index (`0..=63`) to coordinates like "e4".
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    debug_assert!(square < 64);
    let mut out = String::with_capacity(2);
    out.push(file_char(square_file(square)));
    out.push(rank_char(square_rank(square)));
    out
}
