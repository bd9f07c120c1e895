//! Canonical chess-rule constants.
//!
//! Static rule-related literals: the standard starting position FEN, the
//! FEN piece-letter table, the movelist safety cap, and the home squares
//! consulted when castling rights are granted and revoked.

use crate::game_state::chess_types::Square;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// FEN piece letters indexed by piece-type code minus one.
/// Order must match the `PieceKind` code assignments.
pub const FEN_PIECE_NAMES: &str = "KQRBNP";

/// Safety cap on generated move candidates. No reachable chess position
/// comes close; exceeding it indicates a generator defect.
pub const MAX_LENGTH_MOVELIST: usize = 127;

// Home squares of kings and rooks, in the `(file << 3) | rank` layout.
// Used for castling generation and castling-rights revocation.
pub const POS_A1: Square = 0;
pub const POS_C1: Square = 16;
pub const POS_E1: Square = 32;
pub const POS_G1: Square = 48;
pub const POS_H1: Square = 56;
pub const POS_A8: Square = 7;
pub const POS_C8: Square = 23;
pub const POS_E8: Square = 39;
pub const POS_G8: Square = 55;
pub const POS_H8: Square = 63;
