//! The move value object.
//!
//! A `ChessMove` describes one ply: endpoints and special-move flags, plus
//! (once the move has been applied) the captured piece and a snapshot of
//! the prior position bookkeeping so the move can be undone. A move
//! instance is tied to the position it was generated for and must not be
//! replayed on unrelated positions.

use crate::game_state::chess_types::{CastlingKind, PieceCode, PieceKind, Square, EMPTY};
use crate::game_state::undo_state::UndoState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    /// Promotion piece type, `None` for non-promotions.
    pub promoted_to: Option<PieceKind>,
    pub is_en_passant: bool,
    pub castling: CastlingKind,
    /// Piece code removed from the board by this move. Populated when the
    /// move is applied; `EMPTY` before that.
    pub captured_piece: PieceCode,
    /// Bookkeeping snapshot captured at apply time, restored on undo.
    pub prior_state: Option<UndoState>,
    /// Disambiguated algebraic rendering, filled in by the generator.
    pub text: String,
    /// Popularity weight copied from a book record, 0 otherwise.
    pub weight: u16,
}

impl ChessMove {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promoted_to: None,
            is_en_passant: false,
            castling: CastlingKind::None,
            captured_piece: EMPTY,
            prior_state: None,
            text: String::new(),
            weight: 0,
        }
    }

    pub fn with_promotion(from: Square, to: Square, promoted_to: PieceKind) -> Self {
        let mut mv = Self::new(from, to);
        mv.promoted_to = Some(promoted_to);
        mv
    }

    pub fn en_passant(from: Square, to: Square) -> Self {
        let mut mv = Self::new(from, to);
        mv.is_en_passant = true;
        mv
    }

    pub fn castle(from: Square, to: Square, kind: CastlingKind) -> Self {
        let mut mv = Self::new(from, to);
        mv.castling = kind;
        mv
    }

    #[inline]
    pub fn matches(&self, from: Square, to: Square) -> bool {
        self.from == from && self.to == to
    }

    #[inline]
    pub fn matches_promotion(&self, from: Square, to: Square, promoted_to: Option<PieceKind>) -> bool {
        self.matches(from, to) && self.promoted_to == promoted_to
    }
}
