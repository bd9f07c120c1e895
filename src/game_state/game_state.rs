//! Core mutable board state.
//!
//! `GameState` is the central model: a 64-cell board in the
//! `(file << 3) | rank` layout, per-side castling/en-passant records,
//! clocks, the injected-hasher position key, and the cached pseudo-legal
//! movelist. The movelist and hash key are derived state: every mutator
//! recomputes both before returning, so queries always reflect the current
//! position.
//!
//! Single-writer discipline is the caller's job: moves must be undone in
//! reverse application order on the same instance, and undoing a move that
//! was never applied here is not supported.

use std::fmt;
use std::sync::Arc;

use crate::book::book_move::record_to_chess_move;
use crate::book::opening_book::OpeningBook;
use crate::errors::ChessResult;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_rules::{
    POS_A1, POS_A8, POS_E1, POS_E8, POS_H1, POS_H8, STARTING_POSITION_FEN,
};
use crate::game_state::chess_types::{
    piece_code, CastlingKind, Color, PieceCode, PieceKind, Square, COLOR_MASK, EMPTY, PIECE_MASK,
};
use crate::game_state::side_state::SideState;
use crate::game_state::undo_state::UndoState;
use crate::hashing::PositionHasher;
use crate::move_generation::move_generator::generate_move_list;
use crate::utils::algebraic::square_file;
use crate::utils::fen_generator::{generate_fen, generate_id_string};
use crate::utils::fen_parser::parse_fen;

#[derive(Clone)]
pub struct GameState {
    /// Board cells, a1 = 0 through h8 = 63, one file per group of 8.
    pub cells: [PieceCode; 64],
    pub side_to_move: Color,
    pub white: SideState,
    pub black: SideState,
    pub halfmove_clock: u16,
    pub move_number: u16,
    /// Position key over the canonical identity string; recomputed whole
    /// after every mutation, never incrementally.
    pub hash_key: u64,
    legal_moves: Vec<ChessMove>,
    hasher: Arc<dyn PositionHasher>,
}

impl GameState {
    /// Empty board with default bookkeeping; the FEN parser fills it in.
    pub fn new_empty(hasher: Arc<dyn PositionHasher>) -> Self {
        Self {
            cells: [EMPTY; 64],
            side_to_move: Color::White,
            white: SideState::new(),
            black: SideState::new(),
            halfmove_clock: 0,
            move_number: 1,
            hash_key: 0,
            legal_moves: Vec::new(),
            hasher,
        }
    }

    pub fn new_game(hasher: Arc<dyn PositionHasher>) -> Self {
        Self::from_fen("", hasher).expect("starting FEN should always parse")
    }

    /// Construct from a FEN string; a blank string means the standard
    /// starting position. The hash key and movelist are ready on return.
    pub fn from_fen(fen: &str, hasher: Arc<dyn PositionHasher>) -> ChessResult<Self> {
        let trimmed = fen.trim();
        let fen = if trimmed.is_empty() { STARTING_POSITION_FEN } else { trimmed };

        let mut game_state = parse_fen(fen, hasher)?;
        game_state.refresh_derived_state()?;
        Ok(game_state)
    }

    /// Recompute the hash key and regenerate the cached movelist.
    pub fn refresh_derived_state(&mut self) -> ChessResult<()> {
        self.hash_key = self.hasher.hash(&self.id_string());
        self.legal_moves = generate_move_list(self)?;
        Ok(())
    }

    /// Canonical identity string: board, side, castling, en-passant target.
    #[inline]
    pub fn id_string(&self) -> String {
        generate_id_string(self)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn legal_moves(&self) -> &[ChessMove] {
        &self.legal_moves
    }

    #[inline]
    pub fn side_state(&self, color: Color) -> &SideState {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    #[inline]
    pub fn piece_on(&self, square: Square) -> PieceCode {
        self.cells[square as usize]
    }

    #[inline]
    pub fn is_empty_cell(&self, square: Square) -> bool {
        self.cells[square as usize] == EMPTY
    }

    /// True when some cached move connects the two squares.
    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        self.legal_moves.iter().any(|mv| mv.matches(from, to))
    }

    /// Cached move matching endpoints and promotion piece, if any.
    pub fn find_legal_move(
        &self,
        from: Square,
        to: Square,
        promoted_to: Option<PieceKind>,
    ) -> Option<ChessMove> {
        self.legal_moves
            .iter()
            .find(|mv| mv.matches_promotion(from, to, promoted_to))
            .cloned()
    }

    /// Book records for the current position, translated into moves with
    /// their popularity weights carried over.
    pub fn book_moves(&self, book: &OpeningBook) -> Vec<ChessMove> {
        book.get_all_moves(self.hash_key)
            .iter()
            .map(record_to_chess_move)
            .collect()
    }

    /// Apply a move in place, filling the move's captured-piece and
    /// prior-state fields for a later undo. Returns the squares whose
    /// contents changed (at most 4) for incremental redraws.
    pub fn apply_move(&mut self, mv: &mut ChessMove) -> ChessResult<Vec<Square>> {
        mv.prior_state = Some(UndoState {
            side_to_move: self.side_to_move,
            halfmove_clock: self.halfmove_clock,
            move_number: self.move_number,
            white: self.white,
            black: self.black,
        });

        let mut changed = Vec::with_capacity(4);
        let moving_color = self.side_to_move;
        let from = mv.from;
        let to = mv.to;
        let moving_piece = self.cells[from as usize];
        let destination_before = self.cells[to as usize];
        let is_pawn_move = (moving_piece & PIECE_MASK) == PieceKind::Pawn.code();

        // En-passant vulnerability lasts exactly one ply.
        self.white.en_passant_file = None;
        self.black.en_passant_file = None;

        // Any pawn move or any capture resets the halfmove clock.
        if is_pawn_move || destination_before != EMPTY || mv.is_en_passant {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        // A double advance flags the moving side's origin file so the
        // opponent's next movelist can include the en-passant capture.
        if is_pawn_move {
            let delta = i16::from(to) - i16::from(from);
            if delta == 2 {
                self.white.en_passant_file = Some(square_file(from));
            } else if delta == -2 {
                self.black.en_passant_file = Some(square_file(from));
            }
        }

        mv.captured_piece = destination_before;

        let placed = match mv.promoted_to {
            Some(kind) => piece_code(moving_color, kind),
            None => moving_piece,
        };
        self.cells[to as usize] = placed;
        self.cells[from as usize] = EMPTY;
        changed.push(to);
        changed.push(from);

        if mv.is_en_passant {
            // The captured pawn sits one rank behind the destination.
            let captured_square = match moving_color {
                Color::White => to - 1,
                Color::Black => to + 1,
            };
            mv.captured_piece = self.cells[captured_square as usize];
            self.cells[captured_square as usize] = EMPTY;
            changed.push(captured_square);
        } else if mv.castling == CastlingKind::KingSide {
            // Rook hops from the h-file corner to the king's other side.
            self.cells[(from + 8) as usize] = self.cells[(to + 8) as usize];
            self.cells[(to + 8) as usize] = EMPTY;
            changed.push(from + 8);
            changed.push(to + 8);
        } else if mv.castling == CastlingKind::QueenSide {
            self.cells[(from - 8) as usize] = self.cells[(to - 16) as usize];
            self.cells[(to - 16) as usize] = EMPTY;
            changed.push(from - 8);
            changed.push(to - 16);
        }

        self.side_to_move = moving_color.opposite();
        if moving_color == Color::Black {
            self.move_number = self.move_number.saturating_add(1);
        }

        // Moving from, or capturing on, a king/rook home square revokes
        // the matching castling rights. Both endpoints checked.
        self.revoke_castling_rights(from);
        self.revoke_castling_rights(to);

        self.refresh_derived_state()?;
        Ok(changed)
    }

    /// Reverse the most recently applied move on this instance, restoring
    /// the snapshot taken at apply time. Returns the changed squares.
    pub fn undo_move(&mut self, mv: &ChessMove) -> ChessResult<Vec<Square>> {
        let mut changed = Vec::with_capacity(4);
        let from = mv.from as usize;
        let to = mv.to as usize;

        if mv.is_en_passant {
            self.cells[from] = self.cells[to];
            self.cells[to] = EMPTY;
            changed.push(mv.from);
            changed.push(mv.to);

            // The captured pawn stood beside the origin, one file over.
            let captured_square = if mv.from < mv.to { mv.from + 8 } else { mv.from - 8 };
            self.cells[captured_square as usize] = mv.captured_piece;
            changed.push(captured_square);
        } else if mv.promoted_to.is_some() {
            self.cells[from] = (self.cells[to] & COLOR_MASK) | PieceKind::Pawn.code();
            self.cells[to] = mv.captured_piece;
            changed.push(mv.from);
            changed.push(mv.to);
        } else if mv.castling == CastlingKind::KingSide {
            self.cells[from] = self.cells[to];
            self.cells[to] = EMPTY;
            self.cells[to + 8] = self.cells[from + 8];
            self.cells[from + 8] = EMPTY;
            changed.push(mv.from);
            changed.push(mv.to);
            changed.push(mv.from + 8);
            changed.push(mv.to + 8);
        } else if mv.castling == CastlingKind::QueenSide {
            self.cells[from] = self.cells[to];
            self.cells[to] = EMPTY;
            self.cells[to - 16] = self.cells[from - 8];
            self.cells[from - 8] = EMPTY;
            changed.push(mv.from);
            changed.push(mv.to);
            changed.push(mv.from - 8);
            changed.push(mv.to - 16);
        } else {
            self.cells[from] = self.cells[to];
            self.cells[to] = mv.captured_piece;
            changed.push(mv.from);
            changed.push(mv.to);
        }

        if let Some(prior) = mv.prior_state {
            self.side_to_move = prior.side_to_move;
            self.halfmove_clock = prior.halfmove_clock;
            self.move_number = prior.move_number;
            self.white = prior.white;
            self.black = prior.black;
        }

        self.refresh_derived_state()?;
        Ok(changed)
    }

    fn revoke_castling_rights(&mut self, square: Square) {
        match square {
            POS_E1 => {
                self.white.can_castle_kingside = false;
                self.white.can_castle_queenside = false;
            }
            POS_H1 => self.white.can_castle_kingside = false,
            POS_A1 => self.white.can_castle_queenside = false,
            POS_E8 => {
                self.black.can_castle_kingside = false;
                self.black.can_castle_queenside = false;
            }
            POS_H8 => self.black.can_castle_kingside = false,
            POS_A8 => self.black.can_castle_queenside = false,
            _ => {}
        }
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("fen", &self.get_fen())
            .field("hash_key", &self.hash_key)
            .field("legal_moves", &self.legal_moves.len())
            .finish()
    }
}
