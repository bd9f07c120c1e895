//! Crate root module declarations for the BookBoard opening-explorer core.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! Polyglot book access, hashing, and utility helpers) so tests and host
//! applications can import stable module paths.

pub mod errors;
pub mod hashing;

pub mod game_state {
    pub mod chess_move;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod side_state;
    pub mod undo_state;
}

pub mod move_generation {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_generator;
    pub mod notation;
    pub mod pawn_moves;
    pub mod piece_steps;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod book {
    pub mod book_move;
    pub mod book_record;
    pub mod opening_book;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}
