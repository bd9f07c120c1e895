//! King move generation, including castling.
//!
//! Castling is generated from board geometry alone: the king on its home
//! square, the matching rook on its corner, and empty squares between.
//! Rights flags and attacked-square checks are not consulted here; callers
//! that need strict legality filter afterwards.

use crate::errors::ChessResult;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_rules::{POS_E1, POS_E8};
use crate::game_state::chess_types::{piece_code, CastlingKind, Color, PieceKind, Square, EMPTY};
use crate::game_state::game_state::GameState;
use crate::move_generation::piece_steps::{push_move, push_step_moves};

const KING_STEPS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub(crate) fn push_king_moves(
    game_state: &GameState,
    from: Square,
    mover_color: Color,
    moves: &mut Vec<ChessMove>,
) -> ChessResult<()> {
    push_step_moves(game_state, from, mover_color, &KING_STEPS, moves)?;
    push_castling_moves(game_state, from, mover_color, moves)
}

fn push_castling_moves(
    game_state: &GameState,
    from: Square,
    mover_color: Color,
    moves: &mut Vec<ChessMove>,
) -> ChessResult<()> {
    let home = match mover_color {
        Color::White => POS_E1,
        Color::Black => POS_E8,
    };
    if from != home {
        return Ok(());
    }

    let own_rook = piece_code(mover_color, PieceKind::Rook);

    // Kingside: rook on the h-file corner, f- and g-file squares empty.
    if game_state.cells[(home + 24) as usize] == own_rook
        && game_state.cells[(home + 8) as usize] == EMPTY
        && game_state.cells[(home + 16) as usize] == EMPTY
    {
        push_move(
            moves,
            ChessMove::castle(home, home + 16, CastlingKind::KingSide),
        )?;
    }

    // Queenside: rook on the a-file corner, b- through d-file squares empty.
    if game_state.cells[(home - 32) as usize] == own_rook
        && game_state.cells[(home - 8) as usize] == EMPTY
        && game_state.cells[(home - 16) as usize] == EMPTY
        && game_state.cells[(home - 24) as usize] == EMPTY
    {
        push_move(
            moves,
            ChessMove::castle(home, home - 16, CastlingKind::QueenSide),
        )?;
    }

    Ok(())
}
