//! Knight move generation.

use crate::errors::ChessResult;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::piece_steps::push_step_moves;

const KNIGHT_STEPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub(crate) fn push_knight_moves(
    game_state: &GameState,
    from: Square,
    mover_color: Color,
    moves: &mut Vec<ChessMove>,
) -> ChessResult<()> {
    push_step_moves(game_state, from, mover_color, &KNIGHT_STEPS, moves)
}
