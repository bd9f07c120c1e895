//! Rook move generation.

use crate::errors::ChessResult;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::piece_steps::push_ray_moves;

pub(crate) const ROOK_RAYS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) fn push_rook_moves(
    game_state: &GameState,
    from: Square,
    mover_color: Color,
    moves: &mut Vec<ChessMove>,
) -> ChessResult<()> {
    push_ray_moves(game_state, from, mover_color, &ROOK_RAYS, moves)
}
