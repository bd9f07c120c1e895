//! Queen move generation: the union of the rook and bishop rays.

use crate::errors::ChessResult;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::bishop_moves::BISHOP_RAYS;
use crate::move_generation::piece_steps::push_ray_moves;
use crate::move_generation::rook_moves::ROOK_RAYS;

pub(crate) fn push_queen_moves(
    game_state: &GameState,
    from: Square,
    mover_color: Color,
    moves: &mut Vec<ChessMove>,
) -> ChessResult<()> {
    push_ray_moves(game_state, from, mover_color, &ROOK_RAYS, moves)?;
    push_ray_moves(game_state, from, mover_color, &BISHOP_RAYS, moves)
}
