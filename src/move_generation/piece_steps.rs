//! Shared board-walking primitives for move generation.
//!
//! Steps and rays are expressed as `(file_step, rank_step)` pairs so the
//! per-piece modules stay declarative. All pushes funnel through
//! `push_move`, which enforces the movelist length cap.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_rules::MAX_LENGTH_MOVELIST;
use crate::game_state::chess_types::{is_enemy_piece, Color, Square, EMPTY};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::{square_file, square_index, square_rank};

/// Append a move, failing once the list would exceed the hard cap.
#[inline]
pub(crate) fn push_move(moves: &mut Vec<ChessMove>, mv: ChessMove) -> ChessResult<()> {
    if moves.len() >= MAX_LENGTH_MOVELIST {
        return Err(ChessError::MoveListOverflow(moves.len()));
    }
    moves.push(mv);
    Ok(())
}

/// Square one step away from `from`, or `None` when the step leaves the board.
#[inline]
pub(crate) fn target_square(from: Square, file_step: i8, rank_step: i8) -> Option<Square> {
    let file = square_file(from) as i8 + file_step;
    let rank = square_rank(from) as i8 + rank_step;
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some(square_index(file as u8, rank as u8))
    } else {
        None
    }
}

/// One-step movers (king body moves, knights): each step lands on an empty
/// or enemy-occupied square.
pub(crate) fn push_step_moves(
    game_state: &GameState,
    from: Square,
    mover_color: Color,
    steps: &[(i8, i8)],
    moves: &mut Vec<ChessMove>,
) -> ChessResult<()> {
    for &(file_step, rank_step) in steps {
        if let Some(to) = target_square(from, file_step, rank_step) {
            let code = game_state.cells[to as usize];
            if code == EMPTY || is_enemy_piece(code, mover_color) {
                push_move(moves, ChessMove::new(from, to))?;
            }
        }
    }
    Ok(())
}

/// Sliders: walk each ray until leaving the board, stopping on the first
/// occupied square (included when it holds an enemy piece).
pub(crate) fn push_ray_moves(
    game_state: &GameState,
    from: Square,
    mover_color: Color,
    rays: &[(i8, i8)],
    moves: &mut Vec<ChessMove>,
) -> ChessResult<()> {
    for &(file_step, rank_step) in rays {
        let mut cursor = from;
        while let Some(to) = target_square(cursor, file_step, rank_step) {
            let code = game_state.cells[to as usize];
            if code == EMPTY {
                push_move(moves, ChessMove::new(from, to))?;
                cursor = to;
                continue;
            }
            if is_enemy_piece(code, mover_color) {
                push_move(moves, ChessMove::new(from, to))?;
            }
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{push_move, target_square};
    use crate::errors::ChessError;
    use crate::game_state::chess_move::ChessMove;
    use crate::game_state::chess_rules::MAX_LENGTH_MOVELIST;

    #[test]
    fn target_square_rejects_off_board_steps() {
        // a1 = 0: no step toward lower files or ranks.
        assert_eq!(target_square(0, -1, 0), None);
        assert_eq!(target_square(0, 0, -1), None);
        assert_eq!(target_square(0, 1, 1), Some(9));

        // h8 = 63: no step toward higher files or ranks.
        assert_eq!(target_square(63, 1, 0), None);
        assert_eq!(target_square(63, 0, 1), None);
        assert_eq!(target_square(63, -1, -1), Some(54));
    }

    #[test]
    fn push_move_enforces_the_length_cap() {
        let mut moves = Vec::new();
        for _ in 0..MAX_LENGTH_MOVELIST {
            push_move(&mut moves, ChessMove::new(0, 1)).expect("push under the cap should succeed");
        }

        let overflow = push_move(&mut moves, ChessMove::new(0, 1));
        assert!(matches!(overflow, Err(ChessError::MoveListOverflow(n)) if n == MAX_LENGTH_MOVELIST));
    }
}
