//! Pseudo-legal movelist assembly.
//!
//! Scans the board for the side to move, dispatches to the per-piece
//! generators, then runs the notation pass so every move leaves here with
//! its text attached. Moves are pseudo-legal: a move may leave the mover's
//! own king attacked, and captures of the enemy king appear in the list.

use crate::errors::ChessResult;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::{piece_color_of, piece_kind_of, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::bishop_moves::push_bishop_moves;
use crate::move_generation::king_moves::push_king_moves;
use crate::move_generation::knight_moves::push_knight_moves;
use crate::move_generation::notation::assign_move_text;
use crate::move_generation::pawn_moves::push_pawn_moves;
use crate::move_generation::queen_moves::push_queen_moves;
use crate::move_generation::rook_moves::push_rook_moves;

pub fn generate_move_list(game_state: &GameState) -> ChessResult<Vec<ChessMove>> {
    let mut moves = Vec::new();
    let mover_color = game_state.side_to_move;

    for square in 0u8..64 {
        let code = game_state.cells[square as usize];
        if piece_color_of(code) != Some(mover_color) {
            continue;
        }

        let Some(kind) = piece_kind_of(code) else {
            continue;
        };
        match kind {
            PieceKind::Pawn => push_pawn_moves(game_state, square, mover_color, &mut moves)?,
            PieceKind::Knight => push_knight_moves(game_state, square, mover_color, &mut moves)?,
            PieceKind::Bishop => push_bishop_moves(game_state, square, mover_color, &mut moves)?,
            PieceKind::Rook => push_rook_moves(game_state, square, mover_color, &mut moves)?,
            PieceKind::Queen => push_queen_moves(game_state, square, mover_color, &mut moves)?,
            PieceKind::King => push_king_moves(game_state, square, mover_color, &mut moves)?,
        }
    }

    assign_move_text(game_state, &mut moves);
    Ok(moves)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::generate_move_list;
    use crate::game_state::chess_types::CastlingKind;
    use crate::game_state::game_state::GameState;
    use crate::hashing::FoldedSplitmixHasher;

    fn state(fen: &str) -> GameState {
        GameState::from_fen(fen, Arc::new(FoldedSplitmixHasher::default()))
            .expect("test FEN should parse")
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let game_state = state("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        let moves = generate_move_list(&game_state).expect("generation should succeed");
        assert_eq!(moves.len(), 20);
        assert!(moves.iter().all(|mv| !mv.text.is_empty()));
    }

    #[test]
    fn only_the_side_to_move_contributes_moves() {
        let game_state = state("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1");
        let moves = generate_move_list(&game_state).expect("generation should succeed");
        assert_eq!(moves.len(), 20);
        // Every move originates on black's seventh or eighth rank.
        assert!(moves.iter().all(|mv| mv.from % 8 >= 6));
    }

    #[test]
    fn open_castling_position_counts_both_castles() {
        let game_state = state("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1");
        let moves = generate_move_list(&game_state).expect("generation should succeed");
        // 16 pawn moves, 5 rook moves, 2 king steps, 2 castles.
        assert_eq!(moves.len(), 25);
        assert_eq!(
            moves
                .iter()
                .filter(|mv| mv.castling != CastlingKind::None)
                .count(),
            2
        );
    }

    #[test]
    fn bare_promotion_position_counts_seven_moves() {
        // Four promotions and three king steps.
        let game_state = state("8/P6k/8/8/8/8/8/K7 w - - 0 1");
        let moves = generate_move_list(&game_state).expect("generation should succeed");
        assert_eq!(moves.len(), 7);
    }

    #[test]
    fn moves_may_ignore_pins_and_checks() {
        // White king on e1 is in check from the e8 rook; unrelated moves
        // are still generated.
        let game_state = state("4r2k/8/8/8/8/8/8/3NK3 w - - 0 1");
        let moves = generate_move_list(&game_state).expect("generation should succeed");
        assert!(moves.iter().any(|mv| mv.text == "Nb2"));
    }
}
