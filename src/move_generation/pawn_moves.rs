//! Pawn move generation: pushes, double pushes, captures, promotions,
//! and en-passant captures driven by the opponent's vulnerability flag.

use crate::errors::ChessResult;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::{is_enemy_piece, Color, PieceKind, Square, EMPTY};
use crate::game_state::game_state::GameState;
use crate::move_generation::piece_steps::{push_move, target_square};
use crate::utils::algebraic::{square_file, square_index, square_rank};

/// Promotion pieces in the order the movelist presents them.
const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

pub(crate) fn push_pawn_moves(
    game_state: &GameState,
    from: Square,
    mover_color: Color,
    moves: &mut Vec<ChessMove>,
) -> ChessResult<()> {
    let (forward, start_rank, promotion_rank): (i8, u8, u8) = match mover_color {
        Color::White => (1, 1, 6),
        Color::Black => (-1, 6, 1),
    };
    let rank = square_rank(from);
    let promotes = rank == promotion_rank;

    if let Some(to) = target_square(from, 0, forward) {
        if game_state.cells[to as usize] == EMPTY {
            push_pawn_destination(from, to, promotes, moves)?;

            if rank == start_rank {
                let two_ahead = square_index(square_file(from), rank.wrapping_add_signed(2 * forward));
                if game_state.cells[two_ahead as usize] == EMPTY {
                    push_move(moves, ChessMove::new(from, two_ahead))?;
                }
            }
        }
    }

    for file_step in [-1i8, 1] {
        if let Some(to) = target_square(from, file_step, forward) {
            if is_enemy_piece(game_state.cells[to as usize], mover_color) {
                push_pawn_destination(from, to, promotes, moves)?;
            }
        }
    }

    push_en_passant_capture(game_state, from, mover_color, moves)
}

fn push_pawn_destination(
    from: Square,
    to: Square,
    promotes: bool,
    moves: &mut Vec<ChessMove>,
) -> ChessResult<()> {
    if promotes {
        for kind in PROMOTION_KINDS {
            push_move(moves, ChessMove::with_promotion(from, to, kind))?;
        }
    } else {
        push_move(moves, ChessMove::new(from, to))?;
    }
    Ok(())
}

/// A pawn may capture en passant only on the ply directly after the enemy
/// double push, from the rank the bypassed pawn stopped beside.
fn push_en_passant_capture(
    game_state: &GameState,
    from: Square,
    mover_color: Color,
    moves: &mut Vec<ChessMove>,
) -> ChessResult<()> {
    let (capture_rank, target_rank, vulnerable_file) = match mover_color {
        Color::White => (4, 5, game_state.black.en_passant_file),
        Color::Black => (3, 2, game_state.white.en_passant_file),
    };

    if square_rank(from) != capture_rank {
        return Ok(());
    }

    if let Some(enemy_file) = vulnerable_file {
        let file = square_file(from);
        if enemy_file + 1 == file || file + 1 == enemy_file {
            let to = square_index(enemy_file, target_rank);
            push_move(moves, ChessMove::en_passant(from, to))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::push_pawn_moves;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::game_state::game_state::GameState;
    use crate::hashing::FoldedSplitmixHasher;
    use crate::utils::algebraic::algebraic_to_square;

    fn state(fen: &str) -> GameState {
        GameState::from_fen(fen, Arc::new(FoldedSplitmixHasher::default()))
            .expect("test FEN should parse")
    }

    fn sq(name: &str) -> u8 {
        algebraic_to_square(name).expect("square name should parse")
    }

    #[test]
    fn home_rank_pawn_offers_single_and_double_push() {
        let game_state = state("k7/8/8/8/8/8/4P3/K7 w - - 0 1");
        let mut moves = Vec::new();

        push_pawn_moves(&game_state, sq("e2"), Color::White, &mut moves)
            .expect("generation should succeed");
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|mv| mv.to == sq("e3")));
        assert!(moves.iter().any(|mv| mv.to == sq("e4")));
    }

    #[test]
    fn blocked_pawns_cannot_push_or_jump() {
        // Blocker directly ahead suppresses both pushes.
        let game_state = state("k7/8/8/8/8/4p3/4P3/K7 w - - 0 1");
        let mut moves = Vec::new();
        push_pawn_moves(&game_state, sq("e2"), Color::White, &mut moves)
            .expect("generation should succeed");
        assert!(moves.is_empty());

        // Blocker on the double-push square still allows the single step.
        let game_state = state("k7/8/8/8/4p3/8/4P3/K7 w - - 0 1");
        let mut moves = Vec::new();
        push_pawn_moves(&game_state, sq("e2"), Color::White, &mut moves)
            .expect("generation should succeed");
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, sq("e3"));
    }

    #[test]
    fn diagonal_captures_require_enemy_occupants() {
        let game_state = state("k7/8/8/3p1P2/4P3/8/8/K7 w - - 0 1");
        let mut moves = Vec::new();

        push_pawn_moves(&game_state, sq("e4"), Color::White, &mut moves)
            .expect("generation should succeed");
        // Push to e5 and capture on d5; f5 holds a friendly pawn.
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|mv| mv.to == sq("d5")));
        assert!(moves.iter().all(|mv| mv.to != sq("f5")));
    }

    #[test]
    fn promotion_enumerates_four_pieces_queen_first() {
        let game_state = state("8/P6k/8/8/8/8/8/K7 w - - 0 1");
        let mut moves = Vec::new();

        push_pawn_moves(&game_state, sq("a7"), Color::White, &mut moves)
            .expect("generation should succeed");
        assert_eq!(moves.len(), 4);
        assert_eq!(moves[0].promoted_to, Some(PieceKind::Queen));
        assert_eq!(moves[1].promoted_to, Some(PieceKind::Rook));
        assert_eq!(moves[2].promoted_to, Some(PieceKind::Bishop));
        assert_eq!(moves[3].promoted_to, Some(PieceKind::Knight));
        assert!(moves.iter().all(|mv| mv.to == sq("a8")));
    }

    #[test]
    fn capture_promotions_also_enumerate_four_pieces() {
        let game_state = state("1r6/P6k/8/8/8/8/8/K7 w - - 0 1");
        let mut moves = Vec::new();

        push_pawn_moves(&game_state, sq("a7"), Color::White, &mut moves)
            .expect("generation should succeed");
        // Four quiet promotions on a8 plus four capture promotions on b8.
        assert_eq!(moves.len(), 8);
        assert_eq!(moves.iter().filter(|mv| mv.to == sq("b8")).count(), 4);
    }

    #[test]
    fn en_passant_requires_the_adjacent_vulnerability_flag() {
        let game_state = state("rnbqkbnr/ppp1pppp/8/8/3pP3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 2");
        let mut moves = Vec::new();

        push_pawn_moves(&game_state, sq("d4"), Color::Black, &mut moves)
            .expect("generation should succeed");
        let ep = moves
            .iter()
            .find(|mv| mv.is_en_passant)
            .expect("en-passant capture should be generated");
        assert_eq!(ep.to, sq("e3"));

        // Same board with the flag cleared: no en-passant capture.
        let game_state = state("rnbqkbnr/ppp1pppp/8/8/3pP3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 2");
        let mut moves = Vec::new();
        push_pawn_moves(&game_state, sq("d4"), Color::Black, &mut moves)
            .expect("generation should succeed");
        assert!(moves.iter().all(|mv| !mv.is_en_passant));
    }

    #[test]
    fn black_pawns_advance_toward_rank_one() {
        let game_state = state("k7/4p3/8/8/8/8/8/K7 b - - 0 1");
        let mut moves = Vec::new();

        push_pawn_moves(&game_state, sq("e7"), Color::Black, &mut moves)
            .expect("generation should succeed");
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|mv| mv.to == sq("e6")));
        assert!(moves.iter().any(|mv| mv.to == sq("e5")));
    }
}
