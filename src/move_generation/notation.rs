//! Algebraic move text with origin disambiguation.
//!
//! Runs as a post-pass over a freshly generated movelist, before any move
//! is applied, so capture detection can read the board directly. Text
//! carries no check or checkmate annotation.

use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::{piece_kind_of, CastlingKind, PieceKind, EMPTY};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::{file_char, rank_char, square_file, square_rank, square_to_algebraic};

/// Assign each move its algebraic text, then resolve collisions where two
/// moves of the same piece type render identically. Colliding origins that
/// differ in file are tagged with the origin file, otherwise the origin
/// rank. With three or more colliders the same per-move rule is applied
/// best-effort; the texts may still collide.
pub(crate) fn assign_move_text(game_state: &GameState, moves: &mut [ChessMove]) {
    // Collisions are judged on the untagged texts so that tagging one
    // member of a pair does not hide the collision from the other.
    let base: Vec<String> = moves
        .iter()
        .map(|mv| base_text(game_state, mv))
        .collect();

    for index in 0..moves.len() {
        moves[index].text = base[index].clone();
        if !needs_disambiguation(game_state, &moves[index]) {
            continue;
        }

        let colliders: Vec<usize> = (0..moves.len())
            .filter(|&other| other != index && base[other] == base[index])
            .collect();
        if colliders.is_empty() {
            continue;
        }

        let file = square_file(moves[index].from);
        let file_is_distinct = colliders
            .iter()
            .all(|&other| square_file(moves[other].from) != file);
        let tag = if file_is_distinct {
            file_char(file)
        } else {
            rank_char(square_rank(moves[index].from))
        };

        // The tag slots in directly after the piece letter.
        moves[index].text.insert(1, tag);
    }
}

fn base_text(game_state: &GameState, mv: &ChessMove) -> String {
    match mv.castling {
        CastlingKind::KingSide => return "O-O".to_owned(),
        CastlingKind::QueenSide => return "O-O-O".to_owned(),
        CastlingKind::None => {}
    }

    let kind = piece_kind_of(game_state.cells[mv.from as usize]).unwrap_or(PieceKind::Pawn);
    let is_capture = mv.is_en_passant || game_state.cells[mv.to as usize] != EMPTY;
    let mut out = String::new();

    if kind == PieceKind::Pawn {
        if is_capture {
            out.push(file_char(square_file(mv.from)));
            out.push('x');
        }
        out.push_str(&square_to_algebraic(mv.to));
        if mv.is_en_passant {
            out.push_str("e.p.");
        }
        if let Some(promoted) = mv.promoted_to {
            out.push('=');
            out.push(promoted.fen_letter());
        }
    } else {
        out.push(kind.fen_letter());
        if is_capture {
            out.push('x');
        }
        out.push_str(&square_to_algebraic(mv.to));
    }

    out
}

/// Pawn texts already embed the origin file on captures and castles are
/// fixed strings, so only piece moves take origin tags.
fn needs_disambiguation(game_state: &GameState, mv: &ChessMove) -> bool {
    if mv.castling != CastlingKind::None {
        return false;
    }
    piece_kind_of(game_state.cells[mv.from as usize])
        .map(|kind| kind != PieceKind::Pawn)
        .unwrap_or(false)
}
