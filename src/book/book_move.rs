//! Translation from packed book records to `ChessMove` values, plus a
//! weight-proportional picker for engine-style book probing.

use rand::{Rng, RngExt};

use crate::book::book_record::{
    BookRecord, RAW_CASTLE_KINGSIDE_BLACK, RAW_CASTLE_KINGSIDE_WHITE, RAW_CASTLE_QUEENSIDE_BLACK,
    RAW_CASTLE_QUEENSIDE_WHITE,
};
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_rules::{POS_C1, POS_C8, POS_E1, POS_E8, POS_G1, POS_G8};
use crate::game_state::chess_types::{CastlingKind, PieceKind};
use crate::utils::algebraic::square_index;

/// Decode one record into a move. The four reserved castling values bypass
/// the generic field decode.
pub fn record_to_chess_move(record: &BookRecord) -> ChessMove {
    let mut mv = match record.raw_move {
        RAW_CASTLE_KINGSIDE_WHITE => ChessMove::castle(POS_E1, POS_G1, CastlingKind::KingSide),
        RAW_CASTLE_KINGSIDE_BLACK => ChessMove::castle(POS_E8, POS_G8, CastlingKind::KingSide),
        RAW_CASTLE_QUEENSIDE_WHITE => ChessMove::castle(POS_E1, POS_C1, CastlingKind::QueenSide),
        RAW_CASTLE_QUEENSIDE_BLACK => ChessMove::castle(POS_E8, POS_C8, CastlingKind::QueenSide),
        _ => {
            let from = square_index(record.from_file(), record.from_rank());
            let to = square_index(record.to_file(), record.to_rank());
            match promotion_kind(record.promotion_code()) {
                Some(kind) => ChessMove::with_promotion(from, to, kind),
                None => ChessMove::new(from, to),
            }
        }
    };
    mv.weight = record.weight;
    mv
}

fn promotion_kind(code: u8) -> Option<PieceKind> {
    match code {
        1 => Some(PieceKind::Knight),
        2 => Some(PieceKind::Bishop),
        3 => Some(PieceKind::Rook),
        4 => Some(PieceKind::Queen),
        _ => None,
    }
}

/// Pick a move with probability proportional to its weight. All-zero
/// weights fall back to the first move.
pub fn choose_weighted_move<'a, R: Rng + ?Sized>(
    moves: &'a [ChessMove],
    rng: &mut R,
) -> Option<&'a ChessMove> {
    if moves.is_empty() {
        return None;
    }

    let total_weight: u64 = moves.iter().map(|mv| u64::from(mv.weight)).sum();
    if total_weight == 0 {
        return Some(&moves[0]);
    }

    let mut pick = rng.random_range(0..total_weight);
    for mv in moves {
        let weight = u64::from(mv.weight);
        if pick < weight {
            return Some(mv);
        }
        pick -= weight;
    }

    Some(&moves[0])
}
