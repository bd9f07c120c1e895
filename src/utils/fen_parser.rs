//! FEN-to-GameState parser.
//!
//! Populates the 64-cell board, side to move, castling rights, en-passant
//! vulnerability, and clocks from a Forsyth-Edwards Notation string. Derived
//! state (hash key, movelist) is refreshed by the `GameState` constructor
//! after parsing succeeds.

use std::sync::Arc;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{piece_code, Color, PieceCode, PieceKind};
use crate::game_state::game_state::GameState;
use crate::game_state::side_state::SideState;
use crate::hashing::PositionHasher;
use crate::utils::algebraic::{algebraic_to_square, square_file, square_index, square_rank};

pub fn parse_fen(fen: &str, hasher: Arc<dyn PositionHasher>) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing board layout".to_owned()))?;
    let side_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing side-to-move field".to_owned()))?;
    let castling_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing castling field".to_owned()))?;
    let en_passant_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing en-passant field".to_owned()))?;
    let halfmove_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing halfmove clock".to_owned()))?;
    let move_number_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing move number".to_owned()))?;

    if parts.next().is_some() {
        return Err(ChessError::InvalidFen("extra trailing fields".to_owned()));
    }

    let mut game_state = GameState::new_empty(hasher);

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    let (white, black) = parse_castling_rights(castling_part)?;
    game_state.white = white;
    game_state.black = black;
    parse_en_passant(en_passant_part, &mut game_state)?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| ChessError::InvalidFen(format!("invalid halfmove clock: {halfmove_part}")))?;
    game_state.move_number = move_number_part
        .parse::<u16>()
        .map_err(|_| ChessError::InvalidFen(format!("invalid move number: {move_number_part}")))?;

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFen("board layout must contain 8 ranks".to_owned()));
    }

    for (fen_rank_index, rank_str) in ranks.iter().enumerate() {
        // FEN lists rank 8 first.
        let rank = 7 - fen_rank_index as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(skip) = ch.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(ChessError::InvalidFen(format!("invalid empty-square count '{ch}'")));
                }
                file += skip as u8;
                continue;
            }

            let code = piece_from_fen_char(ch).ok_or_else(|| {
                ChessError::InvalidFen(format!("invalid piece character '{ch}' in board layout"))
            })?;

            if file >= 8 {
                return Err(ChessError::InvalidFen("board rank has too many files".to_owned()));
            }

            game_state.cells[square_index(file, rank) as usize] = code;
            file += 1;
        }

        if file != 8 {
            return Err(ChessError::InvalidFen("board rank does not sum to 8 files".to_owned()));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessError::InvalidFen(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<(SideState, SideState)> {
    let mut white = SideState {
        can_castle_kingside: false,
        can_castle_queenside: false,
        en_passant_file: None,
    };
    let mut black = white;

    if castling_part == "-" {
        return Ok((white, black));
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => white.can_castle_kingside = true,
            'Q' => white.can_castle_queenside = true,
            'k' => black.can_castle_kingside = true,
            'q' => black.can_castle_queenside = true,
            _ => {
                return Err(ChessError::InvalidFen(format!("invalid castling character: {ch}")));
            }
        }
    }

    Ok((white, black))
}

/// A target on rank 3 means white's pawn just advanced two squares (black
/// may capture it en passant); any other rank implies black's pawn did.
fn parse_en_passant(en_passant_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    if en_passant_part == "-" {
        return Ok(());
    }

    let target = algebraic_to_square(en_passant_part)?;
    let file = square_file(target);
    if square_rank(target) == 2 {
        game_state.white.en_passant_file = Some(file);
    } else {
        game_state.black.en_passant_file = Some(file);
    }

    Ok(())
}

fn piece_from_fen_char(ch: char) -> Option<PieceCode> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'k' => PieceKind::King,
        'q' => PieceKind::Queen,
        'r' => PieceKind::Rook,
        'b' => PieceKind::Bishop,
        'n' => PieceKind::Knight,
        'p' => PieceKind::Pawn,
        _ => return None,
    };

    Some(piece_code(color, kind))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::parse_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{piece_code, Color, PieceKind};
    use crate::hashing::FoldedSplitmixHasher;

    fn hasher() -> Arc<FoldedSplitmixHasher> {
        Arc::new(FoldedSplitmixHasher::default())
    }

    #[test]
    fn parse_starting_fen_populates_cells_and_flags() {
        let game_state = parse_fen(STARTING_POSITION_FEN, hasher()).expect("starting FEN should parse");

        assert_eq!(game_state.side_to_move, Color::White);
        assert_eq!(game_state.halfmove_clock, 0);
        assert_eq!(game_state.move_number, 1);
        assert!(game_state.white.can_castle_kingside);
        assert!(game_state.black.can_castle_queenside);
        assert_eq!(game_state.white.en_passant_file, None);

        // e1 = 32 holds the white king, a8 = 7 a black rook, e2 = 33 a pawn.
        assert_eq!(game_state.cells[32], piece_code(Color::White, PieceKind::King));
        assert_eq!(game_state.cells[7], piece_code(Color::Black, PieceKind::Rook));
        assert_eq!(game_state.cells[33], piece_code(Color::White, PieceKind::Pawn));
    }

    #[test]
    fn en_passant_target_rank_selects_the_side_that_moved() {
        let after_e4 = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let game_state = parse_fen(after_e4, hasher()).expect("FEN should parse");
        assert_eq!(game_state.white.en_passant_file, Some(4));
        assert_eq!(game_state.black.en_passant_file, None);

        let after_d5 = "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2";
        let game_state = parse_fen(after_d5, hasher()).expect("FEN should parse");
        assert_eq!(game_state.white.en_passant_file, None);
        assert_eq!(game_state.black.en_passant_file, Some(3));
    }

    #[test]
    fn rejects_illegal_board_characters() {
        let bad = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPXPP/RNBQKBNR w KQkq - 0 1";
        assert!(parse_fen(bad, hasher()).is_err());
    }

    #[test]
    fn rejects_wrong_field_counts() {
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -", hasher()).is_err());
        assert!(parse_fen(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra",
            hasher()
        )
        .is_err());
    }

    #[test]
    fn rejects_overfull_ranks() {
        let bad = "rnbqkbnrr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert!(parse_fen(bad, hasher()).is_err());
    }
}
