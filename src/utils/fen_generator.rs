//! GameState-to-FEN rendering.
//!
//! `generate_id_string` produces the canonical position string used for
//! hashing: board field, side to move, castling letters, and en-passant
//! target, explicitly omitting the clocks so transposed move orders
//! reaching the same position collide to the same key. `generate_fen`
//! appends the clocks for a full FEN string.

use crate::game_state::chess_types::{piece_color_of, piece_kind_of, Color, EMPTY};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::{file_char, square_index};

/// Canonical position-identity string: `<board> <side> <castling> <ep>`.
pub fn generate_id_string(game_state: &GameState) -> String {
    let mut out = generate_board_field(game_state);

    out.push(' ');
    out.push(match game_state.side_to_move {
        Color::White => 'w',
        Color::Black => 'b',
    });

    out.push(' ');
    out.push_str(&generate_castling_field(game_state));

    out.push(' ');
    out.push_str(&generate_en_passant_field(game_state));

    out
}

/// Full FEN string: canonical identity plus halfmove clock and move number.
pub fn generate_fen(game_state: &GameState) -> String {
    format!(
        "{} {} {}",
        generate_id_string(game_state),
        game_state.halfmove_clock,
        game_state.move_number
    )
}

fn generate_board_field(game_state: &GameState) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            let code = game_state.cells[square_index(file, rank) as usize];
            if code == EMPTY {
                empty_count += 1;
                continue;
            }

            if empty_count > 0 {
                out.push(char::from(b'0' + empty_count));
                empty_count = 0;
            }

            let letter = piece_kind_of(code).map(|kind| kind.fen_letter()).unwrap_or('?');
            match piece_color_of(code) {
                Some(Color::Black) => out.push(letter.to_ascii_lowercase()),
                _ => out.push(letter),
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(game_state: &GameState) -> String {
    let mut out = String::new();

    if game_state.white.can_castle_kingside {
        out.push('K');
    }
    if game_state.white.can_castle_queenside {
        out.push('Q');
    }
    if game_state.black.can_castle_kingside {
        out.push('k');
    }
    if game_state.black.can_castle_queenside {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

fn generate_en_passant_field(game_state: &GameState) -> String {
    if let Some(file) = game_state.white.en_passant_file {
        return format!("{}3", file_char(file));
    }
    if let Some(file) = game_state.black.en_passant_file {
        return format!("{}6", file_char(file));
    }
    "-".to_owned()
}
