//! ASCII board rendering for tests and debugging.

use crate::game_state::chess_types::{piece_color_of, piece_kind_of, Color, EMPTY};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::square_index;

/// Render the board rank 8 first, with `.` for empty cells, followed by the
/// side to move and the canonical identity string.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');
        for file in 0..8u8 {
            let code = game_state.cells[square_index(file, rank) as usize];
            let cell = if code == EMPTY {
                '.'
            } else {
                let letter = piece_kind_of(code).map(|kind| kind.fen_letter()).unwrap_or('?');
                match piece_color_of(code) {
                    Some(Color::Black) => letter.to_ascii_lowercase(),
                    _ => letter,
                }
            };
            out.push(cell);
            out.push(' ');
        }
        out.push('\n');
    }

    out.push_str("  a b c d e f g h\n");
    out.push_str(&format!(
        "{} to move | {}\n",
        match game_state.side_to_move {
            Color::White => "white",
            Color::Black => "black",
        },
        game_state.id_string()
    ));

    out
}
