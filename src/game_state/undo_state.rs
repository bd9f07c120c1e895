use crate::game_state::chess_types::Color;
use crate::game_state::side_state::SideState;

/// Snapshot of position bookkeeping taken before a move is applied and
/// restored verbatim when the move is undone. Board-cell changes are
/// reversed separately from the move's own fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub side_to_move: Color,
    pub halfmove_clock: u16,
    pub move_number: u16,
    pub white: SideState,
    pub black: SideState,
}
