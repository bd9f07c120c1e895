//! Per-side castling and en-passant bookkeeping.

/// Castling availability and en-passant vulnerability for one side.
///
/// `en_passant_file` is the file of this side's pawn that just advanced two
/// squares and can be captured en passant on the following ply. At most one
/// side's file is set at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideState {
    pub can_castle_kingside: bool,
    pub can_castle_queenside: bool,
    pub en_passant_file: Option<u8>,
}

impl SideState {
    #[inline]
    pub const fn new() -> Self {
        Self {
            can_castle_kingside: true,
            can_castle_queenside: true,
            en_passant_file: None,
        }
    }
}

impl Default for SideState {
    fn default() -> Self {
        Self::new()
    }
}
