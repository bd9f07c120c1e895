//! Core board-cell and piece encodings.
//!
//! Each occupied board cell stores a packed piece code: a 3-bit piece type
//! OR'd with a 1-bit color flag. `0` marks an empty cell. Squares are
//! indexed `(file << 3) | rank`, so a1 = 0, a8 = 7, e1 = 32, h8 = 63 and
//! a delta of 8 moves one file while a delta of 1 moves one rank.

/// Board square index (`0..=63`), `(file << 3) | rank` layout.
pub type Square = u8;

/// Packed piece code as stored in a board cell.
pub type PieceCode = u8;

/// Code for an empty cell.
pub const EMPTY: PieceCode = 0;

/// Mask extracting the 3-bit piece type from a packed piece code.
pub const PIECE_MASK: u8 = 0x07;

/// Mask extracting the color flag from a packed piece code.
pub const COLOR_MASK: u8 = 0x08;

/// Side to move / piece color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Color bits as stored in a packed piece code.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => COLOR_MASK,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece type. Discriminants are the 3-bit codes stored in board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    King = 1,
    Queen = 2,
    Rook = 3,
    Bishop = 4,
    Knight = 5,
    Pawn = 6,
}

impl PieceKind {
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::King),
            2 => Some(PieceKind::Queen),
            3 => Some(PieceKind::Rook),
            4 => Some(PieceKind::Bishop),
            5 => Some(PieceKind::Knight),
            6 => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    /// Uppercase FEN letter for this piece type.
    #[inline]
    pub const fn fen_letter(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
        }
    }
}

/// Castling classification carried on a move. A castling move is encoded as
/// the king's move to its post-castling square; the rook relocation is
/// implied by this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingKind {
    None,
    KingSide,
    QueenSide,
}

/// Pack a color and a piece type into a board-cell code.
#[inline]
pub const fn piece_code(color: Color, kind: PieceKind) -> PieceCode {
    kind.code() | color.code()
}

/// Piece type of a packed code, `None` for the empty cell.
#[inline]
pub const fn piece_kind_of(code: PieceCode) -> Option<PieceKind> {
    PieceKind::from_code(code & PIECE_MASK)
}

/// Color of a packed code, `None` for the empty cell.
#[inline]
pub const fn piece_color_of(code: PieceCode) -> Option<Color> {
    if code == EMPTY {
        None
    } else if (code & COLOR_MASK) != 0 {
        Some(Color::Black)
    } else {
        Some(Color::White)
    }
}

/// True when the cell code holds a piece of the opposite color.
#[inline]
pub const fn is_enemy_piece(code: PieceCode, color: Color) -> bool {
    code != EMPTY && (code & COLOR_MASK) != color.code()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_codes_round_trip_through_masks() {
        let black_knight = piece_code(Color::Black, PieceKind::Knight);
        assert_eq!(black_knight, 0x0D);
        assert_eq!(piece_kind_of(black_knight), Some(PieceKind::Knight));
        assert_eq!(piece_color_of(black_knight), Some(Color::Black));

        let white_pawn = piece_code(Color::White, PieceKind::Pawn);
        assert_eq!(white_pawn, 0x06);
        assert_eq!(piece_color_of(white_pawn), Some(Color::White));
    }

    #[test]
    fn empty_cell_has_no_kind_or_color() {
        assert_eq!(piece_kind_of(EMPTY), None);
        assert_eq!(piece_color_of(EMPTY), None);
        assert!(!is_enemy_piece(EMPTY, Color::White));
    }

    #[test]
    fn enemy_detection_respects_color_flag() {
        let black_queen = piece_code(Color::Black, PieceKind::Queen);
        assert!(is_enemy_piece(black_queen, Color::White));
        assert!(!is_enemy_piece(black_queen, Color::Black));
    }
}
