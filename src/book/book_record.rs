//! Fixed-size Polyglot book record parsing.
//!
//! A record is 16 big-endian bytes: 8-byte position key, 2-byte packed
//! move, 2-byte popularity weight, 4-byte learn value. Record `i` of a
//! book buffer starts at byte offset `16 * i`.

use crate::errors::{ChessError, ChessResult};
use crate::utils::algebraic::{file_char, rank_char};

pub const BOOK_RECORD_SIZE: usize = 16;

// Reserved packed-move values for castling.
pub const RAW_CASTLE_KINGSIDE_WHITE: u16 = 0x0107;
pub const RAW_CASTLE_KINGSIDE_BLACK: u16 = 0x0f3f;
pub const RAW_CASTLE_QUEENSIDE_WHITE: u16 = 0x0100;
pub const RAW_CASTLE_QUEENSIDE_BLACK: u16 = 0x0f38;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookRecord {
    pub key: u64,
    pub raw_move: u16,
    pub weight: u16,
    pub learn: u32,
}

impl BookRecord {
    pub fn from_bytes(bytes: &[u8; BOOK_RECORD_SIZE]) -> Self {
        Self {
            key: u64::from_be_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
            ]),
            raw_move: u16::from_be_bytes([bytes[8], bytes[9]]),
            weight: u16::from_be_bytes([bytes[10], bytes[11]]),
            learn: u32::from_be_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]),
        }
    }

    // Packed-move bit fields, LSB first: destination file, destination
    // rank, origin file, origin rank, promotion piece.
    #[inline]
    pub fn to_file(&self) -> u8 {
        (self.raw_move & 0x07) as u8
    }

    #[inline]
    pub fn to_rank(&self) -> u8 {
        ((self.raw_move >> 3) & 0x07) as u8
    }

    #[inline]
    pub fn from_file(&self) -> u8 {
        ((self.raw_move >> 6) & 0x07) as u8
    }

    #[inline]
    pub fn from_rank(&self) -> u8 {
        ((self.raw_move >> 9) & 0x07) as u8
    }

    /// 0 = no promotion, 1..=4 = knight, bishop, rook, queen.
    #[inline]
    pub fn promotion_code(&self) -> u8 {
        ((self.raw_move >> 12) & 0x07) as u8
    }

    /// Long-notation rendering of the packed move, e.g. `e2-e4`,
    /// `a7-a8=Q`, `O-O`. Board-independent, so no capture marker.
    pub fn move_text(&self) -> String {
        match self.raw_move {
            RAW_CASTLE_KINGSIDE_WHITE | RAW_CASTLE_KINGSIDE_BLACK => return "O-O".to_owned(),
            RAW_CASTLE_QUEENSIDE_WHITE | RAW_CASTLE_QUEENSIDE_BLACK => return "O-O-O".to_owned(),
            _ => {}
        }

        let mut out = String::with_capacity(7);
        out.push(file_char(self.from_file()));
        out.push(rank_char(self.from_rank()));
        out.push('-');
        out.push(file_char(self.to_file()));
        out.push(rank_char(self.to_rank()));

        if let Some(letter) = match self.promotion_code() {
            1 => Some('N'),
            2 => Some('B'),
            3 => Some('R'),
            4 => Some('Q'),
            _ => None,
        } {
            out.push('=');
            out.push(letter);
        }

        out
    }
}

impl TryFrom<&[u8]> for BookRecord {
    type Error = ChessError;

    fn try_from(bytes: &[u8]) -> ChessResult<Self> {
        if bytes.len() < BOOK_RECORD_SIZE {
            return Err(ChessError::BookRecordTooShort(bytes.len()));
        }

        let mut fixed = [0u8; BOOK_RECORD_SIZE];
        fixed.copy_from_slice(&bytes[..BOOK_RECORD_SIZE]);
        Ok(Self::from_bytes(&fixed))
    }
}
