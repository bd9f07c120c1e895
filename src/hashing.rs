//! Position-hashing collaborator contract.
//!
//! The board core never computes position keys itself: it hands the
//! canonical position string (board, side to move, castling rights,
//! en-passant target) to an injected [`PositionHasher`]. For lookups against
//! real Polyglot `.bin` books the host must supply a hasher implementing the
//! Polyglot Zobrist convention (same piece/square/castling/en-passant/side
//! key tables used by book generators), otherwise every lookup silently
//! misses.

/// Maps a canonical position string to a 64-bit position key.
pub trait PositionHasher: Send + Sync {
    fn hash(&self, canonical: &str) -> u64;
}

/// Deterministic fallback hasher folding the canonical string through
/// splitmix64.
///
/// Suitable for tests and for books generated with this same hasher. It does
/// *not* match the Polyglot key convention; see the trait docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldedSplitmixHasher {
    seed: u64,
}

impl FoldedSplitmixHasher {
    #[inline]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for FoldedSplitmixHasher {
    fn default() -> Self {
        Self::new(0x9E37_79B9_7F4A_7C15)
    }
}

impl PositionHasher for FoldedSplitmixHasher {
    fn hash(&self, canonical: &str) -> u64 {
        let mut state = self.seed;
        for &byte in canonical.as_bytes() {
            state = splitmix64(state ^ u64::from(byte));
        }
        splitmix64(state)
    }
}

#[inline]
fn splitmix64(input: u64) -> u64 {
    let mut z = input.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::{FoldedSplitmixHasher, PositionHasher};

    #[test]
    fn hashing_is_deterministic() {
        let hasher = FoldedSplitmixHasher::default();
        let canonical = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -";
        assert_eq!(hasher.hash(canonical), hasher.hash(canonical));
    }

    #[test]
    fn different_positions_hash_differently() {
        let hasher = FoldedSplitmixHasher::default();
        let a = hasher.hash("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -");
        let b = hasher.hash("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq -");
        assert_ne!(a, b);
    }

    #[test]
    fn usable_as_trait_object() {
        let hasher: &dyn PositionHasher = &FoldedSplitmixHasher::new(7);
        assert_eq!(hasher.hash("x"), hasher.hash("x"));
    }
}
