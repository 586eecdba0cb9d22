//! Shared offset-and-check arithmetic for table construction.
//!
//! Every leaper table and every ray walk steps through [`offset_square`], so a
//! target is only ever produced after both its rank and its file have been
//! bounds-checked. Raw index arithmetic (`square + 17` and friends) is never
//! used to derive a destination.

use crate::game_state::chess_types::{Bitboard, Square};

/// A `(d_rank, d_file)` step.
pub type Offset = (i8, i8);

/// Apply `(d_rank, d_file)` to `square`, or `None` if the target leaves the board.
#[inline]
pub const fn offset_square(square: Square, d_rank: i8, d_file: i8) -> Option<Square> {
    let rank = (square / 8) as i8 + d_rank;
    let file = (square % 8) as i8 + d_file;
    if rank < 0 || rank > 7 || file < 0 || file > 7 {
        return None;
    }
    Some((rank * 8 + file) as Square)
}

/// Targets reachable from `square` by one step of any of `offsets`.
pub const fn leaper_targets(square: Square, offsets: &[Offset]) -> Bitboard {
    let mut bits = 0u64;
    let mut i = 0;
    while i < offsets.len() {
        let (d_rank, d_file) = offsets[i];
        if let Some(target) = offset_square(square, d_rank, d_file) {
            bits |= 1u64 << target;
        }
        i += 1;
    }
    Bitboard(bits)
}

/// One entry per origin square.
pub const fn build_leaper_table(offsets: &[Offset]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0usize;

    while sq < 64 {
        table[sq] = leaper_targets(sq as Square, offsets);
        sq += 1;
    }

    table
}
