//! King pseudo-attack table.
//!
//! Same construction as the knight table, with the eight unit steps.

use crate::game_state::chess_types::Bitboard;
use crate::moves::leaper_table::{build_leaper_table, Offset};

pub const KING_OFFSETS: [Offset; 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

#[inline]
pub const fn generate_king_attacks() -> [Bitboard; 64] {
    build_leaper_table(&KING_OFFSETS)
}
