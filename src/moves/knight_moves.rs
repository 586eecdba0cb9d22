//! Knight pseudo-attack table.

use crate::game_state::chess_types::Bitboard;
use crate::moves::leaper_table::{build_leaper_table, Offset};

pub const KNIGHT_OFFSETS: [Offset; 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

#[inline]
pub const fn generate_knight_attacks() -> [Bitboard; 64] {
    build_leaper_table(&KNIGHT_OFFSETS)
}
