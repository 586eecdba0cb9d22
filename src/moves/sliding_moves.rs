//! Sliding-piece attack sources.
//!
//! Bishops, rooks and queens need occupancy-aware attacks. The generator takes
//! them from a [`SlidingAttacks`] implementation so a faster table-driven
//! source can be swapped in without touching move generation.

use crate::game_state::chess_types::{Bitboard, PieceKind, Square};
use crate::moves::leaper_table::{offset_square, Offset};

pub const BISHOP_DIRECTIONS: [Offset; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ROOK_DIRECTIONS: [Offset; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub trait SlidingAttacks: Send + Sync {
    /// Attacked squares for a slider on `square`, stopping at (and including)
    /// the first occupied square along each ray. Non-sliders yield `EMPTY`.
    fn attacks(&self, kind: PieceKind, square: Square, occupancy: Bitboard) -> Bitboard;
}

/// Contributes no sliding moves at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSlidingAttacks;

impl SlidingAttacks for NoSlidingAttacks {
    #[inline]
    fn attacks(&self, _kind: PieceKind, _square: Square, _occupancy: Bitboard) -> Bitboard {
        Bitboard::EMPTY
    }
}

/// Walks each ray one square at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct RayScanAttacks;

impl SlidingAttacks for RayScanAttacks {
    fn attacks(&self, kind: PieceKind, square: Square, occupancy: Bitboard) -> Bitboard {
        match kind {
            PieceKind::Bishop => trace_rays(square, &BISHOP_DIRECTIONS, occupancy),
            PieceKind::Rook => trace_rays(square, &ROOK_DIRECTIONS, occupancy),
            PieceKind::Queen => {
                trace_rays(square, &BISHOP_DIRECTIONS, occupancy)
                    | trace_rays(square, &ROOK_DIRECTIONS, occupancy)
            }
            PieceKind::Pawn | PieceKind::Knight | PieceKind::King => Bitboard::EMPTY,
        }
    }
}

fn trace_rays(square: Square, directions: &[Offset], occupancy: Bitboard) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;

    for &(d_rank, d_file) in directions {
        let mut current = square;
        while let Some(next) = offset_square(current, d_rank, d_file) {
            attacks = attacks.with(next);
            if occupancy.contains(next) {
                break;
            }
            current = next;
        }
    }

    attacks
}
