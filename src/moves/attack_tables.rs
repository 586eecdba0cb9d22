//! Per-generator leaper attack tables.
//!
//! Built once when a generator is constructed and never written again, so the
//! tables can be shared by reference between threads without locking.

use crate::game_state::chess_types::{Bitboard, PieceKind, Square};
use crate::moves::king_moves::generate_king_attacks;
use crate::moves::knight_moves::generate_knight_attacks;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackTables {
    knight: [Bitboard; 64],
    king: [Bitboard; 64],
}

impl AttackTables {
    pub fn new() -> Self {
        let tables = Self {
            knight: generate_knight_attacks(),
            king: generate_king_attacks(),
        };
        log::debug!("leaper attack tables built");
        tables
    }

    #[inline]
    pub fn knight(&self, square: Square) -> Bitboard {
        self.knight[usize::from(square)]
    }

    #[inline]
    pub fn king(&self, square: Square) -> Bitboard {
        self.king[usize::from(square)]
    }

    /// Table lookup for leaper kinds; `None` for pawns and sliders.
    #[inline]
    pub fn leaper(&self, kind: PieceKind, square: Square) -> Option<Bitboard> {
        match kind {
            PieceKind::Knight => Some(self.knight(square)),
            PieceKind::King => Some(self.king(square)),
            PieceKind::Pawn | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => None,
        }
    }
}

impl Default for AttackTables {
    fn default() -> Self {
        Self::new()
    }
}
