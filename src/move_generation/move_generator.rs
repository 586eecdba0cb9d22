//! Pseudo-legal move generation front end.
//!
//! `PseudoMoveGenerator` owns its leaper tables behind an `Arc`, so cloning a
//! generator (one per worker thread, say) shares the tables instead of
//! rebuilding them. Moves respect piece movement and blocking but are not
//! filtered for king safety.

use std::sync::Arc;

use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_moves_leaper::generate_leaper_moves;
use crate::move_generation::pseudo_moves_pawn::generate_pawn_moves;
use crate::move_generation::pseudo_moves_slider::generate_slider_moves;
use crate::moves::attack_tables::AttackTables;
use crate::moves::move_descriptions::Move;
use crate::moves::sliding_moves::{NoSlidingAttacks, SlidingAttacks};

pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, position: &Position) -> Vec<Move>;
}

#[derive(Debug, Clone)]
pub struct PseudoMoveGenerator<S = NoSlidingAttacks> {
    tables: Arc<AttackTables>,
    sliders: S,
}

impl PseudoMoveGenerator<NoSlidingAttacks> {
    /// Pawns, knights and kings only.
    pub fn new() -> Self {
        Self::with_sliding_attacks(NoSlidingAttacks)
    }
}

impl Default for PseudoMoveGenerator<NoSlidingAttacks> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SlidingAttacks> PseudoMoveGenerator<S> {
    pub fn with_sliding_attacks(sliders: S) -> Self {
        Self {
            tables: Arc::new(AttackTables::new()),
            sliders,
        }
    }

    #[inline]
    pub fn tables(&self) -> &AttackTables {
        &self.tables
    }

    /// All moves for the side to move: pawns, knights, bishops, rooks,
    /// queens, king, each group ordered by origin then destination.
    pub fn generate_moves_into(&self, position: &Position, out: &mut Vec<Move>) {
        for kind in PieceKind::ALL {
            self.generate_piece_moves(position, kind, out);
        }
    }

    pub fn generate_piece_moves(&self, position: &Position, kind: PieceKind, out: &mut Vec<Move>) {
        match kind {
            PieceKind::Pawn => generate_pawn_moves(position, out),
            PieceKind::Knight | PieceKind::King => {
                generate_leaper_moves(position, &self.tables, kind, out)
            }
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                generate_slider_moves(position, &self.sliders, kind, out)
            }
        }
    }

    /// True when `square` holds a piece belonging to the side to move.
    #[inline]
    pub fn can_move_from(&self, position: &Position, square: Square) -> bool {
        square < 64 && position.occupancy_of(position.side_to_move).contains(square)
    }

    /// Generated moves starting on `from`. Empty unless `from` holds a piece of
    /// the side to move.
    pub fn moves_from(&self, position: &Position, from: Square) -> Vec<Move> {
        if !self.can_move_from(position, from) {
            return Vec::new();
        }
        let Some(kind) = position.kind_at_for_color(position.side_to_move, from) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        self.generate_piece_moves(position, kind, &mut out);
        out.retain(|mv| mv.from == from);
        out
    }

    /// Destination set of the piece on `from`.
    pub fn destinations_from(&self, position: &Position, from: Square) -> Bitboard {
        self.moves_from(position, from)
            .into_iter()
            .map(|mv| mv.to)
            .collect()
    }

    /// The generated move `from -> to`, if there is one.
    pub fn find_move(&self, position: &Position, from: Square, to: Square) -> Option<Move> {
        self.moves_from(position, from)
            .into_iter()
            .find(|mv| mv.to == to)
    }

    /// Ownership plus destination test for a host-proposed move.
    #[inline]
    pub fn is_pseudo_legal(&self, position: &Position, from: Square, to: Square) -> bool {
        to < 64 && self.find_move(position, from, to).is_some()
    }
}

impl<S: SlidingAttacks> MoveGenerator for PseudoMoveGenerator<S> {
    fn generate_moves(&self, position: &Position) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        self.generate_moves_into(position, &mut out);
        log::trace!(
            "{} pseudo-legal moves for {:?}",
            out.len(),
            position.side_to_move
        );
        out
    }
}
