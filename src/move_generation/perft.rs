//! Pseudo-legal perft: counts move-tree leaves without any legality filter.
//!
//! Numbers match standard perft tables only while no king can be left in
//! check within the searched depth (for the start position, depth 2 and below).

use crate::errors::ChessResult;
use crate::game_state::chess_types::Position;
use crate::move_generation::move_apply::apply_move;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub double_pawn_pushes: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.double_pawn_pushes += rhs.double_pawn_pushes;
        self.promotions += rhs.promotions;
    }
}

/// Leaf statistics `depth` plies below `position`. Promotions are expanded to
/// a single queen move.
pub fn perft<G: MoveGenerator + ?Sized>(
    generator: &G,
    position: &Position,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let moves = generator.generate_moves(position);
    let mut total = PerftCounts::default();

    for mv in &moves {
        if depth == 1 {
            total.nodes += 1;
            total.captures += usize::from(mv.is_capture());
            total.double_pawn_pushes += usize::from(mv.is_double_pawn_push());
            total.promotions += usize::from(mv.is_promotion());
            continue;
        }

        let next = apply_move(position, mv, None)?;
        total.merge(perft(generator, &next, depth - 1)?);
    }

    Ok(total)
}
