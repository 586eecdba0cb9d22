use crate::game_state::chess_types::*;
use crate::move_generation::move_shared::{available_squares, push_targets};
use crate::moves::move_descriptions::Move;
use crate::moves::sliding_moves::SlidingAttacks;

/// Moves for every `kind` slider of the side to move, as reported by `sliders`.
pub fn generate_slider_moves<S: SlidingAttacks + ?Sized>(
    position: &Position,
    sliders: &S,
    kind: PieceKind,
    out: &mut Vec<Move>,
) {
    let available = available_squares(position);
    let occupancy = position.occupancy();

    for from in position.pieces(position.side_to_move, kind).squares() {
        let targets = sliders.attacks(kind, from, occupancy) & available;
        push_targets(position, from, kind, targets, out);
    }
}
