use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{Move, FLAG_CAPTURE};

/// Push one move per target square, flagging captures of enemy pieces.
pub fn push_targets(
    position: &Position,
    from: Square,
    piece: PieceKind,
    targets: Bitboard,
    out: &mut Vec<Move>,
) {
    let enemy = position.side_to_move.opposite();
    for to in targets.squares() {
        let captured = position.kind_at_for_color(enemy, to);
        let flags = if captured.is_some() { FLAG_CAPTURE } else { 0 };
        out.push(Move::new(from, to, piece, captured, flags));
    }
}

/// Squares a piece of the side to move may land on: anything not holding a
/// piece of its own color.
#[inline]
pub fn available_squares(position: &Position) -> Bitboard {
    !position.occupancy_of(position.side_to_move)
}
