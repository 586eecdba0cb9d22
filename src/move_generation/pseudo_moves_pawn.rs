//! Set-wise pawn move generation.
//!
//! Whole pawn bitboards are shifted at once. Diagonal captures mask out the
//! edge file a pawn would wrap from before shifting, so an h-file pawn can
//! never appear to capture on the a-file of the next rank. En-passant is not
//! generated.

use crate::game_state::chess_rules::{pawn_start_rank, promotion_rank};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{Move, FLAG_CAPTURE, FLAG_DOUBLE_PAWN_PUSH, FLAG_PROMOTION};

pub fn generate_pawn_moves(position: &Position, out: &mut Vec<Move>) {
    let side = position.side_to_move;
    let pawns = position.pieces(side, PieceKind::Pawn);
    if pawns.is_empty() {
        return;
    }

    let empty = position.empty_squares();
    let enemy_occ = position.occupancy_of(side.opposite());
    let first = out.len();

    let single = advance(pawns, side, 8) & empty;
    push_pawn_moves(position, single, 8, 0, out);

    let start_rank = Bitboard::RANK_1.shl(8 * u32::from(pawn_start_rank(side)));
    let double = advance(advance(pawns & start_rank, side, 8) & empty, side, 8) & empty;
    push_pawn_moves(position, double, 16, FLAG_DOUBLE_PAWN_PUSH, out);

    // (step toward the a-file, step toward the h-file)
    let (a_step, h_step) = match side {
        Color::White => (7, 9),
        Color::Black => (9, 7),
    };
    let toward_a = advance(pawns & !Bitboard::FILE_A, side, a_step) & enemy_occ;
    push_pawn_moves(position, toward_a, a_step as u8, FLAG_CAPTURE, out);
    let toward_h = advance(pawns & !Bitboard::FILE_H, side, h_step) & enemy_occ;
    push_pawn_moves(position, toward_h, h_step as u8, FLAG_CAPTURE, out);

    out[first..].sort_unstable_by_key(|mv| (mv.from, mv.to));
}

/// Shift `pawns` `distance` squares toward `color`'s promotion rank.
#[inline]
fn advance(pawns: Bitboard, color: Color, distance: u32) -> Bitboard {
    match color {
        Color::White => pawns.shl(distance),
        Color::Black => pawns.shr(distance),
    }
}

fn push_pawn_moves(
    position: &Position,
    targets: Bitboard,
    distance: u8,
    flags: u8,
    out: &mut Vec<Move>,
) {
    let side = position.side_to_move;
    let last_rank = promotion_rank(side);

    for to in targets.squares() {
        let from = match side {
            Color::White => to - distance,
            Color::Black => to + distance,
        };
        let captured = if flags & FLAG_CAPTURE != 0 {
            position.kind_at_for_color(side.opposite(), to)
        } else {
            None
        };
        let flags = if rank_of(to) == last_rank {
            flags | FLAG_PROMOTION
        } else {
            flags
        };
        out.push(Move::new(from, to, PieceKind::Pawn, captured, flags));
    }
}
