//! Knight and king moves from the precomputed tables.

use crate::game_state::chess_types::*;
use crate::move_generation::move_shared::{available_squares, push_targets};
use crate::moves::attack_tables::AttackTables;
use crate::moves::move_descriptions::Move;

/// Moves for every `kind` piece of the side to move. `kind` must be a leaper.
pub fn generate_leaper_moves(
    position: &Position,
    tables: &AttackTables,
    kind: PieceKind,
    out: &mut Vec<Move>,
) {
    let available = available_squares(position);

    for from in position.pieces(position.side_to_move, kind).squares() {
        let Some(targets) = tables.leaper(kind, from) else {
            return;
        };
        push_targets(position, from, kind, targets & available, out);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_leaper_moves;
    use crate::game_state::chess_types::*;
    use crate::moves::attack_tables::AttackTables;
    use crate::utils::placement::decode_placement_lenient;

    #[test]
    fn starting_knights_have_four_moves() {
        let position = Position::new_game();
        let mut out = Vec::new();
        generate_leaper_moves(&position, &AttackTables::new(), PieceKind::Knight, &mut out);
        let pairs: Vec<(u8, u8)> = out.iter().map(|mv| (mv.from, mv.to)).collect();
        assert_eq!(pairs, vec![(1, 16), (1, 18), (6, 21), (6, 23)]);
    }

    #[test]
    fn starting_king_is_boxed_in() {
        let position = Position::new_game();
        let mut out = Vec::new();
        generate_leaper_moves(&position, &AttackTables::new(), PieceKind::King, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn knight_captures_enemy_but_not_own_pieces() {
        // White knight d4, black rook e6, white pawn c6
        let position = decode_placement_lenient("8/8/2P1r3/8/3N4/8/8/8");
        let mut out = Vec::new();
        generate_leaper_moves(&position, &AttackTables::new(), PieceKind::Knight, &mut out);
        assert_eq!(out.len(), 7);
        assert!(out.iter().all(|mv| mv.to != 42));
        let capture = out.iter().find(|mv| mv.to == 44).expect("e6 capture");
        assert!(capture.is_capture());
        assert_eq!(capture.captured, Some(PieceKind::Rook));
        assert_eq!(out.iter().filter(|mv| mv.is_capture()).count(), 1);
    }

    #[test]
    fn black_king_in_the_corner() {
        let mut position = decode_placement_lenient("7k/6P1/8/8/8/8/8/8");
        position.side_to_move = Color::Black;
        let mut out = Vec::new();
        generate_leaper_moves(&position, &AttackTables::new(), PieceKind::King, &mut out);
        assert_eq!(out.len(), 3);
        assert_eq!(out.iter().filter(|mv| mv.is_capture()).count(), 1);
    }
}
