//! Applying a generated move to a position.

use crate::errors::{ChessCoreError, ChessResult};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// Return the position after `mv`, with the other side to move.
///
/// The moving piece must belong to the side to move and match `mv.piece`.
/// An enemy piece on the destination is captured; a friendly one is an error.
/// Only pawns promote. The pawn becomes `promote_to`, or a queen when the
/// caller passes `None`.
pub fn apply_move(
    position: &Position,
    mv: &Move,
    promote_to: Option<PieceKind>,
) -> ChessResult<Position> {
    let side = position.side_to_move;
    let moving = position
        .piece_at(mv.from)
        .ok_or(ChessCoreError::NoPieceOnSquare(mv.from))?;

    if moving.color != side {
        return Err(ChessCoreError::WrongSideToMove(mv.from));
    }
    if moving.kind != mv.piece {
        return Err(ChessCoreError::PieceMismatch {
            square: mv.from,
            expected: mv.piece,
            found: moving.kind,
        });
    }

    if position.occupancy_of(side).contains(mv.to) {
        return Err(ChessCoreError::OwnPieceOnDestination(mv.to));
    }

    let placed = if mv.is_promotion() {
        if moving.kind != PieceKind::Pawn {
            return Err(ChessCoreError::PieceMismatch {
                square: mv.from,
                expected: PieceKind::Pawn,
                found: moving.kind,
            });
        }
        match promote_to.unwrap_or(PieceKind::Queen) {
            kind @ (PieceKind::Pawn | PieceKind::King) => {
                return Err(ChessCoreError::InvalidPromotion(kind))
            }
            kind => kind,
        }
    } else {
        moving.kind
    };

    let mut next = *position;
    next.remove_piece(mv.from);
    next.put_piece(mv.to, Piece::new(side, placed))?;
    next.side_to_move = side.opposite();

    debug_assert!(next.validate().is_ok());
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::apply_move;
    use crate::errors::ChessCoreError;
    use crate::game_state::chess_types::*;
    use crate::move_generation::move_generator::PseudoMoveGenerator;
    use crate::moves::move_descriptions::{Move, FLAG_CAPTURE, FLAG_PROMOTION};
    use crate::utils::placement::decode_placement_lenient;

    #[test]
    fn quiet_move_updates_boards_and_turn() {
        let generator = PseudoMoveGenerator::new();
        let position = Position::new_game();
        let mv = generator.find_move(&position, 12, 28).expect("e2e4 is generated");
        let next = apply_move(&position, &mv, None).expect("e2e4 applies");

        assert_eq!(next.side_to_move, Color::Black);
        assert!(next.empty_squares().contains(12));
        assert_eq!(next.piece_at(28), Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert!(next.validate().is_ok());
        assert_eq!(position, Position::new_game());
    }

    #[test]
    fn capture_removes_the_enemy_piece() {
        let position = decode_placement_lenient("8/8/8/3q4/4P3/8/8/8");
        let mv = Move::new(28, 35, PieceKind::Pawn, Some(PieceKind::Queen), FLAG_CAPTURE);
        let next = apply_move(&position, &mv, None).expect("capture applies");
        assert!(next.black_pieces().is_empty());
        assert_eq!(next.white_pieces(), Bitboard::from_square(35));
    }

    #[test]
    fn promotion_defaults_to_queen_and_honors_choice() {
        let position = decode_placement_lenient("8/P7/8/8/8/8/8/8");
        let mv = Move::new(48, 56, PieceKind::Pawn, None, FLAG_PROMOTION);

        let queen = apply_move(&position, &mv, None).expect("promotion applies");
        assert_eq!(queen.piece_at(56), Some(Piece::new(Color::White, PieceKind::Queen)));

        let knight = apply_move(&position, &mv, Some(PieceKind::Knight)).expect("underpromotion");
        assert_eq!(knight.piece_at(56), Some(Piece::new(Color::White, PieceKind::Knight)));

        assert_eq!(
            apply_move(&position, &mv, Some(PieceKind::King)),
            Err(ChessCoreError::InvalidPromotion(PieceKind::King))
        );
    }

    #[test]
    fn rejects_moves_the_side_to_move_cannot_make() {
        let position = Position::new_game();
        let empty_origin = Move::new(28, 36, PieceKind::Pawn, None, 0);
        assert_eq!(
            apply_move(&position, &empty_origin, None),
            Err(ChessCoreError::NoPieceOnSquare(28))
        );

        let black_pawn = Move::new(52, 44, PieceKind::Pawn, None, 0);
        assert_eq!(
            apply_move(&position, &black_pawn, None),
            Err(ChessCoreError::WrongSideToMove(52))
        );

        let wrong_kind = Move::new(1, 18, PieceKind::Bishop, None, 0);
        assert!(matches!(
            apply_move(&position, &wrong_kind, None),
            Err(ChessCoreError::PieceMismatch { square: 1, .. })
        ));
    }

    #[test]
    fn rejects_hand_built_moves_onto_friendly_pieces() {
        let position = Position::new_game();
        let knight_onto_pawn = Move::new(1, 11, PieceKind::Knight, None, 0);
        assert_eq!(
            apply_move(&position, &knight_onto_pawn, None),
            Err(ChessCoreError::OwnPieceOnDestination(11))
        );
    }

    #[test]
    fn only_pawns_promote() {
        let position = decode_placement_lenient("8/N7/8/8/8/8/8/8");
        let mv = Move::new(48, 58, PieceKind::Knight, None, FLAG_PROMOTION);
        assert_eq!(
            apply_move(&position, &mv, Some(PieceKind::Queen)),
            Err(ChessCoreError::PieceMismatch {
                square: 48,
                expected: PieceKind::Pawn,
                found: PieceKind::Knight,
            })
        );
    }

    #[test]
    fn off_board_destination_is_rejected() {
        let position = Position::new_game();
        let mv = Move::new(1, 70, PieceKind::Knight, None, 0);
        assert!(matches!(
            apply_move(&position, &mv, None),
            Err(ChessCoreError::InvalidSquare(_))
        ));
    }
}
