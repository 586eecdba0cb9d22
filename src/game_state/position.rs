//! Bitboard position model.
//!
//! `Position` stores one bitboard per (color, kind) pair plus the four derived
//! aggregates (per-color occupancy, total occupancy, empty squares) and the
//! side to move. It is a flat `Copy` value; undo is a matter of keeping the
//! previous copy around.

use std::fmt;

use crate::errors::{ChessCoreError, ChessResult};
use crate::game_state::chess_rules::STARTING_PLACEMENT;
use crate::game_state::chess_types::*;
use crate::utils::placement::{
    decode_placement, decode_placement_lenient, encode_placement, PlacementMode,
};
use crate::utils::render_game_state::render_position;
use crate::utils::state_string::{decode_state_string, encode_state_string};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    // [color][piece_kind]
    pieces: [[Bitboard; 6]; 2],

    // Aggregates, recomputed by every mutator.
    occupancy_by_color: [Bitboard; 2],
    occupancy_all: Bitboard,
    empty: Bitboard,

    pub side_to_move: Color,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupancy_by_color: [Bitboard::EMPTY; 2],
            occupancy_all: Bitboard::EMPTY,
            empty: Bitboard::FULL,
            side_to_move: Color::White,
        }
    }
}

impl Position {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position, White to move.
    pub fn new_game() -> Self {
        decode_placement_lenient(STARTING_PLACEMENT)
    }

    #[inline]
    pub fn from_placement(placement: &str, mode: PlacementMode) -> ChessResult<Self> {
        decode_placement(placement, mode)
    }

    #[inline]
    pub fn from_state_string(state: &str) -> ChessResult<Self> {
        decode_state_string(state)
    }

    #[inline]
    pub fn placement(&self) -> String {
        encode_placement(self)
    }

    #[inline]
    pub fn state_string(&self) -> String {
        encode_state_string(self)
    }

    /// Remove every piece and hand the move back to White.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub fn pieces(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.pieces[color.index()][kind.index()]
    }

    #[inline]
    pub fn occupancy_of(&self, color: Color) -> Bitboard {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub fn white_pieces(&self) -> Bitboard {
        self.occupancy_of(Color::White)
    }

    #[inline]
    pub fn black_pieces(&self) -> Bitboard {
        self.occupancy_of(Color::Black)
    }

    #[inline]
    pub fn occupancy(&self) -> Bitboard {
        self.occupancy_all
    }

    #[inline]
    pub fn empty_squares(&self) -> Bitboard {
        self.empty
    }

    /// Place `piece` on `square`, evicting whatever stood there.
    pub fn put_piece(&mut self, square: Square, piece: Piece) -> ChessResult<()> {
        if square >= 64 {
            return Err(ChessCoreError::InvalidSquare(square.to_string()));
        }
        self.clear_square(square);
        let board = &mut self.pieces[piece.color.index()][piece.kind.index()];
        *board = board.with(square);
        self.recalc_occupancy();
        Ok(())
    }

    /// Empty `square`, returning the piece that was there.
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        let removed = self.piece_at(square);
        if removed.is_some() {
            self.clear_square(square);
            self.recalc_occupancy();
        }
        removed
    }

    /// Occupant of `square`. Indices of 64 and above are never occupied.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if square >= 64 || !self.occupancy_all.contains(square) {
            return None;
        }
        for color in Color::ALL {
            if let Some(kind) = self.kind_at_for_color(color, square) {
                return Some(Piece::new(color, kind));
            }
        }
        None
    }

    pub fn kind_at_for_color(&self, color: Color, square: Square) -> Option<PieceKind> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| self.pieces(color, *kind).contains(square))
    }

    /// Owner of the piece at board coordinates `(x, y)` = (file, rank).
    /// Coordinates off the board and empty squares yield `None`.
    pub fn owner_at(&self, x: i32, y: i32) -> Option<Color> {
        if !(0..8).contains(&x) || !(0..8).contains(&y) {
            return None;
        }
        self.piece_at(square_at(x as u8, y as u8))
            .map(|piece| piece.color)
    }

    /// Legacy single-byte tag of the occupant, `0` when the square is empty.
    #[inline]
    pub fn tag_at(&self, square: Square) -> u8 {
        self.piece_at(square).map_or(0, Piece::to_tag)
    }

    /// Check the no-double-occupancy and aggregate-consistency invariants.
    pub fn validate(&self) -> ChessResult<()> {
        let mut seen = Bitboard::EMPTY;
        for color in Color::ALL {
            let mut union = Bitboard::EMPTY;
            for kind in PieceKind::ALL {
                let board = self.pieces(color, kind);
                if !(seen & board).is_empty() {
                    return Err(ChessCoreError::CorruptPosition(format!(
                        "{color:?} {kind:?} overlaps another piece board"
                    )));
                }
                seen |= board;
                union |= board;
            }
            if union != self.occupancy_of(color) {
                return Err(ChessCoreError::CorruptPosition(format!(
                    "{color:?} aggregate does not match its piece boards"
                )));
            }
        }

        if self.occupancy_all != (self.white_pieces() | self.black_pieces()) {
            return Err(ChessCoreError::CorruptPosition(
                "occupancy is not the union of both colors".to_owned(),
            ));
        }
        if (self.occupancy_all | self.empty) != Bitboard::FULL
            || !(self.occupancy_all & self.empty).is_empty()
        {
            return Err(ChessCoreError::CorruptPosition(
                "occupancy and empty squares do not partition the board".to_owned(),
            ));
        }
        Ok(())
    }

    fn clear_square(&mut self, square: Square) {
        for color_boards in self.pieces.iter_mut() {
            for board in color_boards.iter_mut() {
                *board = board.without(square);
            }
        }
    }

    fn recalc_occupancy(&mut self) {
        for color in Color::ALL {
            self.occupancy_by_color[color.index()] = self.pieces[color.index()]
                .iter()
                .copied()
                .fold(Bitboard::EMPTY, |acc, bb| acc | bb);
        }
        self.occupancy_all = self.white_pieces() | self.black_pieces();
        self.empty = !self.occupancy_all;
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_position(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_has_thirty_two_pieces_and_valid_aggregates() {
        let position = Position::new_game();
        assert_eq!(position.occupancy().count(), 32);
        assert_eq!(position.empty_squares().count(), 32);
        assert_eq!(position.pieces(Color::White, PieceKind::Pawn), Bitboard::RANK_2);
        assert_eq!(position.pieces(Color::Black, PieceKind::Pawn), Bitboard::RANK_7);
        assert_eq!(
            position.piece_at(4),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            position.piece_at(59),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert!(position.validate().is_ok());
    }

    #[test]
    fn put_piece_replaces_the_previous_occupant() {
        let mut position = Position::new_empty();
        position
            .put_piece(27, Piece::new(Color::White, PieceKind::Knight))
            .expect("d4 is on the board");
        position
            .put_piece(27, Piece::new(Color::Black, PieceKind::Rook))
            .expect("d4 is on the board");

        assert!(position.pieces(Color::White, PieceKind::Knight).is_empty());
        assert_eq!(position.black_pieces(), Bitboard::from_square(27));
        assert_eq!(position.white_pieces(), Bitboard::EMPTY);
        assert!(position.validate().is_ok());
    }

    #[test]
    fn remove_piece_restores_empty_square() {
        let mut position = Position::new_game();
        let removed = position.remove_piece(1);
        assert_eq!(removed, Some(Piece::new(Color::White, PieceKind::Knight)));
        assert!(position.empty_squares().contains(1));
        assert_eq!(position.remove_piece(1), None);
        assert!(position.validate().is_ok());
    }

    #[test]
    fn owner_at_checks_bounds_and_occupancy() {
        let position = Position::new_game();
        assert_eq!(position.owner_at(0, 0), Some(Color::White));
        assert_eq!(position.owner_at(7, 7), Some(Color::Black));
        assert_eq!(position.owner_at(3, 4), None);
        assert_eq!(position.owner_at(-1, 0), None);
        assert_eq!(position.owner_at(0, 8), None);
    }

    #[test]
    fn tag_at_uses_legacy_encoding() {
        let position = Position::new_game();
        assert_eq!(position.tag_at(0), 4);
        assert_eq!(position.tag_at(60), 128 + 6);
        assert_eq!(position.tag_at(30), 0);
    }

    #[test]
    fn off_board_squares_never_alias_real_ones() {
        let mut position = Position::new_game();
        for square in [64u8, 70, 255] {
            assert_eq!(position.piece_at(square), None);
            assert_eq!(position.tag_at(square), 0);
            assert_eq!(position.kind_at_for_color(Color::White, square), None);
            assert_eq!(position.remove_piece(square), None);
            assert!(matches!(
                position.put_piece(square, Piece::new(Color::White, PieceKind::Queen)),
                Err(ChessCoreError::InvalidSquare(_))
            ));
        }
        assert_eq!(position, Position::new_game());
    }

    #[test]
    fn clear_empties_everything() {
        let mut position = Position::new_game();
        position.side_to_move = Color::Black;
        position.clear();
        assert_eq!(position, Position::new_empty());
        assert_eq!(position.empty_squares(), Bitboard::FULL);
    }

    #[test]
    fn validate_catches_stale_aggregates() {
        let mut position = Position::new_game();
        position.pieces[Color::White.index()][PieceKind::Queen.index()] |= Bitboard::from_square(20);
        assert!(matches!(
            position.validate(),
            Err(ChessCoreError::CorruptPosition(_))
        ));
    }

    #[test]
    fn validate_catches_double_occupancy() {
        let mut position = Position::new_game();
        position.pieces[Color::Black.index()][PieceKind::Pawn.index()] |= Bitboard::from_square(3);
        position.recalc_occupancy();
        assert!(matches!(
            position.validate(),
            Err(ChessCoreError::CorruptPosition(_))
        ));
    }
}
