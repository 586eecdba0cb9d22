//! Move record produced by the generator.
//!
//! Flags mark captures, double pawn pushes, and moves onto the promotion rank.
//! The promotion piece itself is picked by whoever applies the move.

use std::fmt;

use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::algebraic::square_name;

pub const FLAG_CAPTURE: u8 = 1 << 0;
pub const FLAG_DOUBLE_PAWN_PUSH: u8 = 1 << 1;
pub const FLAG_PROMOTION: u8 = 1 << 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub captured: Option<PieceKind>,
    pub flags: u8,
}

impl Move {
    #[inline]
    pub const fn new(
        from: Square,
        to: Square,
        piece: PieceKind,
        captured: Option<PieceKind>,
        flags: u8,
    ) -> Self {
        Self {
            from,
            to,
            piece,
            captured,
            flags,
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.flags & FLAG_CAPTURE != 0
    }

    #[inline]
    pub const fn is_double_pawn_push(&self) -> bool {
        self.flags & FLAG_DOUBLE_PAWN_PUSH != 0
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        self.flags & FLAG_PROMOTION != 0
    }
}

/// Long algebraic coordinates, e.g. `e2e4`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", square_name(self.from), square_name(self.to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_independent() {
        let mv = Move::new(52, 61, PieceKind::Pawn, Some(PieceKind::Rook), FLAG_CAPTURE | FLAG_PROMOTION);
        assert!(mv.is_capture());
        assert!(mv.is_promotion());
        assert!(!mv.is_double_pawn_push());
    }

    #[test]
    fn displays_as_coordinates() {
        let mv = Move::new(12, 28, PieceKind::Pawn, None, FLAG_DOUBLE_PAWN_PUSH);
        assert_eq!(mv.to_string(), "e2e4");
    }
}
