//! Canonical chess-rule constants.
//!
//! Starting placement, pawn geometry per color, and the rank literals the
//! generator and codec agree on.

use crate::game_state::chess_types::Color;

/// Placement field of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Full standard starting FEN. Only the placement field is consumed.
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Length of the fixed state string, one character per square.
pub const STATE_STRING_LEN: usize = 64;

/// Character used for an empty square in the state string.
pub const EMPTY_SQUARE_CHAR: char = '0';

#[inline]
pub const fn pawn_start_rank(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}
