//! Fixed 64-character board state string.
//!
//! One character per square, square 0 (a1) first and the file varying
//! fastest: `'0'` for an empty square, otherwise the FEN letter of the
//! occupant. No run-length compression, no side-to-move field. This is the
//! save/restore and sync payload handed to the host.

use crate::errors::{ChessResult, StateStringError};
use crate::game_state::chess_rules::{EMPTY_SQUARE_CHAR, STATE_STRING_LEN};
use crate::game_state::chess_types::*;

pub fn encode_state_string(position: &Position) -> String {
    (0..STATE_STRING_LEN as u8)
        .map(|square| {
            position
                .piece_at(square)
                .map_or(EMPTY_SQUARE_CHAR, Piece::fen_char)
        })
        .collect()
}

/// Rebuild a position from its state string. White is to move afterwards.
pub fn decode_state_string(state: &str) -> ChessResult<Position> {
    let len = state.chars().count();
    if len != STATE_STRING_LEN {
        return Err(StateStringError::WrongLength(len).into());
    }

    let mut position = Position::new_empty();
    for (square, ch) in state.chars().enumerate() {
        if ch == EMPTY_SQUARE_CHAR {
            continue;
        }
        let piece = Piece::from_fen_char(ch)
            .ok_or(StateStringError::UnknownCharacter { character: ch, square })?;
        position.put_piece(square as Square, piece)?;
    }

    Ok(position)
}

/// State string of the standard starting position.
pub fn initial_state_string() -> String {
    encode_state_string(&Position::new_game())
}
