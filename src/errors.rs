//! Error types shared by the codec, the position model, and move application.
//!
//! Decoding failures carry the offending character and its byte offset so a
//! host can point at the exact spot in user-supplied text.

use thiserror::Error;

use crate::game_state::chess_types::{PieceKind, Square};

/// Failure while decoding FEN placement text in strict mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },

    #[error("rank {rank} overflows past file h at position {position}")]
    RankOverflow { rank: usize, position: usize },

    #[error("rank {rank} covers {files} files instead of 8")]
    IncompleteRank { rank: usize, files: usize },

    #[error("placement has {0} ranks instead of 8")]
    WrongRankCount(usize),
}

/// Failure while decoding the fixed 64-character state string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateStringError {
    #[error("state string must be 64 characters, got {0}")]
    WrongLength(usize),

    #[error("unrecognized character '{character}' at square {square}")]
    UnknownCharacter { character: char, square: usize },
}

/// Crate-wide error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessCoreError {
    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    StateString(#[from] StateStringError),

    #[error("invalid piece tag {0}")]
    InvalidPieceTag(u8),

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("no piece on square {0}")]
    NoPieceOnSquare(Square),

    #[error("piece on square {0} does not belong to the side to move")]
    WrongSideToMove(Square),

    #[error("square {square} holds a {found:?}, move expects a {expected:?}")]
    PieceMismatch {
        square: Square,
        expected: PieceKind,
        found: PieceKind,
    },

    #[error("square {0} is occupied by a piece of the side to move")]
    OwnPieceOnDestination(Square),

    #[error("cannot promote to {0:?}")]
    InvalidPromotion(PieceKind),

    #[error("position invariant violated: {0}")]
    CorruptPosition(String),
}

pub type ChessResult<T> = Result<T, ChessCoreError>;
