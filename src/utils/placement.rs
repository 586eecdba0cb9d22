//! FEN placement codec.
//!
//! Decoding reads only the placement field (everything before the first
//! space). The first rank in the text is rank 8, so the `n`th `/`-separated
//! group lands on internal rank `7 - n`.
//!
//! Two modes are offered. [`PlacementMode::Lenient`] never fails: characters
//! it does not understand are skipped and pieces that would fall off the board
//! are dropped. [`PlacementMode::Strict`] reports the first problem as a
//! [`PlacementError`] and leaves the target position empty.

use crate::errors::{ChessResult, PlacementError};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlacementMode {
    #[default]
    Lenient,
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    NextRank,
    Skip(u8),
    Place(Piece),
    Invalid(char),
}

pub fn decode_placement(text: &str, mode: PlacementMode) -> ChessResult<Position> {
    let mut position = Position::new_empty();
    decode_placement_into(&mut position, text, mode)?;
    Ok(position)
}

/// Infallible lenient decode.
pub fn decode_placement_lenient(text: &str) -> Position {
    let mut position = Position::new_empty();
    place_lenient(&mut position, placement_field(text));
    position
}

/// Replace the contents of `position` with the decoded placement.
///
/// The position is cleared first, so reloading the same text is idempotent.
/// The side to move is reset to White.
pub fn decode_placement_into(
    position: &mut Position,
    text: &str,
    mode: PlacementMode,
) -> ChessResult<()> {
    position.clear();
    let field = placement_field(text);

    match mode {
        PlacementMode::Lenient => place_lenient(position, field),
        PlacementMode::Strict => {
            if let Err(err) = place_strict(position, field) {
                position.clear();
                return Err(err);
            }
        }
    }

    log::debug!(
        "decoded placement {field:?}: {} white, {} black pieces",
        position.white_pieces().count(),
        position.black_pieces().count()
    );
    Ok(())
}

/// Run-length encoded placement field, rank 8 first.
pub fn encode_placement(position: &Position) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match position.piece_at(square_at(file, rank)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn placement_field(text: &str) -> &str {
    text.split_once(' ').map_or(text, |(field, _)| field)
}

fn classify(ch: char) -> Token {
    if ch == '/' {
        return Token::NextRank;
    }
    if let Some(run) = ch.to_digit(10) {
        return Token::Skip(run as u8);
    }
    match Piece::from_fen_char(ch) {
        Some(piece) => Token::Place(piece),
        None => Token::Invalid(ch),
    }
}

fn place_lenient(position: &mut Position, field: &str) {
    let mut row = 0usize;
    let mut file = 0usize;

    for (offset, ch) in field.char_indices() {
        match classify(ch) {
            Token::NextRank => {
                row += 1;
                file = 0;
            }
            Token::Skip(run) => file += usize::from(run),
            Token::Place(piece) => {
                let placed = row < 8
                    && file < 8
                    && position
                        .put_piece(square_at(file as u8, (7 - row) as u8), piece)
                        .is_ok();
                if !placed {
                    log::warn!("dropping '{ch}' at offset {offset}: outside the board");
                }
                file += 1;
            }
            Token::Invalid(ch) => {
                log::debug!("skipping unrecognized placement character '{ch}' at offset {offset}");
            }
        }
    }
}

// Errors come out in text order; the rank count is only judged once the
// scan reaches a ninth rank or the end of the field.
fn place_strict(position: &mut Position, field: &str) -> ChessResult<()> {
    let mut row = 0usize;
    let mut file = 0usize;

    for (offset, ch) in field.char_indices() {
        match classify(ch) {
            Token::NextRank => {
                if file != 8 {
                    return Err(PlacementError::IncompleteRank { rank: 8 - row, files: file }.into());
                }
                if row == 7 {
                    return Err(PlacementError::WrongRankCount(field.split('/').count()).into());
                }
                row += 1;
                file = 0;
            }
            Token::Skip(run) => {
                if !(1..=8).contains(&run) {
                    return Err(PlacementError::UnexpectedCharacter { character: ch, position: offset }.into());
                }
                file += usize::from(run);
                if file > 8 {
                    return Err(PlacementError::RankOverflow { rank: 8 - row, position: offset }.into());
                }
            }
            Token::Place(piece) => {
                if file >= 8 {
                    return Err(PlacementError::RankOverflow { rank: 8 - row, position: offset }.into());
                }
                position.put_piece(square_at(file as u8, (7 - row) as u8), piece)?;
                file += 1;
            }
            Token::Invalid(character) => {
                return Err(PlacementError::UnexpectedCharacter { character, position: offset }.into());
            }
        }
    }

    if file != 8 {
        return Err(PlacementError::IncompleteRank { rank: 8 - row, files: file }.into());
    }
    if row != 7 {
        return Err(PlacementError::WrongRankCount(row + 1).into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ChessCoreError;
    use crate::game_state::chess_rules::{STARTING_PLACEMENT, STARTING_POSITION_FEN};

    #[test]
    fn starting_placement_decodes_in_both_modes() {
        let lenient = decode_placement(STARTING_PLACEMENT, PlacementMode::Lenient)
            .expect("lenient decode never fails");
        let strict = decode_placement(STARTING_PLACEMENT, PlacementMode::Strict)
            .expect("starting placement is well formed");
        assert_eq!(lenient, strict);
        assert_eq!(lenient, Position::new_game());
        assert_eq!(
            lenient.piece_at(0),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
        assert_eq!(
            lenient.piece_at(60),
            Some(Piece::new(Color::Black, PieceKind::King))
        );
    }

    #[test]
    fn trailing_fen_fields_are_ignored() {
        let position = decode_placement(STARTING_POSITION_FEN, PlacementMode::Strict)
            .expect("full FEN should decode");
        assert_eq!(position, Position::new_game());
    }

    #[test]
    fn lenient_mode_skips_unknown_characters() {
        let position = decode_placement_lenient("4k3/8/8/8/8/8/8/4K2x?R");
        assert_eq!(position.occupancy().count(), 3);
        assert_eq!(
            position.piece_at(7),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
    }

    #[test]
    fn lenient_mode_drops_pieces_past_the_edge() {
        let position = decode_placement_lenient("8/8/8/8/8/8/8/8/8/K");
        assert!(position.occupancy().is_empty());

        let position = decode_placement_lenient("8N/8/8/8/8/8/8/8");
        assert!(position.occupancy().is_empty());
    }

    #[test]
    fn strict_mode_reports_the_offending_character() {
        let err = decode_placement("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR", PlacementMode::Strict)
            .expect_err("x is not a piece");
        assert_eq!(
            err,
            ChessCoreError::Placement(PlacementError::UnexpectedCharacter {
                character: 'x',
                position: 13,
            })
        );
    }

    #[test]
    fn strict_mode_names_bad_characters_before_counting_ranks() {
        assert_eq!(
            decode_placement("rnbqkbnr/ppppxppp/8", PlacementMode::Strict),
            Err(ChessCoreError::Placement(PlacementError::UnexpectedCharacter {
                character: 'x',
                position: 13,
            }))
        );
        assert_eq!(
            decode_placement("8/8/8/8/8/8/8/8/8", PlacementMode::Strict),
            Err(ChessCoreError::Placement(PlacementError::WrongRankCount(9)))
        );
    }

    #[test]
    fn strict_mode_checks_rank_geometry() {
        assert_eq!(
            decode_placement("8/8/8/8/8/8/8", PlacementMode::Strict),
            Err(ChessCoreError::Placement(PlacementError::WrongRankCount(7)))
        );
        assert_eq!(
            decode_placement("7/8/8/8/8/8/8/8", PlacementMode::Strict),
            Err(ChessCoreError::Placement(PlacementError::IncompleteRank { rank: 8, files: 7 }))
        );
        assert_eq!(
            decode_placement("8/8/8/8/8/8/8/7KQ", PlacementMode::Strict),
            Err(ChessCoreError::Placement(PlacementError::RankOverflow { rank: 1, position: 16 }))
        );
        assert!(decode_placement("8/8/8/8/8/8/8/09", PlacementMode::Strict).is_err());
    }

    #[test]
    fn decoding_into_an_existing_position_clears_it_first() {
        let mut position = Position::new_game();
        position.side_to_move = Color::Black;
        decode_placement_into(&mut position, "4k3/8/8/8/8/8/8/4K3", PlacementMode::Lenient)
            .expect("lenient decode never fails");
        assert_eq!(position.occupancy().count(), 2);
        assert_eq!(position.side_to_move, Color::White);

        let err = decode_placement_into(&mut position, "4k3/8/8/8/8/8/8/4K3?", PlacementMode::Strict);
        assert!(err.is_err());
        assert!(position.occupancy().is_empty());
    }

    #[test]
    fn encode_matches_standard_placement() {
        assert_eq!(encode_placement(&Position::new_game()), STARTING_PLACEMENT);

        let text = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";
        let position = decode_placement(text, PlacementMode::Strict).expect("kiwipete placement");
        assert_eq!(encode_placement(&position), text);
    }
}
