//! Random pseudo-legal playouts.
//!
//! Plays uniformly random generated moves from a starting position. Used for
//! smoke-testing the generator and the codec over positions that are actually
//! reachable, and by the command-line front end.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::move_apply::apply_move;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone)]
pub struct Playout {
    /// Position before each played move, oldest first.
    pub history: Vec<Position>,
    pub moves: Vec<Move>,
    pub position: Position,
}

#[inline]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Play up to `max_plies` random moves. Stops early when the side to move has
/// no moves or a king has been captured.
pub fn random_playout<G, R>(
    generator: &G,
    start: &Position,
    max_plies: usize,
    rng: &mut R,
) -> ChessResult<Playout>
where
    G: MoveGenerator + ?Sized,
    R: Rng + ?Sized,
{
    let mut position = *start;
    let mut history = Vec::with_capacity(max_plies);
    let mut moves = Vec::with_capacity(max_plies);

    for _ in 0..max_plies {
        if Color::ALL
            .iter()
            .any(|color| position.pieces(*color, PieceKind::King).is_empty())
        {
            break;
        }

        let candidates = generator.generate_moves(&position);
        let Some(mv) = candidates.as_slice().choose(rng) else {
            break;
        };

        let next = apply_move(&position, mv, None)?;
        history.push(position);
        moves.push(*mv);
        position = next;
    }

    log::debug!("playout finished after {} plies", moves.len());

    Ok(Playout {
        history,
        moves,
        position,
    })
}
