//! Root-move scoring and randomized tie-breaking

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use serde::Serialize;

use crate::board::{Board, Coord, Digit, Side};
use crate::error::{Error, Result};
use crate::search::{SearchStats, Searcher};

/// A legal root move together with its exhaustive search score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredMove {
    pub at: Coord,
    pub digit: Digit,
    pub score: i32,
}

/// The move an engine settled on, with the work it took.
#[derive(Debug, Clone, Copy)]
pub struct Decision {
    pub chosen: ScoredMove,
    pub stats: SearchStats,
}

/// Score every legal move for `side` from this position.
///
/// Moves are enumerated in scan order (cells row-major, the side's own
/// digits ascending with 0 last) and scored with `side` as the maximizing
/// perspective. The input board is untouched; scoring runs on a copy.
pub fn score_moves(board: &Board, side: Side) -> (Vec<ScoredMove>, SearchStats) {
    let mut scratch = *board;
    let mut searcher = Searcher::new();
    let mut moves = Vec::new();

    let cells = scratch.empty_cells();
    let digits = scratch.available_digits(side);
    for &at in &cells {
        for &digit in &digits {
            let score =
                scratch.with_trial(at, digit, |b| searcher.score(b, side.opponent(), side));
            moves.push(ScoredMove { at, digit, score });
        }
    }

    (moves, searcher.stats())
}

/// Move selector that breaks ties between equally scored best moves
/// uniformly at random.
#[derive(Debug)]
pub struct Engine {
    rng: StdRng,
}

impl Engine {
    /// Create an engine. `seed` fixes the tie-break rng for reproducible
    /// matches; `None` seeds from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        Engine { rng }
    }

    /// Pick a best-scoring move for `side` from this position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalMoves`] if `side` has no cell and digit
    /// left to play.
    pub fn select_move(&mut self, board: &Board, side: Side) -> Result<Decision> {
        let (moves, stats) = score_moves(board, side);
        let best = moves
            .iter()
            .map(|m| m.score)
            .max()
            .ok_or(Error::NoLegalMoves { side })?;
        let ties: Vec<ScoredMove> = moves.into_iter().filter(|m| m.score == best).collect();
        let chosen = ties
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::NoLegalMoves { side })?;
        Ok(Decision { chosen, stats })
    }
}
