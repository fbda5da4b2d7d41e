//! Match state and turn progression

use serde::Serialize;

use crate::board::{Board, Coord, Digit, Side};
use crate::error::{Error, Result};
use crate::rules;

/// A single committed placement in a match history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayedMove {
    pub at: Coord,
    pub digit: Digit,
    pub side: Side,
}

/// How a finished match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchOutcome {
    /// A line summing to 15 was completed and credited to this side.
    Win(Side),
    /// The board filled, or the next mover ran out of digits, with no
    /// line summing to 15.
    Tie,
}

/// One match from empty board to outcome.
///
/// Placements always belong to the side whose turn it is; turns strictly
/// alternate. The match ends the moment a line sums to 15, the board
/// fills, or the side to move has no digit left to place.
#[derive(Debug, Clone, Serialize)]
pub struct Match {
    board: Board,
    to_move: Side,
    first: Side,
    moves: Vec<PlayedMove>,
    outcome: Option<MatchOutcome>,
}

impl Match {
    /// Start a match with `first` to move on an empty board.
    pub fn new(first: Side) -> Self {
        Match {
            board: Board::new(),
            to_move: first,
            first,
            moves: Vec::new(),
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side expected to place next. Meaningful only while the match
    /// is still running.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn first(&self) -> Side {
        self.first
    }

    pub fn moves(&self) -> &[PlayedMove] {
        &self.moves
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// The completed line that ended the match, if it ended in a win.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        rules::winning_line(&self.board)
    }

    /// Commit a placement for the side to move and advance the turn.
    ///
    /// On a rejected placement the match state is untouched and the same
    /// side stays to move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MatchOver`] once an outcome is set, or the
    /// placement error from [`rules::check_placement`].
    pub fn play(&mut self, at: Coord, digit: Digit) -> Result<()> {
        if self.is_over() {
            return Err(Error::MatchOver);
        }
        rules::check_placement(&self.board, at, digit, self.to_move)?;

        self.board.place(at, digit)?;
        self.moves.push(PlayedMove {
            at,
            digit,
            side: self.to_move,
        });

        if rules::has_winning_line(&self.board) {
            self.outcome = Some(MatchOutcome::Win(rules::attribute_win(&self.board)));
        } else if self.board.is_full() {
            self.outcome = Some(MatchOutcome::Tie);
        } else {
            self.to_move = self.to_move.opponent();
            if self.board.available_digits(self.to_move).is_empty() {
                // Stalemate: cells remain but the mover's pool is empty
                self.outcome = Some(MatchOutcome::Tie);
            }
        }
        Ok(())
    }
}
