//! Game of 15: a digit-placement line game with an exhaustive solver
//!
//! This crate provides:
//! - Complete Game of 15 rules with placement validation
//! - Exhaustive minimax search with alpha-beta pruning
//! - A move-selecting engine with reproducible random tie-breaking
//! - Match state tracking from first placement to outcome

pub mod board;
pub mod cli;
pub mod engine;
pub mod error;
pub mod game;
pub mod rules;
pub mod search;

pub use board::{Board, Coord, Digit, Side};
pub use engine::{Decision, Engine, ScoredMove, score_moves};
pub use error::{Error, Result};
pub use game::{Match, MatchOutcome, PlayedMove};
pub use rules::{LINES, TARGET_SUM};
pub use search::{SearchStats, Searcher, WIN_SCORE};
