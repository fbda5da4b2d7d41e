//! Exhaustive minimax search with alpha-beta pruning

use serde::Serialize;

use crate::board::{Board, Side};
use crate::rules;

/// Base magnitude of a terminal score before the depth penalty.
pub const WIN_SCORE: i32 = 100;

/// Node counter accumulated over one searcher's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Recursive evaluations performed, terminal nodes included.
    pub nodes: u64,
}

/// Depth-first minimax over every reachable completion of a position.
///
/// Scores are always taken from the perspective of a single maximizing
/// side fixed at the root: wins credited to it score `+(100 - depth)`,
/// wins credited to the opponent `-(100 - depth)`, and ties 0, where
/// depth is the number of digits on the board when the match ended.
/// Scoring deeper wins lower makes the search prefer faster wins and
/// slower losses.
///
/// The game tree is small enough (ten digits, nine cells) that no
/// transposition table or depth cutoff is needed.
#[derive(Debug)]
pub struct Searcher {
    pruning: bool,
    stats: SearchStats,
}

impl Searcher {
    pub fn new() -> Self {
        Searcher {
            pruning: true,
            stats: SearchStats::default(),
        }
    }

    /// A searcher that visits every node. Only useful for validating that
    /// pruning does not change results; orders of magnitude slower on
    /// sparse boards.
    pub fn without_pruning() -> Self {
        Searcher {
            pruning: false,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Score a position for `maximizing`, with `to_move` placing next.
    ///
    /// The board is mutated during the search through scoped trial
    /// placements and is fully restored before returning.
    pub fn score(&mut self, board: &mut Board, to_move: Side, maximizing: Side) -> i32 {
        let depth = board.placed_count();
        self.minimax(board, depth, to_move, maximizing, i32::MIN, i32::MAX)
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        to_move: Side,
        maximizing: Side,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        // A ninth placement that completes a line is a win, not a tie, so
        // the line check comes first.
        if rules::has_winning_line(board) {
            let magnitude = WIN_SCORE - i32::from(depth);
            return if rules::attribute_win(board) == maximizing {
                magnitude
            } else {
                -magnitude
            };
        }
        if depth == 9 {
            return 0;
        }

        let digits = board.available_digits(to_move);
        if digits.is_empty() {
            // The mover is out of digits while cells remain; nobody can
            // complete a line through this branch.
            return 0;
        }
        let cells = board.empty_cells();

        if to_move == maximizing {
            let mut best = i32::MIN;
            'cells: for &at in &cells {
                for &digit in &digits {
                    let value = board.with_trial(at, digit, |b| {
                        self.minimax(b, depth + 1, to_move.opponent(), maximizing, alpha, beta)
                    });
                    best = best.max(value);
                    alpha = alpha.max(value);
                    if self.pruning && beta <= alpha {
                        break 'cells;
                    }
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            'cells: for &at in &cells {
                for &digit in &digits {
                    let value = board.with_trial(at, digit, |b| {
                        self.minimax(b, depth + 1, to_move.opponent(), maximizing, alpha, beta)
                    });
                    best = best.min(value);
                    beta = beta.min(value);
                    if self.pruning && beta <= alpha {
                        break 'cells;
                    }
                }
            }
            best
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn test_terminal_position_scores_plus_minus_win_minus_depth() {
        // Column 0 holds 2, 9, 4 and sums to 15 with three digits placed
        let mut b = board("2..9..4..");
        assert_eq!(
            Searcher::new().score(&mut b, Side::Odd, Side::Even),
            WIN_SCORE - 3
        );
        assert_eq!(
            Searcher::new().score(&mut b, Side::Odd, Side::Odd),
            -(WIN_SCORE - 3)
        );
    }

    #[test]
    fn test_terminal_position_counts_one_node() {
        let mut b = board("2..9..4..");
        let mut searcher = Searcher::new();
        searcher.score(&mut b, Side::Odd, Side::Even);
        assert_eq!(searcher.stats().nodes, 1);
    }

    #[test]
    fn test_full_board_without_line_is_a_tie() {
        // Nine digits, every line checked to miss 15
        let mut b = board("124356798");
        assert_eq!(Searcher::new().score(&mut b, Side::Even, Side::Odd), 0);
        assert_eq!(Searcher::new().score(&mut b, Side::Even, Side::Even), 0);
    }

    #[test]
    fn test_exhausted_mover_scores_zero() {
        // All six ODD-playable digits are on the board, no line sums 15
        let mut b = board("135790...");
        assert_eq!(b.available_digits(Side::Odd).len(), 0);
        let mut searcher = Searcher::new();
        assert_eq!(searcher.score(&mut b, Side::Odd, Side::Odd), 0);
        assert_eq!(searcher.stats().nodes, 1);
    }

    #[test]
    fn test_immediate_win_scores_highest_remaining_magnitude() {
        // EVEN to move completes column 0 (2 + 9 + 4) on its first try
        let mut b = board("2..9.....");
        let score = Searcher::new().score(&mut b, Side::Even, Side::Even);
        assert_eq!(score, WIN_SCORE - 3);
    }

    #[test]
    fn test_search_restores_the_board() {
        let mut b = board("24..7.9..");
        let before = b;
        Searcher::new().score(&mut b, Side::Odd, Side::Odd);
        assert_eq!(b, before);
    }

    #[test]
    fn test_pruning_preserves_scores() {
        for s in ["24..7.9..", "..5.63..8"] {
            for to_move in [Side::Odd, Side::Even] {
                for maximizing in [Side::Odd, Side::Even] {
                    let mut pruned_board = board(s);
                    let mut full_board = board(s);
                    let mut pruned = Searcher::new();
                    let mut full = Searcher::without_pruning();

                    let a = pruned.score(&mut pruned_board, to_move, maximizing);
                    let b = full.score(&mut full_board, to_move, maximizing);
                    assert_eq!(a, b, "position {s}, {to_move} to move, for {maximizing}");
                    assert!(pruned.stats().nodes <= full.stats().nodes);
                }
            }
        }
    }

    #[test]
    fn test_perspectives_are_antisymmetric() {
        let mut b = board("24..7.9..");
        let for_odd = Searcher::new().score(&mut b, Side::Odd, Side::Odd);
        let for_even = Searcher::new().score(&mut b, Side::Odd, Side::Even);
        assert_eq!(for_odd, -for_even);
    }
}
