//! Play command - interactive matches against the search engine

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::board::{Coord, Digit, Side};
use crate::cli::output::{
    create_spinner, describe_line, format_digit_set, format_number, print_section, render_board,
};
use crate::engine::Engine;
use crate::game::{Match, MatchOutcome};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive match against the engine")]
pub struct PlayArgs {
    /// Side the human controls
    #[arg(long, value_enum, default_value = "odd")]
    pub side: SideArg,

    /// Who places the first digit
    #[arg(long, value_enum, default_value = "human")]
    pub first: FirstMover,

    /// Seed for the engine's tie-break rng (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SideArg {
    /// Digits 1, 3, 5, 7, 9 and the shared 0
    Odd,
    /// Digits 2, 4, 6, 8 and the shared 0
    Even,
}

impl SideArg {
    pub fn to_side(self) -> Side {
        match self {
            SideArg::Odd => Side::Odd,
            SideArg::Even => Side::Even,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FirstMover {
    Human,
    Engine,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let human = args.side.to_side();
    let first = match args.first {
        FirstMover::Human => human,
        FirstMover::Engine => human.opponent(),
    };
    let mut engine = Engine::new(args.seed);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    print_section("Game of 15");
    println!("ODD plays 1 3 5 7 9, EVEN plays 2 4 6 8, and either side may");
    println!("claim the 0 once. Any full row, column, or diagonal summing to");
    println!("exactly 15 ends the match.");
    println!();
    println!(
        "You play the {human} side; the engine plays {}.",
        human.opponent()
    );
    println!("Enter moves as: row col digit (all zero-based). Type q to quit.");

    loop {
        if play_one_match(&mut lines, &mut engine, human, first)?.is_none() {
            return Ok(());
        }

        print!("\nPlay again? [y/N] ");
        io::stdout().flush()?;
        match lines.next() {
            Some(line) => {
                if !line?.trim().eq_ignore_ascii_case("y") {
                    return Ok(());
                }
            }
            None => return Ok(()),
        }
    }
}

/// Run a single match to its outcome. Returns `None` when the human
/// quits or stdin closes mid-match.
fn play_one_match(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    engine: &mut Engine,
    human: Side,
    first: Side,
) -> Result<Option<MatchOutcome>> {
    let mut game = Match::new(first);

    while !game.is_over() {
        if game.to_move() == human {
            println!("\n{}", render_board(game.board()));
            println!(
                "Your digits: {}",
                format_digit_set(&game.board().available_digits(human))
            );
            print!("row col digit> ");
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                println!();
                return Ok(None);
            };
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
                return Ok(None);
            }

            let (at, digit) = match parse_move_line(trimmed) {
                Ok(parsed) => parsed,
                Err(reason) => {
                    println!("{reason}");
                    continue;
                }
            };
            if let Err(reason) = game.play(at, digit) {
                println!("Illegal move: {reason}");
            }
        } else {
            engine_turn(&mut game, engine, human.opponent())?;
        }
    }

    println!("\n{}", render_board(game.board()));
    announce_outcome(&game, human);
    Ok(game.outcome())
}

fn engine_turn(game: &mut Match, engine: &mut Engine, engine_side: Side) -> Result<()> {
    let spinner = create_spinner("Engine thinking...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    let start = Instant::now();
    let decision = engine.select_move(game.board(), engine_side)?;
    let elapsed = start.elapsed();
    spinner.finish_and_clear();

    game.play(decision.chosen.at, decision.chosen.digit)?;
    println!(
        "\nEngine places {} at row {}, column {}.",
        decision.chosen.digit,
        decision.chosen.at.row(),
        decision.chosen.at.col()
    );
    println!(
        "  Searched {} positions in {} ms.",
        format_number(decision.stats.nodes as usize),
        elapsed.as_millis()
    );
    Ok(())
}

fn announce_outcome(game: &Match, human: Side) {
    match game.outcome() {
        Some(MatchOutcome::Win(side)) => {
            if let Some(line) = game.winning_line() {
                println!("Line complete: {} sums to 15.", describe_line(line));
            }
            let winner = if side == human { "you" } else { "the engine" };
            println!("The {side} side ({winner}) takes the match!");
        }
        Some(MatchOutcome::Tie) => {
            if game.board().is_full() {
                println!("Board full with no line summing to 15. It's a tie.");
            } else {
                println!(
                    "The {} side has no digits left to place. It's a tie.",
                    game.to_move()
                );
            }
        }
        None => {}
    }
}

/// Parse a `row col digit` input line into a validated placement.
fn parse_move_line(line: &str) -> Result<(Coord, Digit)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 3 {
        anyhow::bail!("expected three numbers: row col digit");
    }
    let row: usize = tokens[0]
        .parse()
        .with_context(|| format!("'{}' is not a valid row", tokens[0]))?;
    let col: usize = tokens[1]
        .parse()
        .with_context(|| format!("'{}' is not a valid column", tokens[1]))?;
    let value: u8 = tokens[2]
        .parse()
        .with_context(|| format!("'{}' is not a valid digit", tokens[2]))?;

    let at = Coord::new(row, col)?;
    let digit = Digit::new(value)?;
    Ok((at, digit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_line() {
        let (at, digit) = parse_move_line("1 2 5").unwrap();
        assert_eq!((at.row(), at.col()), (1, 2));
        assert_eq!(digit.value(), 5);

        let (at, digit) = parse_move_line("  2  0   4  ").unwrap();
        assert_eq!((at.row(), at.col()), (2, 0));
        assert_eq!(digit.value(), 4);
    }

    #[test]
    fn test_parse_move_line_rejects_bad_shapes() {
        assert!(
            parse_move_line("1 2")
                .unwrap_err()
                .to_string()
                .contains("three numbers")
        );
        assert!(
            parse_move_line("a 2 5")
                .unwrap_err()
                .to_string()
                .contains("not a valid row")
        );
        assert!(
            parse_move_line("1 2 x")
                .unwrap_err()
                .to_string()
                .contains("not a valid digit")
        );
    }

    #[test]
    fn test_parse_move_line_validates_ranges() {
        assert!(
            parse_move_line("3 0 5")
                .unwrap_err()
                .to_string()
                .contains("outside")
        );
        assert!(
            parse_move_line("0 0 10")
                .unwrap_err()
                .to_string()
                .contains("out of range")
        );
    }

    #[test]
    fn test_side_arg_mapping() {
        assert_eq!(SideArg::Odd.to_side(), Side::Odd);
        assert_eq!(SideArg::Even.to_side(), Side::Even);
    }
}
