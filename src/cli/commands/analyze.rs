//! Analyze command - exhaustively score a position's legal moves

use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use super::play::SideArg;
use crate::board::{Board, Side};
use crate::cli::output::{
    create_spinner, describe_line, format_digit_set, format_number, print_kv, print_section,
    print_subsection, render_board,
};
use crate::engine::{ScoredMove, score_moves};
use crate::rules;

#[derive(Parser, Debug)]
#[command(about = "Exhaustively score every legal move from a position")]
pub struct AnalyzeArgs {
    /// Board as nine cell characters, row-major (`.` or `-` for empty)
    #[arg(long, default_value = ".........")]
    pub board: String,

    /// Side to move
    #[arg(long, value_enum, default_value = "odd")]
    pub side: SideArg,

    /// Export the scored moves to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.board)
        .with_context(|| format!("invalid --board '{}'", args.board))?;
    let side = args.side.to_side();

    print_section("Position analysis");
    println!("\n{}", render_board(&board));
    print_kv("Side to move", side.as_str());
    print_kv(
        "Available digits",
        &format_digit_set(&board.available_digits(side)),
    );

    // Terminal positions are reported, never scored
    if let Some(line) = rules::winning_line(&board) {
        println!();
        println!("Position is terminal: {} sums to 15.", describe_line(line));
        println!(
            "The win is credited to the {} side.",
            rules::attribute_win(&board)
        );
        return Ok(());
    }
    if board.is_full() {
        println!();
        println!("Position is terminal: board full with no line summing to 15.");
        return Ok(());
    }
    if board.available_digits(side).is_empty() {
        println!();
        println!("The {side} side has no digits left to place; nothing to score.");
        return Ok(());
    }

    let spinner = create_spinner("Scoring moves...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    let start = Instant::now();
    let (mut moves, stats) = score_moves(&board, side);
    let elapsed = start.elapsed();
    spinner.finish_and_clear();

    // Stable sort keeps scan order within equal scores
    moves.sort_by_key(|m| std::cmp::Reverse(m.score));

    print_subsection("Scored moves (best first)");
    for mv in &moves {
        println!(
            "  row {} col {}  digit {}  ->  {:>4}",
            mv.at.row(),
            mv.at.col(),
            mv.digit,
            mv.score
        );
    }

    let best = moves[0].score;
    let best_count = moves.iter().filter(|m| m.score == best).count();

    print_subsection("Summary");
    print_kv("Legal moves", &moves.len().to_string());
    print_kv("Best score", &best.to_string());
    print_kv("Best moves", &best_count.to_string());
    print_kv("Nodes searched", &format_number(stats.nodes as usize));
    print_kv("Time", &format!("{} ms", elapsed.as_millis()));

    if let Some(path) = &args.export {
        export_analysis(&board, side, &moves, stats.nodes, elapsed.as_millis() as u64, path)?;
        println!("\n✓ Analysis exported to: {}", path.display());
    }

    Ok(())
}

/// Export scored moves to JSON
fn export_analysis(
    board: &Board,
    side: Side,
    moves: &[ScoredMove],
    nodes: u64,
    elapsed_ms: u64,
    path: &PathBuf,
) -> Result<()> {
    #[derive(Serialize)]
    struct MoveEntry {
        row: usize,
        col: usize,
        digit: u8,
        score: i32,
    }

    #[derive(Serialize)]
    struct AnalysisExport {
        board: String,
        side: String,
        legal_moves: usize,
        moves: Vec<MoveEntry>,
        nodes: u64,
        elapsed_ms: u64,
    }

    let export = AnalysisExport {
        board: board.encode(),
        side: side.to_string(),
        legal_moves: moves.len(),
        moves: moves
            .iter()
            .map(|m| MoveEntry {
                row: m.at.row(),
                col: m.at.col(),
                digit: m.digit.value(),
                score: m.score,
            })
            .collect(),
        nodes,
        elapsed_ms,
    };

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &export)?;
    Ok(())
}
