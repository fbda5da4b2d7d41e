//! Game of 15 CLI - play against and analyze an exhaustive search engine
//!
//! Two sides alternately claim cells of a 3x3 grid: ODD places the digits
//! {1, 3, 5, 7, 9}, EVEN places {2, 4, 6, 8}, and either side may claim
//! the shared 0 once. The first full row, column, or diagonal summing to
//! exactly 15 ends the match.

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fifteen")]
#[command(version, about = "Game of 15 with an exhaustive minimax engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive match against the engine
    Play(fifteen::cli::commands::play::PlayArgs),

    /// Exhaustively score every legal move from a position
    Analyze(fifteen::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => fifteen::cli::commands::play::execute(args),
        Commands::Analyze(args) => fifteen::cli::commands::analyze::execute(args),
    }
}
