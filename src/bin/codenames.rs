//! Codenames spymaster CLI
//!
//! This CLI provides a unified interface for:
//! - Choosing a clue for a board from word vectors
//! - Playing simulated games between two spymasters
//! - Inspecting the position-value table

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "codenames")]
#[command(version, about = "Codenames spymaster driven by word embeddings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose a clue for one team on a board
    Clue(codenames::cli::commands::clue::ClueArgs),

    /// Play a simulated game between two spymasters
    Play(codenames::cli::commands::play::PlayArgs),

    /// Print the position-value table
    Values(codenames::cli::commands::values::ValuesArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Clue(args) => codenames::cli::commands::clue::execute(args),
        Commands::Play(args) => codenames::cli::commands::play::execute(args),
        Commands::Values(args) => codenames::cli::commands::values::execute(args),
    }
}
