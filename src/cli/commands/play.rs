//! Play command - Simulate a game between two spymasters

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    adapters::{TracingObserver, VectorSpace},
    cli::{
        config::{TeamArg, load_spymaster_config, load_word_list},
        output::ConsoleObserver,
    },
    game::{Board, DealLayout, SimilarityGuesser, Team, play::Seat, run_game},
    ports::Observer,
    spymaster::{PositionValues, Spymaster},
};

#[derive(Parser, Debug)]
#[command(about = "Play a simulated game")]
pub struct PlayArgs {
    /// Word vectors in word2vec/GloVe text format
    #[arg(long, short = 'v')]
    pub vectors: PathBuf,

    /// Deck of board words, one per line
    #[arg(long, short = 'w')]
    pub words: PathBuf,

    /// Random seed for the deal
    #[arg(long)]
    pub seed: Option<u64>,

    /// Team that moves first (and receives the extra card)
    #[arg(long, value_enum, default_value = "red")]
    pub first: TeamArg,

    /// Similarity a simulated guesser needs to keep guessing
    #[arg(long, default_value_t = 0.3)]
    pub threshold: f64,

    /// Spymaster configuration (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = load_spymaster_config(args.config.as_deref())?;
    let deck = load_word_list(&args.words)?;
    let vectors = VectorSpace::load(&args.vectors)
        .with_context(|| format!("Failed to load vectors from {}", args.vectors.display()))?;

    let first = Team::from(args.first);
    let second = first.opponent().context("First team has no opponent")?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut board = Board::deal(&deck, &DealLayout::default(), first, &mut rng)?;

    let table = Arc::new(PositionValues::build(&config.position)?);
    let mut first_spymaster = Spymaster::with_config(first, &vectors, config.clone())?
        .with_table(Arc::clone(&table))
        .with_observer(Box::new(TracingObserver));
    let mut second_spymaster = Spymaster::with_config(second, &vectors, config)?
        .with_table(table)
        .with_observer(Box::new(TracingObserver));
    let mut first_guesser = SimilarityGuesser::new(first, &vectors)?.with_threshold(args.threshold);
    let mut second_guesser =
        SimilarityGuesser::new(second, &vectors)?.with_threshold(args.threshold);

    let mut observers: Vec<Box<dyn Observer>> =
        vec![Box::new(ConsoleObserver::new()), Box::new(TracingObserver)];
    let winner = run_game(
        &mut board,
        first,
        [
            Seat::new(&mut first_spymaster, &mut first_guesser),
            Seat::new(&mut second_spymaster, &mut second_guesser),
        ],
        &mut observers,
    )?;

    println!("\nWinner: {winner}");
    Ok(())
}
