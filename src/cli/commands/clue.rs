//! Clue command - Choose a clue for one team on a given board

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    adapters::{TracingObserver, VectorSpace},
    cli::{
        config::{BoardFile, TeamArg, load_spymaster_config},
        output::{print_explanation, print_section},
    },
    game::Team,
    spymaster::Spymaster,
};

#[derive(Parser, Debug)]
#[command(about = "Choose a clue for a board")]
pub struct ClueArgs {
    /// Word vectors in word2vec/GloVe text format
    #[arg(long, short = 'v')]
    pub vectors: PathBuf,

    /// Board description (JSON)
    #[arg(long, short = 'b')]
    pub board: PathBuf,

    /// Team to give the clue for
    #[arg(long, short = 't', value_enum)]
    pub team: TeamArg,

    /// Spymaster configuration (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the explanation as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ClueArgs) -> Result<()> {
    let config = load_spymaster_config(args.config.as_deref())?;
    let board = BoardFile::load(&args.board)?.into_board()?;
    let vectors = VectorSpace::load(&args.vectors)
        .with_context(|| format!("Failed to load vectors from {}", args.vectors.display()))?;
    tracing::info!(
        terms = vectors.len(),
        dimension = vectors.dimension(),
        "vectors loaded"
    );

    let team = Team::from(args.team);
    let mut spymaster = Spymaster::with_config(team, &vectors, config)?
        .with_observer(Box::new(TracingObserver));
    spymaster.choose_clue(&board)?;

    let explanation = spymaster
        .last_explanation()
        .context("Spymaster chose a clue without an explanation")?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(explanation)?);
    } else {
        print_section(&format!("Clue for {team}"));
        print_explanation(explanation);
    }
    Ok(())
}
