//! Values command - Print the position-value table

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{config::load_spymaster_config, output::format_position_values},
    spymaster::PositionValues,
};

#[derive(Parser, Debug)]
#[command(about = "Print the position-value table")]
pub struct ValuesArgs {
    /// Spymaster configuration (JSON); only the position section is used
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn execute(args: ValuesArgs) -> Result<()> {
    let config = load_spymaster_config(args.config.as_deref())?;
    let table = PositionValues::build(&config.position)?;
    println!("Win probability of the team to move, by hidden cards (mover m, opponent o)\n");
    print!("{}", format_position_values(&table));
    Ok(())
}
