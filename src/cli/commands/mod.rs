//! CLI subcommands

pub mod clue;
pub mod play;
pub mod values;
