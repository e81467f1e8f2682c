//! Codenames spymaster engine
//!
//! This crate provides:
//! - Board representation, random deals and a turn loop for two teams
//! - A clue-selection engine driven by a semantic-similarity oracle
//! - A guess-success model and a position-value table that let clues for
//!   different counts be compared by win probability
//! - Oracle adapters for explicit similarity tables and word-vector files
//! - Observers for structured logging and event recording

pub mod adapters;
pub mod cli;
pub mod error;
pub mod game;
pub mod ports;
pub mod spymaster;
pub mod types;

pub use error::{Error, Result};
pub use game::{Board, Team};
pub use spymaster::{Spymaster, SpymasterConfig};
pub use types::{Clue, ClueExplanation, CoveredWord, Probability};
