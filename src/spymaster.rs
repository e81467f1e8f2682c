//! Clue selection
//!
//! This module turns a board and a similarity oracle into a clue: the
//! candidate filter, the guess-success model, the position-value table,
//! the scoring engine that composes them, and the per-team strategy that
//! drives it all each turn.

pub mod cache;
pub mod config;
pub mod filter;
pub mod matrix;
pub mod position;
pub mod probability;
pub mod scoring;
pub mod strategy;

// Re-export main types
pub use cache::SimilarityCache;
pub use config::SpymasterConfig;
pub use filter::{ClueFilter, is_clue_allowed};
pub use matrix::{BoardColumn, SimilarityMatrix, board_columns};
pub use position::{PositionValueConfig, PositionValues};
pub use probability::{DistractorMaxima, GuessModel, GuessModelConfig, margin_probability};
pub use scoring::{CandidateClue, ClueScorer, MissOutcomes, ProbabilityRow, TurnState};
pub use strategy::{ClueHistory, Spymaster};
