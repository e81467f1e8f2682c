//! Spymaster configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    position::PositionValueConfig, probability::GuessModelConfig, scoring::MissOutcomes,
};
use crate::{Error, Result, types::MAX_CLUE_COUNT};

/// Every tunable constant of clue selection.
///
/// Missing fields in a JSON file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpymasterConfig {
    pub guess: GuessModelConfig,
    pub position: PositionValueConfig,
    pub miss: MissOutcomes,
    /// Neighbours requested for the combined friendly query.
    pub candidate_pool: usize,
    /// Neighbours requested around each friendly word on its own.
    pub per_word_candidates: usize,
    /// Terms scanned per count before giving up on that count.
    pub candidates_per_count: usize,
    /// Times the pool is doubled when nothing allowed is found.
    pub pool_retries: usize,
    pub max_clue_count: usize,
}

impl Default for SpymasterConfig {
    fn default() -> Self {
        Self {
            guess: GuessModelConfig::default(),
            position: PositionValueConfig::default(),
            miss: MissOutcomes::default(),
            candidate_pool: 300,
            per_word_candidates: 40,
            candidates_per_count: 20,
            pool_retries: 2,
            max_clue_count: MAX_CLUE_COUNT,
        }
    }
}

impl SpymasterConfig {
    pub fn with_guess(mut self, guess: GuessModelConfig) -> Self {
        self.guess = guess;
        self
    }

    pub fn with_position(mut self, position: PositionValueConfig) -> Self {
        self.position = position;
        self
    }

    pub fn with_miss(mut self, miss: MissOutcomes) -> Self {
        self.miss = miss;
        self
    }

    pub fn with_candidate_pool(mut self, candidate_pool: usize) -> Self {
        self.candidate_pool = candidate_pool;
        self
    }

    pub fn with_per_word_candidates(mut self, per_word_candidates: usize) -> Self {
        self.per_word_candidates = per_word_candidates;
        self
    }

    pub fn with_candidates_per_count(mut self, candidates_per_count: usize) -> Self {
        self.candidates_per_count = candidates_per_count;
        self
    }

    pub fn with_pool_retries(mut self, pool_retries: usize) -> Self {
        self.pool_retries = pool_retries;
        self
    }

    pub fn with_max_clue_count(mut self, max_clue_count: usize) -> Self {
        self.max_clue_count = max_clue_count;
        self
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for an empty candidate pool,
    /// a zero per-count scan, a clue count outside `1..=9`, or an invalid
    /// nested section.
    pub fn validate(&self) -> Result<()> {
        self.guess.validate()?;
        self.position.validate()?;
        self.miss.validate()?;
        if self.candidate_pool == 0 && self.per_word_candidates == 0 {
            return Err(Error::InvalidConfiguration {
                message: "candidate_pool and per_word_candidates cannot both be zero".to_string(),
            });
        }
        if self.candidates_per_count == 0 {
            return Err(Error::InvalidConfiguration {
                message: "candidates_per_count must be at least 1".to_string(),
            });
        }
        if !(1..=MAX_CLUE_COUNT).contains(&self.max_clue_count) {
            return Err(Error::InvalidConfiguration {
                message: format!("max_clue_count must lie in 1..={MAX_CLUE_COUNT}"),
            });
        }
        Ok(())
    }

    /// Read and validate a JSON configuration file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read configuration {}", path.display()),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
}
