//! Simulated guesser driven by the same similarity oracle

use super::{Board, Team, board::term_for_word};
use crate::{
    Error, Result,
    ports::{Guesser, SimilarityOracle},
    spymaster::SimilarityCache,
    types::Clue,
};

/// Guesses the hidden word most similar to the clue.
///
/// The first guess is always made. Further guesses, up to the clue count,
/// are made only while the best remaining word is at least `threshold`
/// similar to the clue.
pub struct SimilarityGuesser<'a, O: SimilarityOracle> {
    team: Team,
    oracle: &'a O,
    threshold: f64,
    cache: SimilarityCache,
}

impl<'a, O: SimilarityOracle> SimilarityGuesser<'a, O> {
    pub const DEFAULT_THRESHOLD: f64 = 0.3;

    pub fn new(team: Team, oracle: &'a O) -> Result<Self> {
        if !team.is_player() {
            return Err(Error::NotAPlayer { team });
        }
        Ok(Self {
            team,
            oracle,
            threshold: Self::DEFAULT_THRESHOLD,
            cache: SimilarityCache::new(),
        })
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Hidden word closest to `clue`, earliest on the board on ties.
    fn closest(&mut self, board: &Board, clue: &Clue) -> Result<Option<(String, f64)>> {
        let clue_term = term_for_word(&clue.word);
        let mut best: Option<(String, f64)> = None;
        for card in board.unrevealed() {
            let similarity =
                self.cache
                    .similarity(self.oracle, &clue_term, &term_for_word(&card.word))?;
            if best.as_ref().is_none_or(|(_, s)| similarity > *s) {
                best = Some((card.word.clone(), similarity));
            }
        }
        Ok(best)
    }
}

impl<O: SimilarityOracle> Guesser for SimilarityGuesser<'_, O> {
    fn team(&self) -> Team {
        self.team
    }

    fn guess(&mut self, board: &Board, clue: &Clue, guessed: usize) -> Result<Option<String>> {
        if guessed > 0 && guessed >= clue.count {
            return Ok(None);
        }
        let Some((word, similarity)) = self.closest(board, clue)? else {
            return Ok(None);
        };
        if guessed == 0 || similarity >= self.threshold {
            Ok(Some(word))
        } else {
            tracing::debug!(team = %self.team, %clue, similarity, "guesser stops");
            Ok(None)
        }
    }
}
