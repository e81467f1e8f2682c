//! The spymaster: per-turn orchestration of clue selection

use std::{collections::BTreeSet, sync::Arc};

use super::{
    cache::SimilarityCache,
    config::SpymasterConfig,
    filter::ClueFilter,
    matrix::{SimilarityMatrix, board_columns},
    position::PositionValues,
    probability::GuessModel,
    scoring::{CandidateClue, ClueScorer, ProbabilityRow, TurnState},
};
use crate::{
    Error, Result,
    game::{Board, Team, board::word_for_term},
    ports::{ClueGiver, Observer, SimilarityOracle},
    types::{Clue, ClueExplanation, CoveredWord},
};

/// Terms this spymaster has already given in the current game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueHistory {
    terms: BTreeSet<String>,
}

impl ClueHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn record(&mut self, term: impl Into<String>) {
        self.terms.insert(term.into());
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.terms.clear();
    }
}

/// One scored candidate pool.
struct Scan {
    matrix: SimilarityMatrix,
    rows: Vec<ProbabilityRow>,
}

/// Clue selection for one team.
///
/// The spymaster owns its similarity cache and clue history; the
/// position-value table is shared and may be handed to several spymasters
/// with [`Spymaster::with_table`].
pub struct Spymaster<'a, O: SimilarityOracle> {
    team: Team,
    oracle: &'a O,
    config: SpymasterConfig,
    model: GuessModel,
    table: Arc<PositionValues>,
    cache: SimilarityCache,
    history: ClueHistory,
    last: Option<ClueExplanation>,
    observers: Vec<Box<dyn Observer>>,
}

impl<'a, O: SimilarityOracle> Spymaster<'a, O> {
    /// Create a spymaster with the default configuration.
    pub fn new(team: Team, oracle: &'a O) -> Result<Self> {
        Self::with_config(team, oracle, SpymasterConfig::default())
    }

    /// # Errors
    ///
    /// Returns [`Error::NotAPlayer`] for a non-playing team and
    /// [`Error::InvalidConfiguration`] for an invalid configuration.
    pub fn with_config(team: Team, oracle: &'a O, config: SpymasterConfig) -> Result<Self> {
        if !team.is_player() {
            return Err(Error::NotAPlayer { team });
        }
        config.validate()?;
        let model = GuessModel::new(config.guess.clone())?;
        let table = Arc::new(PositionValues::build(&config.position)?);
        Ok(Self {
            team,
            oracle,
            config,
            model,
            table,
            cache: SimilarityCache::new(),
            history: ClueHistory::new(),
            last: None,
            observers: Vec::new(),
        })
    }

    /// Share an already-built table instead of the one built from the config.
    pub fn with_table(mut self, table: Arc<PositionValues>) -> Self {
        self.table = table;
        self
    }

    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn config(&self) -> &SpymasterConfig {
        &self.config
    }

    pub fn table(&self) -> &Arc<PositionValues> {
        &self.table
    }

    pub fn history(&self) -> &ClueHistory {
        &self.history
    }

    pub fn cache(&self) -> &SimilarityCache {
        &self.cache
    }

    /// Full explanation of the most recent clue.
    pub fn last_explanation(&self) -> Option<&ClueExplanation> {
        self.last.as_ref()
    }

    /// Covered words of the most recent clue, most confident first.
    pub fn explain_last_clue(&self) -> &[CoveredWord] {
        self.last
            .as_ref()
            .map(|explanation| explanation.covered.as_slice())
            .unwrap_or(&[])
    }

    /// Forget the clue history and the last explanation. The cache is kept.
    pub fn reset(&mut self) {
        self.history.clear();
        self.last = None;
    }

    /// Choose a clue for the acting team on `board`.
    ///
    /// Candidates come from the oracle's neighbourhood of the friendly
    /// words. If no candidate survives the board filter and the history,
    /// the pool is doubled up to `pool_retries` times; after that the most
    /// confident one-word clue is given even if it was used before.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] if either team has no hidden card left.
    /// - [`Error::OracleUnavailable`] if a lookup fails.
    /// - [`Error::ExhaustedCandidates`] if no legal clue exists at all.
    pub fn choose_clue(&mut self, board: &Board) -> Result<Clue> {
        let opponent = self.team.opponent().ok_or(Error::NotAPlayer { team: self.team })?;
        let mine = board.remaining(self.team);
        let theirs = board.remaining(opponent);
        if mine == 0 || theirs == 0 {
            return Err(Error::GameOver);
        }
        let state = TurnState {
            mine,
            theirs,
            miss: self.config.miss.for_board(
                theirs,
                board.remaining(Team::Neutral),
                board.remaining(Team::Assassin),
            ),
        };

        let oracle = self.oracle;
        let filter = ClueFilter::new(board.words()).with_forms(oracle);
        let scorer = ClueScorer::new(
            &self.model,
            &self.table,
            self.config.candidates_per_count,
            self.config.max_clue_count,
        );

        let mut scan = None;
        let mut pool = 0;
        for attempt in 0..=self.config.pool_retries {
            let terms = self.candidate_terms(board, attempt)?;
            if attempt > 0 && terms.len() <= pool {
                tracing::debug!(pool, "oracle offers no further candidates");
                break;
            }
            pool = terms.len();

            let matrix = SimilarityMatrix::build(
                oracle,
                &mut self.cache,
                terms,
                board_columns(board, self.team),
            )?;
            let rows = scorer.probability_rows(&matrix);
            let history = &self.history;
            let best = scorer.best(&matrix, &rows, &state, |term| {
                filter.allows(term) && !history.contains(term)
            });
            if let Some(candidate) = best {
                return self.commit(candidate, false);
            }
            tracing::warn!(team = %self.team, pool, attempt, "no viable clue in candidate pool");
            scan = Some(Scan { matrix, rows });
        }

        let fallback = scan.and_then(|scan| {
            scorer.fallback(&scan.matrix, &scan.rows, &state, |term| filter.allows(term))
        });
        match fallback {
            Some(candidate) => {
                tracing::warn!(team = %self.team, term = %candidate.term, "using fallback clue");
                self.commit(candidate, true)
            }
            None => Err(Error::ExhaustedCandidates {
                team: self.team,
                pool,
            }),
        }
    }

    /// Neighbours of the friendly words, joint query first, deduplicated.
    fn candidate_terms(&self, board: &Board, attempt: usize) -> Result<Vec<String>> {
        let scale = 1usize << attempt.min(16);
        let friendly: Vec<String> = board_columns(board, self.team)
            .into_iter()
            .filter(|column| column.is_friendly())
            .map(|column| column.term)
            .collect();
        let weighted: Vec<(&str, f64)> = friendly.iter().map(|t| (t.as_str(), 1.0)).collect();

        let mut terms = Vec::new();
        let mut seen = BTreeSet::new();
        let mut extend = |found: Vec<String>| {
            for term in found {
                if seen.insert(term.clone()) {
                    terms.push(term);
                }
            }
        };

        if self.config.candidate_pool > 0 {
            extend(
                self.oracle
                    .most_similar(&weighted, self.config.candidate_pool.saturating_mul(scale))?,
            );
        }
        if self.config.per_word_candidates > 0 {
            for query in &weighted {
                extend(self.oracle.most_similar(
                    std::slice::from_ref(query),
                    self.config.per_word_candidates.saturating_mul(scale),
                )?);
            }
        }
        Ok(terms)
    }

    fn commit(&mut self, candidate: CandidateClue, fallback: bool) -> Result<Clue> {
        let clue = Clue::new(candidate.count, word_for_term(&candidate.term));
        let explanation = ClueExplanation {
            clue: clue.clone(),
            covered: candidate.covered,
            expected_value: candidate.expected_value,
            fallback,
        };

        let (hits, misses) = self.cache.stats();
        tracing::debug!(hits, misses, entries = self.cache.len(), "similarity cache");
        tracing::info!(
            team = %self.team,
            %clue,
            expected_value = explanation.expected_value,
            fallback,
            "clue selected"
        );

        for observer in &mut self.observers {
            observer.on_clue_chosen(self.team, &explanation)?;
        }
        self.history.record(candidate.term);
        self.last = Some(explanation);
        Ok(clue)
    }
}

impl<O: SimilarityOracle> ClueGiver for Spymaster<'_, O> {
    fn team(&self) -> Team {
        self.team
    }

    fn give_clue(&mut self, board: &Board) -> Result<Clue> {
        self.choose_clue(board)
    }

    fn new_game(&mut self) {
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryOracle;

    fn oracle() -> InMemoryOracle {
        InMemoryOracle::new()
            .with_terms(["egypt", "corner", "row"])
            .with_vocabulary(["pyramid", "pharaoh"])
            .with_similarity("pyramid", "egypt", 0.7)
            .with_similarity("pharaoh", "egypt", 0.6)
    }

    fn board() -> Board {
        Board::new(
            vec!["EGYPT".into(), "CORNER".into(), "ROW".into()],
            vec![Team::Red, Team::Blue, Team::Assassin],
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_non_player() {
        let oracle = oracle();
        assert!(matches!(
            Spymaster::new(Team::Neutral, &oracle),
            Err(Error::NotAPlayer { team: Team::Neutral })
        ));
    }

    #[test]
    fn test_history_and_explanation() {
        let oracle = oracle();
        let mut spymaster = Spymaster::new(Team::Red, &oracle).unwrap();
        assert!(spymaster.explain_last_clue().is_empty());

        let first = spymaster.choose_clue(&board()).unwrap();
        assert_eq!(first, Clue::new(1, "pyramid"));
        assert_eq!(spymaster.explain_last_clue()[0].word, "EGYPT");
        assert!(spymaster.history().contains("pyramid"));

        let second = spymaster.choose_clue(&board()).unwrap();
        assert_eq!(second, Clue::new(1, "pharaoh"));

        spymaster.reset();
        assert!(spymaster.history().is_empty());
        assert_eq!(spymaster.choose_clue(&board()).unwrap(), first);
    }

    #[test]
    fn test_game_over_when_a_team_is_cleared() {
        let oracle = oracle();
        let mut spymaster = Spymaster::new(Team::Blue, &oracle).unwrap();
        let mut board = board();
        board.reveal("EGYPT").unwrap();
        assert!(matches!(spymaster.choose_clue(&board), Err(Error::GameOver)));
    }
}
