//! Clue scoring: probability rows, per-count selection and expected value
//!
//! For every candidate term the scorer estimates, per friendly word, the
//! probability that a guesser finds it before any distractor. Sorting those
//! probabilities and taking running products gives `P_n`, the chance of
//! converting the first `n` words in a row. Each count `n` keeps its best
//! legal term, and the counts are compared on a common scale by the win
//! probability they lead to (see [`ClueScorer::expected_value`]).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::{
    matrix::SimilarityMatrix,
    position::PositionValues,
    probability::{DistractorMaxima, GuessModel},
};
use crate::{
    Error, Result,
    game::Team,
    types::{CoveredWord, Probability},
};

/// How a wrong guess splits across the categories it can land on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissOutcomes {
    pub opposing: f64,
    pub neutral: f64,
    pub assassin: f64,
}

impl Default for MissOutcomes {
    fn default() -> Self {
        Self {
            opposing: 0.5,
            neutral: 0.4,
            assassin: 0.1,
        }
    }
}

impl MissOutcomes {
    pub fn validate(&self) -> Result<()> {
        let weights = [self.opposing, self.neutral, self.assassin];
        if weights.iter().any(|w| !(w.is_finite() && *w >= 0.0)) {
            return Err(Error::InvalidConfiguration {
                message: "miss outcome weights must be non-negative".to_string(),
            });
        }
        if weights.iter().sum::<f64>() <= 0.0 {
            return Err(Error::InvalidConfiguration {
                message: "miss outcome weights must not all be zero".to_string(),
            });
        }
        Ok(())
    }

    /// Drop categories with no hidden card left and renormalize the rest.
    pub fn for_board(&self, opposing_left: usize, neutral_left: usize, assassin_left: usize) -> Self {
        let keep = |weight: f64, left: usize| if left > 0 { weight } else { 0.0 };
        let opposing = keep(self.opposing, opposing_left);
        let neutral = keep(self.neutral, neutral_left);
        let assassin = keep(self.assassin, assassin_left);
        let total = opposing + neutral + assassin;
        if total <= 0.0 {
            return Self {
                opposing: 0.0,
                neutral: 0.0,
                assassin: 0.0,
            };
        }
        Self {
            opposing: opposing / total,
            neutral: neutral / total,
            assassin: assassin / total,
        }
    }
}

/// Sorted friendly-word probabilities for one candidate term.
#[derive(Debug, Clone)]
pub struct ProbabilityRow {
    /// Row index into the similarity matrix.
    pub row: usize,
    /// (column, probability), most probable first, every friendly word.
    pub ranked: Vec<(usize, f64)>,
    /// `cumulative[n - 1] = p_1 · … · p_n`, capped at the maximum clue count.
    pub cumulative: Vec<f64>,
}

/// A scored (count, term) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateClue {
    pub term: String,
    pub count: usize,
    /// `p_1 ≥ … ≥ p_count`.
    pub probabilities: Vec<f64>,
    /// Friendly words at least as likely as the `count`-th, most likely first.
    pub covered: Vec<CoveredWord>,
    pub expected_value: f64,
}

/// Card counts the expected value is evaluated at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnState {
    pub mine: usize,
    pub theirs: usize,
    pub miss: MissOutcomes,
}

/// Composes the guess model with the position-value table.
pub struct ClueScorer<'a> {
    model: &'a GuessModel,
    table: &'a PositionValues,
    candidates_per_count: usize,
    max_clue_count: usize,
}

fn by_score_then_term(a: (f64, &str), b: (f64, &str)) -> Ordering {
    b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1))
}

/// Higher expected value first, then the smaller count, then the term.
fn by_value_then_count(a: &CandidateClue, b: &CandidateClue) -> Ordering {
    b.expected_value
        .total_cmp(&a.expected_value)
        .then_with(|| a.count.cmp(&b.count))
        .then_with(|| a.term.cmp(&b.term))
}

impl<'a> ClueScorer<'a> {
    pub fn new(
        model: &'a GuessModel,
        table: &'a PositionValues,
        candidates_per_count: usize,
        max_clue_count: usize,
    ) -> Self {
        Self {
            model,
            table,
            candidates_per_count,
            max_clue_count,
        }
    }

    /// Per-term friendly probabilities, sorted, with running products.
    ///
    /// Rows producing any non-finite probability are dropped.
    pub fn probability_rows(&self, matrix: &SimilarityMatrix) -> Vec<ProbabilityRow> {
        let columns = matrix.columns();
        let friendly: Vec<usize> = (0..columns.len())
            .filter(|&c| columns[c].is_friendly())
            .collect();
        if friendly.is_empty() {
            return Vec::new();
        }

        let pool_max = |row: &[f64], team: Team| -> Option<f64> {
            columns
                .iter()
                .zip(row)
                .filter(|(column, _)| column.team == team && !column.is_friendly())
                .map(|(_, &s)| s)
                .reduce(f64::max)
        };

        let mut rows = Vec::with_capacity(matrix.terms().len());
        for (index, _) in matrix.terms().iter().enumerate() {
            let sims = matrix.row(index);
            let maxima = DistractorMaxima {
                neutral: pool_max(sims, Team::Neutral),
                opposing: columns
                    .iter()
                    .zip(sims)
                    .filter(|(column, _)| {
                        matches!(column.team, Team::Red | Team::Blue) && !column.is_friendly()
                    })
                    .map(|(_, &s)| s)
                    .reduce(f64::max),
                assassin: pool_max(sims, Team::Assassin),
            };

            let mut ranked: Vec<(usize, f64)> = friendly
                .iter()
                .map(|&c| (c, self.model.word_probability(sims[c], &maxima)))
                .collect();
            if ranked.iter().any(|(_, p)| !p.is_finite()) {
                tracing::debug!(term = %matrix.terms()[index], "dropping term with non-finite probability");
                continue;
            }
            ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

            let cumulative = ranked
                .iter()
                .take(self.max_clue_count)
                .scan(1.0, |product, &(_, p)| {
                    *product *= p;
                    Some(*product)
                })
                .collect();
            rows.push(ProbabilityRow {
                row: index,
                ranked,
                cumulative,
            });
        }
        rows
    }

    /// Win probability of the acting team after giving a clue whose words
    /// are converted in order with probabilities `probabilities`.
    ///
    /// At step `i` (with `i` words already converted) the guesser misses with
    /// probability `1 - p_i`; the miss lands on an opposing, neutral or
    /// assassin card per `state.miss`, and the opponent then moves. If every
    /// word converts, the opponent moves against `mine - n` cards.
    pub fn expected_value(&self, probabilities: &[f64], state: &TurnState) -> f64 {
        let TurnState { mine, theirs, miss } = *state;
        let mut value = 0.0;
        let mut reach = 1.0;
        for (converted, &p) in probabilities.iter().enumerate() {
            let mine_left = mine.saturating_sub(converted);
            let opponent = miss.opposing * self.table.value(theirs.saturating_sub(1), mine_left)
                + miss.neutral * self.table.value(theirs, mine_left)
                + miss.assassin;
            value += reach * (1.0 - p) * (1.0 - opponent);
            reach *= p;
        }
        let mine_left = mine.saturating_sub(probabilities.len());
        value + reach * (1.0 - self.table.value(theirs, mine_left))
    }

    fn candidate(
        &self,
        matrix: &SimilarityMatrix,
        row: &ProbabilityRow,
        count: usize,
        state: &TurnState,
    ) -> Option<CandidateClue> {
        let probabilities: Vec<f64> = row.ranked.iter().take(count).map(|&(_, p)| p).collect();
        let threshold = *probabilities.last()?;
        let expected_value = self.expected_value(&probabilities, state);
        if !expected_value.is_finite() {
            return None;
        }
        let covered = row
            .ranked
            .iter()
            .take_while(|&&(_, p)| p >= threshold)
            .map(|&(c, p)| CoveredWord {
                word: matrix.columns()[c].word.clone(),
                probability: Probability::clamped(p),
            })
            .collect();
        Some(CandidateClue {
            term: matrix.terms()[row.row].clone(),
            count,
            probabilities,
            covered,
            expected_value,
        })
    }

    /// Best allowed term for each count `n`.
    ///
    /// For each `n` the top `candidates_per_count` terms by `P_n` are
    /// scanned and the first one `allowed` accepts is kept.
    pub fn candidates<F>(
        &self,
        matrix: &SimilarityMatrix,
        rows: &[ProbabilityRow],
        state: &TurnState,
        allowed: F,
    ) -> Vec<CandidateClue>
    where
        F: Fn(&str) -> bool,
    {
        let max_count = rows.iter().map(|r| r.cumulative.len()).max().unwrap_or(0);
        let terms = matrix.terms();
        let mut found = Vec::new();

        for count in 1..=max_count {
            let mut ranked: Vec<&ProbabilityRow> =
                rows.iter().filter(|r| r.cumulative.len() >= count).collect();
            ranked.sort_by(|a, b| {
                by_score_then_term(
                    (a.cumulative[count - 1], terms[a.row].as_str()),
                    (b.cumulative[count - 1], terms[b.row].as_str()),
                )
            });

            let chosen = ranked
                .into_iter()
                .take(self.candidates_per_count)
                .find(|r| allowed(&terms[r.row]));
            let Some(row) = chosen else {
                tracing::debug!(count, "no allowed term among the top candidates");
                continue;
            };
            if let Some(candidate) = self.candidate(matrix, row, count, state) {
                tracing::debug!(
                    count,
                    term = %candidate.term,
                    joint = row.cumulative[count - 1],
                    expected_value = candidate.expected_value,
                    "candidate for count"
                );
                found.push(candidate);
            }
        }
        found
    }

    /// Highest expected value; ties go to the smaller count, then the term.
    pub fn best<F>(
        &self,
        matrix: &SimilarityMatrix,
        rows: &[ProbabilityRow],
        state: &TurnState,
        allowed: F,
    ) -> Option<CandidateClue>
    where
        F: Fn(&str) -> bool,
    {
        self.candidates(matrix, rows, state, allowed)
            .into_iter()
            .min_by(by_value_then_count)
    }

    /// The single most confident one-word clue among all rows that
    /// `allowed` accepts, with no cap on how far down the ranking it looks.
    pub fn fallback<F>(
        &self,
        matrix: &SimilarityMatrix,
        rows: &[ProbabilityRow],
        state: &TurnState,
        allowed: F,
    ) -> Option<CandidateClue>
    where
        F: Fn(&str) -> bool,
    {
        let terms = matrix.terms();
        let mut ranked: Vec<&ProbabilityRow> =
            rows.iter().filter(|r| !r.cumulative.is_empty()).collect();
        ranked.sort_by(|a, b| {
            by_score_then_term(
                (a.cumulative[0], terms[a.row].as_str()),
                (b.cumulative[0], terms[b.row].as_str()),
            )
        });
        ranked
            .into_iter()
            .filter(|r| allowed(&terms[r.row]))
            .find_map(|row| self.candidate(matrix, row, 1, state))
    }
}
