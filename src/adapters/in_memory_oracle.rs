//! In-memory similarity oracle for tests and small fixtures.
//!
//! This adapter answers from an explicit similarity table instead of an
//! embedding, so tests can state exactly which clue should win and why.

use std::collections::{HashMap, HashSet};

use crate::{Error, Result, ports::SimilarityOracle};

/// Similarity oracle backed by an explicit table.
///
/// - Terms added with [`with_vocabulary`](Self::with_vocabulary) are the
///   candidates [`most_similar`](SimilarityOracle::most_similar) ranks.
/// - Every term mentioned anywhere is known; pairs with no entry have
///   similarity zero, and a term has similarity one with itself.
/// - Unknown terms fail with [`Error::OracleUnavailable`], like a word
///   missing from an embedding.
///
/// # Examples
///
/// ```
/// use codenames::adapters::InMemoryOracle;
/// use codenames::ports::SimilarityOracle;
///
/// let oracle = InMemoryOracle::new()
///     .with_terms(["egypt", "corner"])
///     .with_vocabulary(["pyramid", "boxing"])
///     .with_similarity("pyramid", "egypt", 0.6)
///     .with_similarity("boxing", "corner", 0.4);
///
/// let ranked = oracle.most_similar(&[("corner", 1.0)], 2)?;
/// assert_eq!(ranked, vec!["boxing", "pyramid"]);
/// # Ok::<(), codenames::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryOracle {
    vocabulary: Vec<String>,
    known: HashSet<String>,
    pairs: HashMap<(String, String), f64>,
    forms: HashSet<(String, String)>,
}

fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

impl InMemoryOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add candidate clue terms, kept in insertion order.
    pub fn with_vocabulary<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for term in terms {
            let term = term.into();
            if !self.vocabulary.contains(&term) {
                self.known.insert(term.clone());
                self.vocabulary.push(term);
            }
        }
        self
    }

    /// Make terms known without offering them as candidates (board words).
    pub fn with_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known.extend(terms.into_iter().map(Into::into));
        self
    }

    /// Set the similarity of a pair. Both terms become known.
    pub fn with_similarity(mut self, a: &str, b: &str, value: f64) -> Self {
        self.known.insert(a.to_string());
        self.known.insert(b.to_string());
        self.pairs.insert(pair_key(a, b), value);
        self
    }

    /// Record that `candidate` is a form of `word` (e.g. `mice` of `mouse`).
    pub fn with_form(mut self, word: &str, candidate: &str) -> Self {
        self.forms
            .insert((word.to_string(), candidate.to_string()));
        self
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    fn check_known(&self, term: &str) -> Result<()> {
        if self.known.contains(term) {
            Ok(())
        } else {
            Err(Error::OracleUnavailable {
                term: term.to_string(),
                reason: "term not in the similarity table".to_string(),
            })
        }
    }
}

impl SimilarityOracle for InMemoryOracle {
    fn similarity(&self, a: &str, b: &str) -> Result<f64> {
        self.check_known(a)?;
        self.check_known(b)?;
        if a == b {
            return Ok(1.0);
        }
        Ok(self.pairs.get(&pair_key(a, b)).copied().unwrap_or(0.0))
    }

    fn most_similar(&self, weighted: &[(&str, f64)], limit: usize) -> Result<Vec<String>> {
        for (term, _) in weighted {
            self.check_known(term)?;
        }

        let mut scored = Vec::with_capacity(self.vocabulary.len());
        for term in &self.vocabulary {
            if weighted.iter().any(|(query, _)| query == term) {
                continue;
            }
            let mut score = 0.0;
            for (query, weight) in weighted {
                score += weight * self.similarity(term, query)?;
            }
            scored.push((term, score));
        }

        scored.sort_by(|(ta, a), (tb, b)| b.total_cmp(a).then_with(|| ta.cmp(tb)));
        Ok(scored
            .into_iter()
            .take(limit)
            .map(|(term, _)| term.clone())
            .collect())
    }

    fn is_form_of(&self, word: &str, candidate: &str) -> bool {
        self.forms
            .contains(&(word.to_string(), candidate.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_and_default_similarity() {
        let oracle = InMemoryOracle::new().with_terms(["a", "b"]);
        assert_eq!(oracle.similarity("a", "a").unwrap(), 1.0);
        assert_eq!(oracle.similarity("a", "b").unwrap(), 0.0);
    }

    #[test]
    fn test_unknown_term_fails() {
        let oracle = InMemoryOracle::new().with_terms(["a"]);
        assert!(matches!(
            oracle.similarity("a", "zebra"),
            Err(Error::OracleUnavailable { .. })
        ));
        assert!(oracle.most_similar(&[("zebra", 1.0)], 3).is_err());
    }

    #[test]
    fn test_most_similar_excludes_query_and_breaks_ties_lexically() {
        let oracle = InMemoryOracle::new()
            .with_vocabulary(["b", "a", "query", "c"])
            .with_similarity("c", "query", 0.9);
        let ranked = oracle.most_similar(&[("query", 1.0)], 10).unwrap();
        assert_eq!(ranked, vec!["c", "a", "b"]);
        assert_eq!(oracle.most_similar(&[("query", 1.0)], 1).unwrap(), vec!["c"]);
    }

    #[test]
    fn test_negative_weights_push_terms_down() {
        let oracle = InMemoryOracle::new()
            .with_terms(["good", "bad"])
            .with_vocabulary(["x", "y"])
            .with_similarity("x", "good", 0.5)
            .with_similarity("x", "bad", 0.9)
            .with_similarity("y", "good", 0.4);
        let ranked = oracle
            .most_similar(&[("good", 1.0), ("bad", -1.0)], 2)
            .unwrap();
        assert_eq!(ranked, vec!["y", "x"]);
    }
}
