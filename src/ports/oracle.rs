//! Similarity oracle port - the semantic space the engine queries.
//!
//! The engine never sees vectors or indexes. It asks two questions of the
//! oracle (how similar are two terms, and which terms best match a weighted
//! set of terms) and optionally a third (is one term a form of another).

use crate::Result;

/// Port for a fixed semantic-similarity space.
///
/// Implementations must be deterministic for a given snapshot: the same
/// queries always yield the same answers, which lets the engine cache them.
///
/// # Examples
///
/// ```
/// use codenames::adapters::InMemoryOracle;
/// use codenames::ports::SimilarityOracle;
///
/// let oracle = InMemoryOracle::new()
///     .with_vocabulary(["pyramid"])
///     .with_similarity("pyramid", "egypt", 0.6);
///
/// assert_eq!(oracle.similarity("egypt", "pyramid")?, 0.6);
/// assert_eq!(oracle.most_similar(&[("egypt", 1.0)], 5)?, vec!["pyramid"]);
/// # Ok::<(), codenames::Error>(())
/// ```
pub trait SimilarityOracle {
    /// Similarity of two terms in `[-1, 1]`. Symmetric.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OracleUnavailable`] if either term is unknown
    /// or the lookup fails.
    fn similarity(&self, a: &str, b: &str) -> Result<f64>;

    /// Terms ranked by aggregate weighted similarity to `weighted`, best first.
    ///
    /// The query terms themselves are never returned.
    fn most_similar(&self, weighted: &[(&str, f64)], limit: usize) -> Result<Vec<String>>;

    /// Whether `candidate` is a morphological form of `word`.
    ///
    /// Oracles without lemma data keep the default, which leaves the clue
    /// filter to its lexical rules.
    fn is_form_of(&self, _word: &str, _candidate: &str) -> bool {
        false
    }
}

impl<T: SimilarityOracle + ?Sized> SimilarityOracle for &T {
    fn similarity(&self, a: &str, b: &str) -> Result<f64> {
        (**self).similarity(a, b)
    }

    fn most_similar(&self, weighted: &[(&str, f64)], limit: usize) -> Result<Vec<String>> {
        (**self).most_similar(weighted, limit)
    }

    fn is_form_of(&self, word: &str, candidate: &str) -> bool {
        (**self).is_form_of(word, candidate)
    }
}
