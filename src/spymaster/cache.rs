//! Memoized pairwise similarity lookups

use std::collections::HashMap;

use crate::{Error, Result, ports::SimilarityOracle};

/// Pairwise similarity cache keyed by unordered term pairs.
///
/// Owned by a spymaster rather than shared globally, so separate games stay
/// isolated. Entries are never evicted; the vocabulary a game touches is
/// small.
#[derive(Debug, Default, Clone)]
pub struct SimilarityCache {
    entries: HashMap<(String, String), f64>,
    hits: usize,
    misses: usize,
}

fn key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

impl SimilarityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Similarity of two terms, asking the oracle only on the first lookup.
    ///
    /// Values are clamped into `[-1, 1]`.
    ///
    /// # Errors
    ///
    /// Propagates oracle failures, and returns [`Error::OracleUnavailable`]
    /// if the oracle answers with a non-finite value. Failures are not cached.
    pub fn similarity<O: SimilarityOracle + ?Sized>(
        &mut self,
        oracle: &O,
        a: &str,
        b: &str,
    ) -> Result<f64> {
        let key = key(a, b);
        if let Some(&value) = self.entries.get(&key) {
            self.hits += 1;
            return Ok(value);
        }

        let value = oracle.similarity(a, b)?;
        if !value.is_finite() {
            return Err(Error::OracleUnavailable {
                term: format!("{a}/{b}"),
                reason: format!("similarity {value} is not finite"),
            });
        }
        let value = value.clamp(-1.0, 1.0);
        self.misses += 1;
        self.entries.insert(key, value);
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (hits, misses) since creation.
    pub fn stats(&self) -> (usize, usize) {
        (self.hits, self.misses)
    }
}
