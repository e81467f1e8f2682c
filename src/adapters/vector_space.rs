//! Dense embedding oracle loaded from word-vector text files.
//!
//! Reads the plain text format shared by word2vec and GloVe exports: one
//! term per line followed by its components, with an optional
//! `<count> <dimension>` header line. Vectors are L2-normalised on load so
//! similarity is a dot product.

use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{Error, Result, ports::SimilarityOracle};

/// Brute-force cosine-similarity oracle over an in-memory embedding.
#[derive(Debug, Clone, Default)]
pub struct VectorSpace {
    terms: Vec<String>,
    index: HashMap<String, usize>,
    vectors: Vec<Vec<f32>>,
    dimension: usize,
}

fn normalized(mut vector: Vec<f32>) -> Vec<f32> {
    let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        vector.iter_mut().for_each(|x| *x /= norm);
    }
    vector
}

fn dot(a: &[f32], b: &[f32]) -> f64 {
    a.iter().zip(b).map(|(x, y)| f64::from(*x) * f64::from(*y)).sum()
}

impl VectorSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a term. Later insertions of the same term replace earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVectorLine`] if the dimension differs from
    /// vectors already present or a component is not finite.
    pub fn insert(&mut self, term: impl Into<String>, vector: Vec<f32>) -> Result<()> {
        let term = term.into();
        if vector.is_empty() {
            return Err(Error::InvalidVectorLine {
                line: self.terms.len() + 1,
                reason: format!("'{term}' has an empty vector"),
            });
        }
        if self.dimension != 0 && vector.len() != self.dimension {
            return Err(Error::InvalidVectorLine {
                line: self.terms.len() + 1,
                reason: format!(
                    "'{term}' has {} components, expected {}",
                    vector.len(),
                    self.dimension
                ),
            });
        }
        if vector.iter().any(|x| !x.is_finite()) {
            return Err(Error::InvalidVectorLine {
                line: self.terms.len() + 1,
                reason: format!("'{term}' has a non-finite component"),
            });
        }
        self.dimension = vector.len();

        let vector = normalized(vector);
        match self.index.get(&term) {
            Some(&i) => self.vectors[i] = vector,
            None => {
                self.index.insert(term.clone(), self.terms.len());
                self.terms.push(term);
                self.vectors.push(vector);
            }
        }
        Ok(())
    }

    /// Load vectors from a text file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open word vectors at {}", path.display()),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse vectors from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut space = Self::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            let mut fields = line.split_whitespace();
            let Some(term) = fields.next() else {
                continue;
            };
            let components: Vec<&str> = fields.collect();

            // word2vec header: "<count> <dimension>"
            if line_number == 1
                && components.len() == 1
                && term.parse::<usize>().is_ok()
                && components[0].parse::<usize>().is_ok()
            {
                continue;
            }

            let vector = components
                .iter()
                .map(|c| c.parse::<f32>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| Error::InvalidVectorLine {
                    line: line_number,
                    reason: e.to_string(),
                })?;
            space
                .insert(term, vector)
                .map_err(|e| match e {
                    Error::InvalidVectorLine { reason, .. } => Error::InvalidVectorLine {
                        line: line_number,
                        reason,
                    },
                    other => other,
                })?;
        }
        Ok(space)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    fn vector(&self, term: &str) -> Result<&[f32]> {
        self.index
            .get(term)
            .map(|&i| self.vectors[i].as_slice())
            .ok_or_else(|| Error::OracleUnavailable {
                term: term.to_string(),
                reason: "term has no vector".to_string(),
            })
    }
}

impl SimilarityOracle for VectorSpace {
    fn similarity(&self, a: &str, b: &str) -> Result<f64> {
        Ok(dot(self.vector(a)?, self.vector(b)?).clamp(-1.0, 1.0))
    }

    fn most_similar(&self, weighted: &[(&str, f64)], limit: usize) -> Result<Vec<String>> {
        let mut query = vec![0.0f32; self.dimension];
        for (term, weight) in weighted {
            let vector = self.vector(term)?;
            for (q, x) in query.iter_mut().zip(vector) {
                *q += *weight as f32 * x;
            }
        }
        let query = normalized(query);

        let mut scored: Vec<(usize, f64)> = self
            .vectors
            .iter()
            .enumerate()
            .filter(|(i, _)| !weighted.iter().any(|(term, _)| *term == self.terms[*i]))
            .map(|(i, vector)| (i, dot(&query, vector)))
            .collect();
        scored.sort_by(|(ia, a), (ib, b)| {
            b.total_cmp(a)
                .then_with(|| self.terms[*ia].cmp(&self.terms[*ib]))
        });

        Ok(scored
            .into_iter()
            .take(limit)
            .map(|(i, _)| self.terms[i].clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use super::*;

    const VECTORS: &str = "\
4 2
egypt 1.0 0.0
pyramid 0.9 0.1
corner 0.0 1.0
boxing 0.1 0.9
";

    #[test]
    fn test_parse_with_header() {
        let space = VectorSpace::from_reader(Cursor::new(VECTORS)).unwrap();
        assert_eq!(space.len(), 4);
        assert_eq!(space.dimension(), 2);
        assert!(space.contains("pyramid"));
    }

    #[test]
    fn test_cosine_similarity() {
        let space = VectorSpace::from_reader(Cursor::new(VECTORS)).unwrap();
        assert!((space.similarity("egypt", "egypt").unwrap() - 1.0).abs() < 1e-6);
        assert!(space.similarity("egypt", "corner").unwrap().abs() < 1e-6);
        assert!(space.similarity("egypt", "pyramid").unwrap() > 0.9);
    }

    #[test]
    fn test_most_similar_excludes_query() {
        let space = VectorSpace::from_reader(Cursor::new(VECTORS)).unwrap();
        let ranked = space.most_similar(&[("egypt", 1.0)], 2).unwrap();
        assert_eq!(ranked, vec!["pyramid", "boxing"]);
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let err = VectorSpace::from_reader(Cursor::new("a 1 2\nb 1 2 3\n")).unwrap_err();
        assert!(matches!(err, Error::InvalidVectorLine { line: 2, .. }));
        let err = VectorSpace::from_reader(Cursor::new("a 1 x\n")).unwrap_err();
        assert!(matches!(err, Error::InvalidVectorLine { line: 1, .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(VECTORS.as_bytes()).unwrap();
        let space = VectorSpace::load(file.path()).unwrap();
        assert_eq!(space.len(), 4);
        assert!(VectorSpace::load(Path::new("/nonexistent/vectors.txt")).is_err());
    }
}
