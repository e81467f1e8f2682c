//! Candidate-term × board-word similarity matrix

use super::cache::SimilarityCache;
use crate::{
    Result,
    game::{Board, Team, board::term_for_word},
    ports::SimilarityOracle,
};

/// An unrevealed board word as the scorer sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardColumn {
    /// Surface form as printed on the board.
    pub word: String,
    /// Oracle term for the word.
    pub term: String,
    pub team: Team,
    /// Payoff to the acting team, see [`Team::value_for_team`].
    pub payoff: f64,
}

impl BoardColumn {
    pub fn is_friendly(&self) -> bool {
        self.payoff > 0.0
    }
}

/// Columns for every unrevealed word, in board order.
pub fn board_columns(board: &Board, acting: Team) -> Vec<BoardColumn> {
    board
        .unrevealed()
        .map(|card| BoardColumn {
            word: card.word.clone(),
            term: term_for_word(&card.word),
            team: card.team,
            payoff: card.team.value_for_team(acting),
        })
        .collect()
}

/// Dense row-major matrix of similarities between candidate terms and columns.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    terms: Vec<String>,
    columns: Vec<BoardColumn>,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Fill the matrix through the cache.
    ///
    /// # Errors
    ///
    /// Propagates the first oracle failure; a partial matrix is never returned.
    pub fn build<O: SimilarityOracle + ?Sized>(
        oracle: &O,
        cache: &mut SimilarityCache,
        terms: Vec<String>,
        columns: Vec<BoardColumn>,
    ) -> Result<Self> {
        let mut values = Vec::with_capacity(terms.len() * columns.len());
        for term in &terms {
            for column in &columns {
                values.push(cache.similarity(oracle, term, &column.term)?);
            }
        }
        Ok(Self {
            terms,
            columns,
            values,
        })
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn columns(&self) -> &[BoardColumn] {
        &self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.values[row * self.columns.len() + column]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let width = self.columns.len();
        &self.values[row * width..(row + 1) * width]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryOracle;

    #[test]
    fn test_columns_skip_revealed_words() {
        let mut board = Board::new(
            vec!["EGYPT".into(), "CORNER".into(), "ROW".into()],
            vec![Team::Blue, Team::Red, Team::Assassin],
        )
        .unwrap();
        board.reveal("CORNER").unwrap();

        let columns = board_columns(&board, Team::Blue);
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].term, "egypt");
        assert!(columns[0].is_friendly());
        assert_eq!(columns[1].payoff, -3.0);
    }

    #[test]
    fn test_matrix_layout() {
        let oracle = InMemoryOracle::new()
            .with_terms(["egypt", "row"])
            .with_similarity("pyramid", "egypt", 0.6)
            .with_similarity("boat", "row", 0.7);
        let board = Board::new(
            vec!["EGYPT".into(), "ROW".into()],
            vec![Team::Blue, Team::Assassin],
        )
        .unwrap();
        let mut cache = SimilarityCache::new();
        let matrix = SimilarityMatrix::build(
            &oracle,
            &mut cache,
            vec!["pyramid".into(), "boat".into()],
            board_columns(&board, Team::Blue),
        )
        .unwrap();

        assert_eq!(matrix.row(0), &[0.6, 0.0]);
        assert_eq!(matrix.get(1, 1), 0.7);
    }
}
