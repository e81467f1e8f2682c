//! Random board generation

use rand::{
    Rng,
    seq::{IndexedRandom, SliceRandom},
};
use serde::{Deserialize, Serialize};

use super::{board::Board, team::Team};
use crate::{Error, Result};

/// How many cards of each category a dealt board carries.
///
/// The team moving first receives the `first` block, one card more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealLayout {
    pub first: usize,
    pub second: usize,
    pub neutral: usize,
    pub assassin: usize,
}

impl DealLayout {
    pub fn total(&self) -> usize {
        self.first + self.second + self.neutral + self.assassin
    }

    fn teams(&self, first: Team, second: Team) -> Vec<Team> {
        let mut teams = Vec::with_capacity(self.total());
        teams.extend(std::iter::repeat_n(first, self.first));
        teams.extend(std::iter::repeat_n(second, self.second));
        teams.extend(std::iter::repeat_n(Team::Neutral, self.neutral));
        teams.extend(std::iter::repeat_n(Team::Assassin, self.assassin));
        teams
    }
}

impl Default for DealLayout {
    fn default() -> Self {
        Self {
            first: 9,
            second: 8,
            neutral: 7,
            assassin: 1,
        }
    }
}

impl Board {
    /// Deal a fresh board by sampling words without replacement.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAPlayer`] if `first` is not a playing team, and
    /// [`Error::InvalidBoard`] if the word list has fewer distinct entries
    /// than the layout needs, or a sampled word is not a valid board word.
    pub fn deal<R: Rng + ?Sized>(
        words: &[String],
        layout: &DealLayout,
        first: Team,
        rng: &mut R,
    ) -> Result<Self> {
        let second = first.opponent().ok_or(Error::NotAPlayer { team: first })?;
        let total = layout.total();
        if layout.first == 0 || layout.second == 0 {
            return Err(Error::InvalidBoard {
                message: "both teams need at least one card".to_string(),
            });
        }
        if words.len() < total {
            return Err(Error::InvalidBoard {
                message: format!("need {total} words to deal, word list has {}", words.len()),
            });
        }

        let chosen: Vec<String> = words
            .choose_multiple(rng, total)
            .map(|word| word.trim().to_uppercase())
            .collect();
        let mut teams = layout.teams(first, second);
        teams.shuffle(rng);

        Board::new(chosen, teams)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn word_list(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("word{i}")).collect()
    }

    #[test]
    fn test_deal_respects_layout() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::deal(&word_list(40), &DealLayout::default(), Team::Red, &mut rng).unwrap();
        assert_eq!(board.len(), 25);
        assert_eq!(board.remaining(Team::Red), 9);
        assert_eq!(board.remaining(Team::Blue), 8);
        assert_eq!(board.remaining(Team::Neutral), 7);
        assert_eq!(board.remaining(Team::Assassin), 1);
        assert!(board.words().all(|w| w == w.to_uppercase()));
    }

    #[test]
    fn test_deal_is_reproducible_with_seed() {
        let words = word_list(40);
        let a = Board::deal(&words, &DealLayout::default(), Team::Red, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = Board::deal(&words, &DealLayout::default(), Team::Red, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_deal_needs_enough_words() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(Board::deal(&word_list(10), &DealLayout::default(), Team::Red, &mut rng).is_err());
    }

    #[test]
    fn test_custom_layout() {
        let layout = DealLayout {
            first: 2,
            second: 2,
            neutral: 2,
            assassin: 1,
        };
        let mut rng = StdRng::seed_from_u64(11);
        let board = Board::deal(&word_list(7), &layout, Team::Blue, &mut rng).unwrap();
        assert_eq!(board.len(), 7);
        assert_eq!(board.remaining(Team::Assassin), 1);
    }

    #[test]
    fn test_first_team_gets_the_larger_block() {
        let mut rng = StdRng::seed_from_u64(5);
        let board = Board::deal(&word_list(30), &DealLayout::default(), Team::Blue, &mut rng).unwrap();
        assert_eq!(board.remaining(Team::Blue), 9);
        assert_eq!(board.remaining(Team::Red), 8);
        assert!(Board::deal(&word_list(30), &DealLayout::default(), Team::Neutral, &mut rng).is_err());
    }
}
