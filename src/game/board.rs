//! Board representation and reveal bookkeeping

use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};

use super::team::Team;
use crate::{Error, Result, spymaster::filter};

/// Convert a board surface form into the oracle's term form.
///
/// Terms are lowercase with underscores joining multi-word entries
/// (`ICE CREAM` becomes `ice_cream`).
pub fn term_for_word(word: &str) -> String {
    word.trim()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

/// Convert an oracle term back into a human-readable clue word.
pub fn word_for_term(term: &str) -> String {
    term.replace('_', " ")
}

/// A single card: the surface word, its true category, and what the guessers know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub word: String,
    pub team: Team,
    pub known: Team,
}

impl Card {
    pub fn is_revealed(&self) -> bool {
        self.known != Team::Unassigned
    }
}

/// An ordered set of cards. Mutated only by [`Board::reveal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Create a board with every card hidden.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBoard`] if the lists differ in length, a word
    /// is empty, duplicated or a raw embedding identifier, or a card's true
    /// category is `Unassigned`.
    pub fn new(words: Vec<String>, teams: Vec<Team>) -> Result<Self> {
        let known = vec![Team::Unassigned; words.len()];
        Self::with_known(words, teams, known)
    }

    /// Create a board with some cards already revealed.
    ///
    /// A revealed card must show its true category.
    pub fn with_known(words: Vec<String>, teams: Vec<Team>, known: Vec<Team>) -> Result<Self> {
        if words.len() != teams.len() || words.len() != known.len() {
            return Err(Error::InvalidBoard {
                message: format!(
                    "{} words, {} teams and {} known entries must have equal length",
                    words.len(),
                    teams.len(),
                    known.len()
                ),
            });
        }

        let mut seen = HashSet::new();
        let mut cards = Vec::with_capacity(words.len());
        for ((word, team), known) in words.into_iter().zip(teams).zip(known) {
            let word = word.trim().to_string();
            if word.is_empty() {
                return Err(Error::InvalidBoard {
                    message: "board words must not be empty".to_string(),
                });
            }
            if word.contains('/') || word.contains('_') {
                return Err(Error::InvalidBoard {
                    message: format!("'{word}' looks like an embedding identifier, not a word"),
                });
            }
            if !seen.insert(word.to_lowercase()) {
                return Err(Error::InvalidBoard {
                    message: format!("'{word}' appears more than once"),
                });
            }
            if team == Team::Unassigned {
                return Err(Error::InvalidBoard {
                    message: format!("'{word}' has no category"),
                });
            }
            if known != Team::Unassigned && known != team {
                return Err(Error::InvalidBoard {
                    message: format!("'{word}' is shown as {known} but belongs to {team}"),
                });
            }
            cards.push(Card { word, team, known });
        }

        Ok(Board { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All board words in board order, revealed or not.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.cards.iter().map(|card| card.word.as_str())
    }

    fn position(&self, word: &str) -> Option<usize> {
        let word = word.trim();
        self.cards
            .iter()
            .position(|card| card.word.eq_ignore_ascii_case(word))
    }

    /// True category of a board word, matched case-insensitively.
    pub fn team_of(&self, word: &str) -> Option<Team> {
        self.position(word).map(|i| self.cards[i].team)
    }

    /// Reveal a word and return its category.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBoardReveal`] if the word is not on the board
    /// or has already been revealed.
    pub fn reveal(&mut self, word: &str) -> Result<Team> {
        let index = self.position(word).ok_or_else(|| Error::InvalidBoardReveal {
            word: word.to_string(),
            reason: "not on the board".to_string(),
        })?;
        let card = &mut self.cards[index];
        if card.is_revealed() {
            return Err(Error::InvalidBoardReveal {
                word: card.word.clone(),
                reason: "already revealed".to_string(),
            });
        }
        card.known = card.team;
        Ok(card.team)
    }

    /// Cards the guessers have not seen yet, in board order.
    pub fn unrevealed(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|card| !card.is_revealed())
    }

    /// Words still available to guess.
    pub fn valid_guesses(&self) -> Vec<&str> {
        self.unrevealed().map(|card| card.word.as_str()).collect()
    }

    /// Number of hidden cards belonging to `team`.
    pub fn remaining(&self, team: Team) -> usize {
        self.unrevealed().filter(|card| card.team == team).count()
    }

    /// The first playing team with no hidden cards left.
    ///
    /// Assassin reveals are settled by the game loop, which knows who guessed.
    pub fn winner(&self) -> Option<Team> {
        Team::PLAYERS
            .into_iter()
            .find(|&team| self.remaining(team) == 0)
    }

    /// Whether `clue` may legally be given on this board.
    pub fn is_clue_allowed(&self, clue: &str) -> bool {
        let words: Vec<&str> = self.words().collect();
        filter::is_clue_allowed(&words, clue)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            let marker = match card.known {
                Team::Unassigned => "",
                Team::Red => " [r]",
                Team::Blue => " [b]",
                Team::Neutral => " [n]",
                Team::Assassin => " [a]",
            };
            let label: String = card.word.chars().take(11).collect();
            write!(f, " {:<15}", format!("{label}{marker}"))?;
            if i % 5 == 4 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_board() -> Board {
        Board::new(
            vec!["ICE CREAM".into(), "EGYPT".into(), "ROW".into()],
            vec![Team::Red, Team::Blue, Team::Assassin],
        )
        .unwrap()
    }

    #[test]
    fn test_term_conversion() {
        assert_eq!(term_for_word("ICE CREAM"), "ice_cream");
        assert_eq!(term_for_word(" Egypt "), "egypt");
        assert_eq!(word_for_term("new_york"), "new york");
    }

    #[test]
    fn test_reveal_sets_known_team() {
        let mut board = small_board();
        assert_eq!(board.reveal("egypt").unwrap(), Team::Blue);
        assert_eq!(board.remaining(Team::Blue), 0);
        assert_eq!(board.winner(), Some(Team::Blue));
        assert_eq!(board.valid_guesses(), vec!["ICE CREAM", "ROW"]);
    }

    #[test]
    fn test_reveal_twice_is_an_error() {
        let mut board = small_board();
        board.reveal("ROW").unwrap();
        let err = board.reveal("ROW").unwrap_err();
        assert!(err.to_string().contains("already revealed"));
    }

    #[test]
    fn test_reveal_unknown_word_is_an_error() {
        let mut board = small_board();
        assert!(matches!(
            board.reveal("PYRAMID"),
            Err(Error::InvalidBoardReveal { .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_boards() {
        assert!(Board::new(vec!["A".into()], vec![]).is_err());
        assert!(Board::new(vec!["/c/en/egypt".into()], vec![Team::Red]).is_err());
        assert!(Board::new(vec!["ice_cream".into()], vec![Team::Red]).is_err());
        assert!(
            Board::new(vec!["ROW".into(), "row".into()], vec![Team::Red, Team::Blue]).is_err()
        );
        assert!(Board::new(vec!["ROW".into()], vec![Team::Unassigned]).is_err());
        assert!(
            Board::with_known(vec!["ROW".into()], vec![Team::Red], vec![Team::Blue]).is_err()
        );
    }

    #[test]
    fn test_no_winner_while_both_teams_have_cards() {
        let board = small_board();
        assert_eq!(board.winner(), None);
        assert!(board.is_clue_allowed("pharaoh"));
        assert!(!board.is_clue_allowed("rows"));
    }
}
