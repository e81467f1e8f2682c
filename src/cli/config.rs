//! Shared input types for CLI commands

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    game::{Board, Team},
    spymaster::SpymasterConfig,
};

/// A playing team as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TeamArg {
    Red,
    Blue,
}

impl From<TeamArg> for Team {
    fn from(team: TeamArg) -> Self {
        match team {
            TeamArg::Red => Team::Red,
            TeamArg::Blue => Team::Blue,
        }
    }
}

/// One card of a board file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardEntry {
    pub word: String,
    pub team: Team,
    #[serde(default)]
    pub revealed: bool,
}

/// Board description read from JSON:
///
/// ```json
/// { "cards": [ { "word": "EGYPT", "team": "blue" },
///              { "word": "ROW", "team": "assassin", "revealed": false } ] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardFile {
    pub cards: Vec<CardEntry>,
}

impl BoardFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read board file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse board file {}", path.display()))
    }

    pub fn into_board(self) -> Result<Board> {
        let mut words = Vec::with_capacity(self.cards.len());
        let mut teams = Vec::with_capacity(self.cards.len());
        let mut known = Vec::with_capacity(self.cards.len());
        for card in self.cards {
            known.push(if card.revealed { card.team } else { Team::Unassigned });
            teams.push(card.team);
            words.push(card.word);
        }
        Ok(Board::with_known(words, teams, known)?)
    }
}

/// Load the spymaster configuration, or the defaults when no file is given.
pub fn load_spymaster_config(path: Option<&Path>) -> Result<SpymasterConfig> {
    match path {
        Some(path) => SpymasterConfig::from_json_file(path)
            .with_context(|| format!("Failed to load configuration {}", path.display())),
        None => Ok(SpymasterConfig::default()),
    }
}

/// Read a word list, one entry per line, ignoring blanks and `#` comments.
pub fn load_word_list(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_file_marks_revealed_cards() {
        let file: BoardFile = serde_json::from_str(
            r#"{"cards": [
                {"word": "EGYPT", "team": "blue"},
                {"word": "CORNER", "team": "red", "revealed": true},
                {"word": "ROW", "team": "assassin"}
            ]}"#,
        )
        .unwrap();
        let board = file.into_board().unwrap();
        assert_eq!(board.remaining(Team::Red), 0);
        assert_eq!(board.remaining(Team::Blue), 1);
    }

    #[test]
    fn test_word_list_skips_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "# deck\negypt\n\n  corner \n").unwrap();
        assert_eq!(load_word_list(&path).unwrap(), vec!["egypt", "corner"]);
    }
}
