//! Error types for the Codenames crate

use thiserror::Error;

use crate::game::Team;

/// Main error type for the Codenames crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no viable clue for {team}: every candidate in a pool of {pool} terms was rejected")]
    ExhaustedCandidates { team: Team, pool: usize },

    #[error("cannot reveal '{word}': {reason}")]
    InvalidBoardReveal { word: String, reason: String },

    #[error("similarity oracle failed for '{term}': {reason}")]
    OracleUnavailable { term: String, reason: String },

    #[error("invalid board: {message}")]
    InvalidBoard { message: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("{team} is not a playing team")]
    NotAPlayer { team: Team },

    #[error("game already over")]
    GameOver,

    #[error("{team} gave an illegal clue '{word}'")]
    IllegalClue { team: Team, word: String },

    #[error("{team} guesser passed before making a guess")]
    NoGuess { team: Team },

    #[error("invalid team '{input}'. Expected one of: red, blue, neutral, assassin, unassigned")]
    ParseTeam { input: String },

    #[error("malformed vector on line {line}: {reason}")]
    InvalidVectorLine { line: usize, reason: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
