//! Common fixtures for the codenames test suite.
//!
//! The reduced board mirrors a position that used to trip the engine up:
//! the candidate most similar to a friendly word is a compound of the
//! assassin, and the obvious clues are plain inflections of board words.

#![allow(dead_code)]

use codenames::{Board, Team, adapters::InMemoryOracle};

pub const REDUCED_WORDS: [(&str, Team); 7] = [
    ("WHIP", Team::Neutral),
    ("CORNER", Team::Blue),
    ("EGYPT", Team::Blue),
    ("CENTAUR", Team::Red),
    ("POISON", Team::Neutral),
    ("ROW", Team::Assassin),
    ("POUND", Team::Neutral),
];

pub fn reduced_board() -> Board {
    let (words, teams): (Vec<String>, Vec<Team>) = REDUCED_WORDS
        .iter()
        .map(|(word, team)| (word.to_string(), *team))
        .unzip();
    Board::new(words, teams).expect("reduced board should be valid")
}

/// Similarity table for the reduced board, offering only `vocabulary` as candidates.
pub fn reduced_oracle(vocabulary: &[&str]) -> InMemoryOracle {
    InMemoryOracle::new()
        .with_terms(REDUCED_WORDS.iter().map(|(word, _)| word.to_lowercase()))
        .with_vocabulary(vocabulary.iter().copied())
        .with_similarity("corners", "corner", 0.95)
        .with_similarity("corners", "egypt", 0.1)
        .with_similarity("egyptian", "egypt", 0.9)
        .with_similarity("egyptian", "corner", 0.2)
        .with_similarity("rowboat", "row", 0.99)
        .with_similarity("rowboat", "corner", 0.5)
        .with_similarity("pyramid", "egypt", 0.6)
        .with_similarity("pyramid", "corner", 0.05)
        .with_similarity("boxing", "corner", 0.4)
}

pub const FULL_VOCABULARY: [&str; 5] = ["corners", "egyptian", "rowboat", "pyramid", "boxing"];

pub const DECK: [&str; 25] = [
    "APPLE", "BANK", "CASTLE", "DRAGON", "ENGINE", "FOREST", "GLASS", "HARBOR", "ISLAND",
    "JACKET", "KNIGHT", "LEMON", "MARBLE", "NEEDLE", "ORBIT", "PIANO", "QUEEN", "ROCKET",
    "SADDLE", "TIGER", "UNICORN", "VIOLIN", "WHALE", "YACHT", "ZEBRA",
];

/// Nine red, eight blue, seven neutral, one assassin, in deck order.
pub fn standard_teams() -> Vec<Team> {
    let mut teams = vec![Team::Red; 9];
    teams.extend(vec![Team::Blue; 8]);
    teams.extend(vec![Team::Neutral; 7]);
    teams.push(Team::Assassin);
    teams
}

pub fn standard_board() -> Board {
    Board::new(DECK.iter().map(|w| w.to_string()).collect(), standard_teams())
        .expect("standard board should be valid")
}

/// One dedicated hint per team word (`hint00` to `hint16`), similar only to it.
pub fn hint_oracle() -> InMemoryOracle {
    let mut oracle = InMemoryOracle::new().with_terms(DECK.iter().map(|w| w.to_lowercase()));
    for (index, (word, team)) in DECK.iter().zip(standard_teams()).enumerate() {
        if team.is_player() {
            let hint = format!("hint{index:02}");
            oracle = oracle
                .with_vocabulary([hint.clone()])
                .with_similarity(&hint, &word.to_lowercase(), 0.8);
        }
    }
    oracle
}
