//! Codenames board, dealing and the turn loop

pub mod board;
pub mod deal;
pub mod guesser;
pub mod play;
pub mod team;

pub use board::{Board, Card, term_for_word, word_for_term};
pub use deal::DealLayout;
pub use guesser::SimilarityGuesser;
pub use play::run_game;
pub use team::Team;
