//! Ports (trait boundaries) for external collaborators.
//!
//! The engine owns these traits; adapters implement them. The similarity
//! oracle stands in for the embedding space, the observer for whatever
//! consumes clue and game events, and the player ports for the roles the
//! game loop drives.

pub mod observer;
pub mod oracle;
pub mod player;

pub use observer::Observer;
pub use oracle::SimilarityOracle;
pub use player::{ClueGiver, Guesser};
