//! Player ports - the two roles the game loop drives each turn.

use crate::{
    Result,
    game::{Board, Team},
    types::Clue,
};

/// A spymaster: sees the true categories and gives one clue per turn.
pub trait ClueGiver {
    /// Team this clue giver plays for.
    fn team(&self) -> Team;

    /// Produce a clue for the current board.
    ///
    /// # Errors
    ///
    /// Returns an error if no clue can be produced; the game cannot proceed.
    fn give_clue(&mut self, board: &Board) -> Result<Clue>;

    /// Called once when a new game starts. Per-game state must be reset here.
    fn new_game(&mut self) {}
}

/// A guesser: sees only revealed categories and picks words for a clue.
pub trait Guesser {
    fn team(&self) -> Team;

    /// Pick the next word to reveal, or `None` to pass.
    ///
    /// `guessed` counts the guesses already made for this clue.
    fn guess(&mut self, board: &Board, clue: &Clue, guessed: usize) -> Result<Option<String>>;
}
