//! Observer port - abstraction for clue reporting and game observation
//!
//! This port defines the channel through which spymasters report their
//! reasoning and the game loop reports what happens at the table, without
//! coupling either to a specific output format.

use crate::{
    Result,
    game::{Board, Team},
    types::{Clue, ClueExplanation},
};

/// Observer trait for monitoring spymasters and games
///
/// Observers can be composed to collect different views of play:
/// - Structured logs for debugging clue choices
/// - Recorded event streams for tests
/// - Console transcripts for human spectators
///
/// # Event Sequence
///
/// The observer methods are called in the following order:
/// 1. `on_game_start(board)` - Once at the beginning
/// 2. For each turn:
///    - `on_clue_chosen(...)` - By the spymaster, with its justification
///    - `on_clue_given(...)` - By the game loop, as announced to guessers
///    - `on_guess(...)` or `on_pass(...)` - For each guess decision
/// 3. `on_game_end(winner)` - Once at the end
///
/// # Examples
///
/// ```no_run
/// use codenames::{ports::Observer, game::Team};
///
/// struct WinCounter {
///     red: usize,
/// }
///
/// impl Observer for WinCounter {
///     fn on_game_end(&mut self, winner: Team) -> codenames::Result<()> {
///         if winner == Team::Red {
///             self.red += 1;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called when a game starts, with the full (spymaster) view of the board.
    fn on_game_start(&mut self, _board: &Board) -> Result<()> {
        Ok(())
    }

    /// Called by a spymaster after it settles on a clue.
    ///
    /// # Parameters
    ///
    /// * `team` - The team the clue is for
    /// * `explanation` - Covered words, their probabilities, and the expected value
    fn on_clue_chosen(&mut self, _team: Team, _explanation: &ClueExplanation) -> Result<()> {
        Ok(())
    }

    /// Called by the game loop when a clue is announced.
    fn on_clue_given(&mut self, _team: Team, _clue: &Clue) -> Result<()> {
        Ok(())
    }

    /// Called after a guessed word has been revealed.
    ///
    /// # Parameters
    ///
    /// * `team` - The guessing team
    /// * `word` - The revealed word
    /// * `revealed` - The category the word turned out to be
    fn on_guess(&mut self, _team: Team, _word: &str, _revealed: Team) -> Result<()> {
        Ok(())
    }

    /// Called when a guesser stops before using all allowed guesses.
    fn on_pass(&mut self, _team: Team) -> Result<()> {
        Ok(())
    }

    /// Called when the game has a winner.
    fn on_game_end(&mut self, _winner: Team) -> Result<()> {
        Ok(())
    }
}
