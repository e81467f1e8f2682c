//! The turn loop

use super::{Board, Team};
use crate::{
    Error, Result,
    ports::{ClueGiver, Guesser, Observer},
};

/// The two players of one team.
pub struct Seat<'p> {
    pub spymaster: &'p mut dyn ClueGiver,
    pub guesser: &'p mut dyn Guesser,
}

impl<'p> Seat<'p> {
    pub fn new(spymaster: &'p mut dyn ClueGiver, guesser: &'p mut dyn Guesser) -> Self {
        Self { spymaster, guesser }
    }

    fn team(&self) -> Team {
        self.spymaster.team()
    }
}

fn notify<F>(observers: &mut [Box<dyn Observer>], mut event: F) -> Result<()>
where
    F: FnMut(&mut dyn Observer) -> Result<()>,
{
    for observer in observers.iter_mut() {
        event(observer.as_mut())?;
    }
    Ok(())
}

/// Play `board` to the end and return the winner.
///
/// Turns alternate starting with `first`. Before every clue the board is
/// checked for a team with no hidden cards, so a finished board is reported
/// without asking anyone for a clue. A guesser may make up to `count + 1`
/// guesses; the turn ends on the first card that is not the team's own.
/// Revealing the assassin hands the win to the other team.
///
/// # Errors
///
/// - [`Error::InvalidConfiguration`] if the seats are not one per team.
/// - [`Error::IllegalClue`] if a spymaster names a word the board forbids.
/// - [`Error::NoGuess`] if a guesser passes before its first guess.
/// - Any error from the players or the board.
pub fn run_game(
    board: &mut Board,
    first: Team,
    seats: [Seat<'_>; 2],
    observers: &mut [Box<dyn Observer>],
) -> Result<Team> {
    let [a, b] = seats;
    let (mut current, mut waiting) = if a.team() == first { (a, b) } else { (b, a) };
    if current.team() != first
        || current.team().opponent() != Some(waiting.team())
        || current.guesser.team() != current.team()
        || waiting.guesser.team() != waiting.team()
    {
        return Err(Error::InvalidConfiguration {
            message: format!("seats must be one red and one blue team, starting with {first}"),
        });
    }

    current.spymaster.new_game();
    waiting.spymaster.new_game();
    notify(observers, |o| o.on_game_start(board))?;

    let winner = loop {
        if let Some(winner) = board.winner() {
            break winner;
        }
        let team = current.team();

        let clue = current.spymaster.give_clue(board)?;
        if !board.is_clue_allowed(&clue.word) {
            return Err(Error::IllegalClue {
                team,
                word: clue.word,
            });
        }
        notify(observers, |o| o.on_clue_given(team, &clue))?;

        let mut assassin = false;
        let mut guessed = 0;
        while guessed <= clue.count {
            let Some(word) = current.guesser.guess(board, &clue, guessed)? else {
                if guessed == 0 {
                    return Err(Error::NoGuess { team });
                }
                notify(observers, |o| o.on_pass(team))?;
                break;
            };
            let revealed = board.reveal(&word)?;
            notify(observers, |o| o.on_guess(team, &word, revealed))?;
            guessed += 1;

            if revealed == Team::Assassin {
                assassin = true;
                break;
            }
            if revealed != team || board.remaining(team) == 0 {
                break;
            }
        }

        if assassin {
            break waiting.team();
        }
        std::mem::swap(&mut current, &mut waiting);
    };

    tracing::debug!(%winner, "game finished");
    notify(observers, |o| o.on_game_end(winner))?;
    Ok(winner)
}
