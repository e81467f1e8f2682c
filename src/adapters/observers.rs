//! Observer adapters: structured logging and in-memory recording.

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    game::{Board, Team},
    ports::Observer,
    types::{Clue, ClueExplanation},
};

/// Forwards observer events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_game_start(&mut self, board: &Board) -> Result<()> {
        tracing::info!(cards = board.len(), "game started");
        Ok(())
    }

    fn on_clue_chosen(&mut self, team: Team, explanation: &ClueExplanation) -> Result<()> {
        let covered: Vec<String> = explanation
            .covered
            .iter()
            .map(|c| format!("{}={}", c.word, c.probability))
            .collect();
        tracing::debug!(
            %team,
            clue = %explanation.clue,
            expected_value = explanation.expected_value,
            fallback = explanation.fallback,
            covered = ?covered,
            "clue chosen"
        );
        Ok(())
    }

    fn on_clue_given(&mut self, team: Team, clue: &Clue) -> Result<()> {
        tracing::info!(%team, %clue, "clue");
        Ok(())
    }

    fn on_guess(&mut self, team: Team, word: &str, revealed: Team) -> Result<()> {
        tracing::info!(%team, word, %revealed, "guess");
        Ok(())
    }

    fn on_pass(&mut self, team: Team) -> Result<()> {
        tracing::info!(%team, "pass");
        Ok(())
    }

    fn on_game_end(&mut self, winner: Team) -> Result<()> {
        tracing::info!(%winner, "game over");
        Ok(())
    }
}

/// One recorded observer event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    GameStart { cards: usize },
    ClueChosen { team: Team, explanation: ClueExplanation },
    ClueGiven { team: Team, clue: Clue },
    Guess { team: Team, word: String, revealed: Team },
    Pass { team: Team },
    GameEnd { winner: Team },
}

/// Records events in memory.
///
/// Clones share the same log, so one recorder can be handed to both
/// spymasters and the game loop and read back afterwards.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<Event>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends to the shared log, recovering it from a poisoned lock.
    fn push(&self, event: Event) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<Event> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Clues announced at the table, in order.
    pub fn clues(&self) -> Vec<(Team, Clue)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::ClueGiven { team, clue } => Some((team, clue)),
                _ => None,
            })
            .collect()
    }
}

impl Observer for RecordingObserver {
    fn on_game_start(&mut self, board: &Board) -> Result<()> {
        self.push(Event::GameStart { cards: board.len() });
        Ok(())
    }

    fn on_clue_chosen(&mut self, team: Team, explanation: &ClueExplanation) -> Result<()> {
        self.push(Event::ClueChosen {
            team,
            explanation: explanation.clone(),
        });
        Ok(())
    }

    fn on_clue_given(&mut self, team: Team, clue: &Clue) -> Result<()> {
        self.push(Event::ClueGiven {
            team,
            clue: clue.clone(),
        });
        Ok(())
    }

    fn on_guess(&mut self, team: Team, word: &str, revealed: Team) -> Result<()> {
        self.push(Event::Guess {
            team,
            word: word.to_string(),
            revealed,
        });
        Ok(())
    }

    fn on_pass(&mut self, team: Team) -> Result<()> {
        self.push(Event::Pass { team });
        Ok(())
    }

    fn on_game_end(&mut self, winner: Team) -> Result<()> {
        self.push(Event::GameEnd { winner });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_log() {
        let recorder = RecordingObserver::new();
        let mut writer = recorder.clone();

        writer.on_clue_given(Team::Red, &Clue::new(2, "pyramid")).unwrap();
        writer.on_game_end(Team::Red).unwrap();

        assert_eq!(recorder.events().len(), 2);
        assert_eq!(recorder.clues(), vec![(Team::Red, Clue::new(2, "pyramid"))]);
    }

    #[test]
    fn test_keeps_recording_after_a_holder_panics() {
        let mut recorder = RecordingObserver::new();
        recorder.on_game_end(Team::Blue).unwrap();

        let shared = recorder.clone();
        let crashed = std::thread::spawn(move || {
            let _guard = shared.events.lock().unwrap();
            panic!("observer thread failed");
        })
        .join();
        assert!(crashed.is_err());
        assert!(recorder.events.is_poisoned());

        recorder.on_pass(Team::Red).unwrap();
        assert_eq!(
            recorder.events(),
            vec![
                Event::GameEnd { winner: Team::Blue },
                Event::Pass { team: Team::Red },
            ]
        );
    }
}
