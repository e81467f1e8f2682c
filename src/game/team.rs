//! Card categories and per-word payoffs

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The category behind a card, or `Unassigned` while it is still hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Unassigned,
    Red,
    Blue,
    Neutral,
    Assassin,
}

impl Team {
    /// The two teams that take turns.
    pub const PLAYERS: [Team; 2] = [Team::Red, Team::Blue];

    /// Get the opposing team. Only playing teams have one.
    pub fn opponent(self) -> Option<Team> {
        match self {
            Team::Red => Some(Team::Blue),
            Team::Blue => Some(Team::Red),
            Team::Unassigned | Team::Neutral | Team::Assassin => None,
        }
    }

    /// Whether this team gives clues and guesses.
    pub fn is_player(self) -> bool {
        self.opponent().is_some()
    }

    /// Payoff of revealing a card of this category, seen from `acting`.
    ///
    /// +1 for the acting team's own cards, -1 for neutral, -2 for the
    /// opponent's cards and -3 for the assassin. Hidden cards carry no payoff.
    pub fn value_for_team(self, acting: Team) -> f64 {
        match self {
            Team::Unassigned => 0.0,
            Team::Neutral => -1.0,
            Team::Assassin => -3.0,
            Team::Red | Team::Blue if self == acting => 1.0,
            Team::Red | Team::Blue => -2.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Team::Unassigned => "unassigned",
            Team::Red => "red",
            Team::Blue => "blue",
            Team::Neutral => "neutral",
            Team::Assassin => "assassin",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Team {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unassigned" | "unknown" => Ok(Team::Unassigned),
            "red" => Ok(Team::Red),
            "blue" => Ok(Team::Blue),
            "neutral" => Ok(Team::Neutral),
            "assassin" => Ok(Team::Assassin),
            _ => Err(crate::Error::ParseTeam {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_only_for_players() {
        assert_eq!(Team::Red.opponent(), Some(Team::Blue));
        assert_eq!(Team::Blue.opponent(), Some(Team::Red));
        assert_eq!(Team::Neutral.opponent(), None);
        assert_eq!(Team::Assassin.opponent(), None);
        assert_eq!(Team::Unassigned.opponent(), None);
    }

    #[test]
    fn test_value_for_team() {
        assert_eq!(Team::Red.value_for_team(Team::Red), 1.0);
        assert_eq!(Team::Blue.value_for_team(Team::Red), -2.0);
        assert_eq!(Team::Neutral.value_for_team(Team::Red), -1.0);
        assert_eq!(Team::Assassin.value_for_team(Team::Blue), -3.0);
        assert_eq!(Team::Unassigned.value_for_team(Team::Blue), 0.0);
    }

    #[test]
    fn test_parse_round_trips_display() {
        for team in [
            Team::Unassigned,
            Team::Red,
            Team::Blue,
            Team::Neutral,
            Team::Assassin,
        ] {
            assert_eq!(team.to_string().parse::<Team>().unwrap(), team);
        }
        assert!("green".parse::<Team>().is_err());
        assert_eq!("BLUE".parse::<Team>().unwrap(), Team::Blue);
    }
}
