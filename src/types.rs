//! Newtype wrappers and value types shared by the engine and the game loop.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Largest number of words a single clue may target.
pub const MAX_CLUE_COUNT: usize = 9;

/// Number of cards on a standard board.
pub const BOARD_SIZE: usize = 25;

/// A probability value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Probability(f64);

impl Probability {
    /// Create a new probability, validating it lies in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if the value is outside
    /// `[0, 1]` or not finite.
    pub fn new(value: f64) -> Result<Self, crate::Error> {
        if (0.0..=1.0).contains(&value) {
            Ok(Probability(value))
        } else {
            Err(crate::Error::InvalidConfiguration {
                message: format!("probability {value} must lie in [0, 1]"),
            })
        }
    }

    /// Create a probability by clamping into `[0, 1]`; NaN becomes zero.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            Probability(0.0)
        } else {
            Probability(value.clamp(0.0, 1.0))
        }
    }

    /// Get the inner value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<Probability> for f64 {
    fn from(p: Probability) -> Self {
        p.0
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// A clue as announced to the guessers: one word and a count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Clue {
    pub count: usize,
    pub word: String,
}

impl Clue {
    pub fn new(count: usize, word: impl Into<String>) -> Self {
        Clue {
            count,
            word: word.into(),
        }
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.count)
    }
}

/// A board word a clue is meant to indicate, with the estimated probability
/// that a guesser finds it before erring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoveredWord {
    pub word: String,
    pub probability: Probability,
}

/// Structured justification for a chosen clue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClueExplanation {
    pub clue: Clue,
    /// Covered board words, most confident first.
    pub covered: Vec<CoveredWord>,
    /// Win probability of the acting team after this clue.
    pub expected_value: f64,
    /// True when the clue came from the degraded fallback path.
    pub fallback: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_validation() {
        assert!(Probability::new(0.0).is_ok());
        assert!(Probability::new(1.0).is_ok());
        assert!(Probability::new(1.5).is_err());
        assert!(Probability::new(-0.1).is_err());
        assert!(Probability::new(f64::NAN).is_err());
    }

    #[test]
    fn test_probability_clamping() {
        assert_eq!(Probability::clamped(2.0).value(), 1.0);
        assert_eq!(Probability::clamped(-3.0).value(), 0.0);
        assert_eq!(Probability::clamped(f64::NAN).value(), 0.0);
        assert_eq!(Probability::clamped(0.25).value(), 0.25);
    }

    #[test]
    fn test_clue_display() {
        assert_eq!(Clue::new(2, "pyramid").to_string(), "pyramid 2");
    }
}
