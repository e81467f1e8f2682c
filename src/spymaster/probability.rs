//! Guess-success probability model
//!
//! A guesser's judgment of similarity differs from the embedding's by
//! roughly normal noise of fixed spread. A clue beats a distractor by some
//! margin in the embedding; the chance the guesser still ranks the intended
//! word first is `Φ(margin / σ)`.
//!
//! Distractors fall into three pools (neutral, opposing, assassin). Each
//! pool yields its own probability from the margin against that pool's
//! closest word, and the pools combine as a weighted product
//! `Π p_pool^w_pool`. With weights 1/2/3 the assassin is treated with the
//! most caution.

use serde::{Deserialize, Serialize};
use statrs::function::erf::erf;

use crate::{Error, Result};

/// Margins are differences of similarities in `[-1, 1]`.
const MAX_MARGIN: f64 = 2.0;

/// Standard normal CDF evaluated at `margin / spread`, clamped and NaN-safe.
///
/// Exactly 0.5 at a zero margin, monotone non-decreasing, tending to 1 and
/// 0 at the extremes. A NaN margin yields 0, so it can never look safe.
pub fn margin_probability(margin: f64, spread: f64) -> f64 {
    if margin.is_nan() {
        return 0.0;
    }
    let margin = margin.clamp(-MAX_MARGIN, MAX_MARGIN);
    let z = margin / spread;
    (0.5 * (1.0 + erf(z / std::f64::consts::SQRT_2))).clamp(0.0, 1.0)
}

/// Tunable constants of the guess model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuessModelConfig {
    /// σ of the human-vs-embedding disagreement.
    pub spread: f64,
    pub neutral_weight: f64,
    pub opposing_weight: f64,
    pub assassin_weight: f64,
}

impl Default for GuessModelConfig {
    fn default() -> Self {
        Self {
            spread: 0.18,
            neutral_weight: 1.0,
            opposing_weight: 2.0,
            assassin_weight: 3.0,
        }
    }
}

impl GuessModelConfig {
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the spread is not positive
    /// or a pool weight is negative.
    pub fn validate(&self) -> Result<()> {
        if !(self.spread.is_finite() && self.spread > 0.0) {
            return Err(Error::InvalidConfiguration {
                message: format!("guess spread {} must be positive", self.spread),
            });
        }
        for (name, weight) in [
            ("neutral", self.neutral_weight),
            ("opposing", self.opposing_weight),
            ("assassin", self.assassin_weight),
        ] {
            if !(weight.is_finite() && weight >= 0.0) {
                return Err(Error::InvalidConfiguration {
                    message: format!("{name} pool weight {weight} must be non-negative"),
                });
            }
        }
        Ok(())
    }
}

/// Closest similarity a candidate has to each distractor pool.
///
/// `None` means the pool has no unrevealed word and imposes no risk.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DistractorMaxima {
    pub neutral: Option<f64>,
    pub opposing: Option<f64>,
    pub assassin: Option<f64>,
}

/// The guess-success model.
#[derive(Debug, Clone)]
pub struct GuessModel {
    config: GuessModelConfig,
}

impl GuessModel {
    pub fn new(config: GuessModelConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GuessModelConfig {
        &self.config
    }

    /// Probability of beating a single distractor by `margin`.
    pub fn margin_probability(&self, margin: f64) -> f64 {
        margin_probability(margin, self.config.spread)
    }

    /// Probability a guesser picks an intended word with similarity
    /// `intended` before any distractor.
    pub fn word_probability(&self, intended: f64, distractors: &DistractorMaxima) -> f64 {
        let pools = [
            (distractors.neutral, self.config.neutral_weight),
            (distractors.opposing, self.config.opposing_weight),
            (distractors.assassin, self.config.assassin_weight),
        ];
        pools
            .into_iter()
            .filter_map(|(max, weight)| max.map(|max| (max, weight)))
            .map(|(max, weight)| self.margin_probability(intended - max).powf(weight))
            .product()
    }
}

impl Default for GuessModel {
    fn default() -> Self {
        Self {
            config: GuessModelConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_margin_is_even() {
        assert_eq!(margin_probability(0.0, 0.18), 0.5);
    }

    #[test]
    fn test_limits() {
        assert!(margin_probability(1.5, 0.18) > 0.999_999);
        assert!(margin_probability(-1.5, 0.18) < 1e-6);
        assert!(margin_probability(f64::INFINITY, 0.18) > 0.999_999);
        assert_eq!(margin_probability(f64::NAN, 0.18), 0.0);
    }

    #[test]
    fn test_monotone_over_grid() {
        let mut previous = 0.0;
        for step in -400..=400 {
            let margin = step as f64 / 100.0;
            let p = margin_probability(margin, 0.18);
            assert!(p >= previous, "not monotone at margin {margin}");
            assert!((0.0..=1.0).contains(&p));
            previous = p;
        }
    }

    #[test]
    fn test_one_sigma() {
        let p = margin_probability(0.18, 0.18);
        assert!((p - 0.841_344_746).abs() < 1e-6);
    }

    #[test]
    fn test_empty_pools_impose_no_risk() {
        let model = GuessModel::default();
        assert_eq!(model.word_probability(0.3, &DistractorMaxima::default()), 1.0);
    }

    #[test]
    fn test_assassin_weighs_most() {
        let model = GuessModel::default();
        let near_neutral = DistractorMaxima {
            neutral: Some(0.3),
            ..Default::default()
        };
        let near_assassin = DistractorMaxima {
            assassin: Some(0.3),
            ..Default::default()
        };
        let p_neutral = model.word_probability(0.4, &near_neutral);
        let p_assassin = model.word_probability(0.4, &near_assassin);
        assert!(p_assassin < p_neutral);
        assert!((p_assassin - p_neutral.powi(3)).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_bad_config() {
        let config = GuessModelConfig {
            spread: 0.0,
            ..Default::default()
        };
        assert!(GuessModel::new(config).is_err());
        let config = GuessModelConfig {
            assassin_weight: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
