//! Position-value table
//!
//! `V[m][o]` is the probability that the team about to give a clue wins,
//! with `m` of its own cards and `o` of the opponent's still hidden. The
//! table depends only on card counts, so it is built once and shared
//! read-only across turns and games.
//!
//! # Recurrence
//!
//! - `V[0][o] = 1` for `o ≥ 1`: the mover has already won.
//! - `V[m][0] = 0`: the opponent has already won.
//! - `V[1][o] = one_card_value`: a last card is almost always taken.
//! - For `m ≥ 2, o ≥ 1` the mover picks the best of a few typical clue
//!   shapes. Shape `s` converts `k` cards with probability `w[s][k]`, after
//!   which the opponent moves from `(o, m - k)`:
//!
//!   `V[m][o] = 1 - min_s Σ_k w[s][k] · V[o][m - k]`
//!
//!   A shape that converts nothing (`k = 0`) leaves the opponent at
//!   `V[o][m]`. That entry has the same `m + o`; it is read when `o < m`,
//!   where the fill order below has already produced it, and taken as 1
//!   (an opponent win) otherwise. Every other branch has a smaller `m + o`.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, types::MAX_CLUE_COUNT};

/// Table dimension: counts 0 through 9.
pub const TABLE_SIZE: usize = MAX_CLUE_COUNT + 1;

const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Tunable constants of the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionValueConfig {
    /// Value of holding a single card.
    pub one_card_value: f64,
    /// `clue_shapes[s][k]`: probability a clue shape converts exactly `k` cards.
    pub clue_shapes: Vec<Vec<f64>>,
}

impl Default for PositionValueConfig {
    fn default() -> Self {
        Self {
            one_card_value: 0.99,
            clue_shapes: vec![
                vec![0.01, 0.99],
                vec![0.2, 0.3, 0.5],
                vec![0.1, 0.4, 0.4, 0.1],
            ],
        }
    }
}

impl PositionValueConfig {
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `one_card_value` is outside
    /// `[0, 1]`, there are no shapes, or a shape is not a distribution.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.one_card_value) {
            return Err(Error::InvalidConfiguration {
                message: format!("one_card_value {} must lie in [0, 1]", self.one_card_value),
            });
        }
        if self.clue_shapes.is_empty() {
            return Err(Error::InvalidConfiguration {
                message: "at least one clue shape is required".to_string(),
            });
        }
        for (index, shape) in self.clue_shapes.iter().enumerate() {
            if shape.is_empty() || shape.len() > TABLE_SIZE {
                return Err(Error::InvalidConfiguration {
                    message: format!("clue shape {index} must have 1 to {TABLE_SIZE} entries"),
                });
            }
            if shape.iter().any(|w| !(w.is_finite() && *w >= 0.0)) {
                return Err(Error::InvalidConfiguration {
                    message: format!("clue shape {index} has a negative weight"),
                });
            }
            let total: f64 = shape.iter().sum();
            if (total - 1.0).abs() > WEIGHT_TOLERANCE {
                return Err(Error::InvalidConfiguration {
                    message: format!("clue shape {index} sums to {total}, expected 1"),
                });
            }
        }
        Ok(())
    }
}

/// The precomputed table.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionValues {
    values: [[f64; TABLE_SIZE]; TABLE_SIZE],
}

impl PositionValues {
    /// Build the table bottom-up.
    pub fn build(config: &PositionValueConfig) -> Result<Self> {
        config.validate()?;

        let mut values = [[0.0; TABLE_SIZE]; TABLE_SIZE];
        for o in 1..TABLE_SIZE {
            values[0][o] = 1.0;
            values[1][o] = config.one_card_value;
        }

        for (m, o) in Self::fill_order() {
            let best_for_opponent = config
                .clue_shapes
                .iter()
                .map(|shape| {
                    shape
                        .iter()
                        .enumerate()
                        .map(|(k, w)| {
                            if k == 0 {
                                if o < m { w * values[o][m] } else { *w }
                            } else {
                                w * values[o][m.saturating_sub(k)]
                            }
                        })
                        .sum::<f64>()
                })
                .fold(f64::INFINITY, f64::min);
            values[m][o] = (1.0 - best_for_opponent).clamp(0.0, 1.0);
        }

        Ok(Self { values })
    }

    /// Cells computed by the recurrence, in fill order: increasing `m + o`,
    /// then increasing `m`.
    pub fn fill_order() -> impl Iterator<Item = (usize, usize)> {
        (3..=2 * MAX_CLUE_COUNT).flat_map(|total| {
            (2..TABLE_SIZE).filter_map(move |m| {
                let o = total.checked_sub(m)?;
                (1..TABLE_SIZE).contains(&o).then_some((m, o))
            })
        })
    }

    /// Win probability of the mover. Counts above nine are read as nine.
    pub fn value(&self, mover: usize, opponent: usize) -> f64 {
        self.values[mover.min(MAX_CLUE_COUNT)][opponent.min(MAX_CLUE_COUNT)]
    }

    pub fn rows(&self) -> &[[f64; TABLE_SIZE]; TABLE_SIZE] {
        &self.values
    }
}
