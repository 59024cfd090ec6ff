//! Weighted discrete sampling by inverting the cumulative distribution.
//!
//! Weights are validated and normalized once at construction; sampling is
//! then a single uniform roll walked against the stored CDF.

use crate::{
    error::{DataError, DataResult},
    rng::AttributeRng,
    types::Level,
};
use std::marker::PhantomData;

/// A validated probability vector over the levels of `L`.
#[derive(Debug, Clone)]
pub struct Distribution<L: Level> {
    probabilities: Vec<f64>,
    cumulative: Vec<f64>,
    /// Fallback when rounding leaves a roll above the last cumulative value.
    last_positive: usize,
    _level: PhantomData<L>,
}

impl<L: Level> Distribution<L> {
    /// Build from raw weights, one per level in ordinal order.
    /// Weights need not sum to 1; they are normalized here.
    pub fn new(weights: &[f64]) -> DataResult<Self> {
        let expected = L::ALL.len();
        if weights.len() != expected {
            return Err(invalid::<L>(format!(
                "expected {expected} weights, got {}",
                weights.len()
            )));
        }
        if let Some((i, w)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(invalid::<L>(format!(
                "weight {i} is {w}; weights must be finite and non-negative"
            )));
        }
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return Err(invalid::<L>(format!("weights sum to {total}; total must be positive")));
        }

        let probabilities: Vec<f64> = weights.iter().map(|w| w / total).collect();
        let mut running = 0.0;
        let cumulative = probabilities
            .iter()
            .map(|p| {
                running += p;
                running
            })
            .collect();
        let last_positive = probabilities.iter().rposition(|p| *p > 0.0).unwrap_or(0);

        Ok(Self {
            probabilities,
            cumulative,
            last_positive,
            _level: PhantomData,
        })
    }

    /// Normalized probabilities, one per level.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn probability(&self, level: L) -> f64 {
        self.probabilities[level.index()]
    }

    /// Levels that can never be drawn.
    pub fn zero_weight_levels(&self) -> Vec<L> {
        L::ALL
            .iter()
            .copied()
            .filter(|l| self.probabilities[l.index()] == 0.0)
            .collect()
    }

    /// Map a uniform roll in [0, 1) to a level.
    pub fn level_for(&self, roll: f64) -> L {
        let idx = self
            .cumulative
            .iter()
            .position(|cum| roll < *cum)
            .unwrap_or(self.last_positive);
        L::ALL[idx]
    }

    pub fn sample(&self, rng: &mut AttributeRng) -> L {
        self.level_for(rng.next_f64())
    }
}

fn invalid<L: Level>(reason: String) -> DataError {
    DataError::InvalidDistribution {
        attribute: L::ATTRIBUTE,
        reason,
    }
}
