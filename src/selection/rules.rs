//! Selection strategies consumed by constructive samplers.

use super::band::choose_in_band;
use super::bias::{RankBias, ValueBias};
use super::quickselect::randomized_select;
use super::roulette::{adjust_for_bias, grow_biases, select};
use crate::error::SamplingError;
use rand::Rng;

/// Picks the next choice from the scores of the remaining choices.
///
/// Implementations may keep scratch buffers; [`split`](SelectionRule::split)
/// must return a copy with the same parameters and its own buffers.
pub trait SelectionRule: Send {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Returns a position in `0..values.len()`.
    ///
    /// `values` holds the scores of the remaining choices and may be
    /// overwritten. `max` is the largest of them. A single choice is
    /// returned without drawing; an empty slice yields 0, which names no
    /// choice and must not be committed.
    fn choose<R: Rng>(&mut self, values: &mut [f64], max: f64, rng: &mut R) -> usize;

    /// Copy with identical parameters and fresh scratch state.
    fn split(&self) -> Self
    where
        Self: Sized;
}

/// Deterministic argmax; ties go to the lowest position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greedy;

impl SelectionRule for Greedy {
    fn name(&self) -> &str {
        "greedy"
    }

    fn choose<R: Rng>(&mut self, values: &mut [f64], _max: f64, _rng: &mut R) -> usize {
        let mut best = 0;
        for (i, &v) in values.iter().enumerate().skip(1) {
            if v > values[best] {
                best = i;
            }
        }
        best
    }

    fn split(&self) -> Self {
        Greedy
    }
}

/// Heuristic-biased stochastic sampling (HBSS): roulette over ranks.
///
/// The cumulative rank-bias table grows on demand to the largest number of
/// remaining choices seen so far.
#[derive(Debug, Clone)]
pub struct RankBiased {
    bias: RankBias,
    cumulative: Vec<f64>,
    index: Vec<usize>,
}

impl Default for RankBiased {
    fn default() -> Self {
        Self {
            bias: RankBias::default(),
            cumulative: Vec::new(),
            index: Vec::new(),
        }
    }
}

impl RankBiased {
    /// Creates the rule, validating the bias parameters.
    pub fn new(bias: RankBias) -> Result<Self, SamplingError> {
        bias.validate()?;
        Ok(Self {
            bias,
            ..Self::default()
        })
    }

    /// Creates the rule with its bias table precomputed for `n` choices.
    pub fn with_capacity(bias: RankBias, n: usize) -> Result<Self, SamplingError> {
        let mut rule = Self::new(bias)?;
        grow_biases(&mut rule.cumulative, &rule.bias, n);
        rule.index.reserve(n);
        Ok(rule)
    }

    /// The rank bias.
    pub fn bias(&self) -> &RankBias {
        &self.bias
    }
}

impl SelectionRule for RankBiased {
    fn name(&self) -> &str {
        "hbss"
    }

    fn choose<R: Rng>(&mut self, values: &mut [f64], _max: f64, rng: &mut R) -> usize {
        let k = values.len();
        if k <= 1 {
            return 0;
        }
        grow_biases(&mut self.cumulative, &self.bias, k);
        let total = self.cumulative[k - 1];
        let rank = if total > 0.0 && total.is_finite() {
            let u = rng.random_range(0.0..total);
            select(&self.cumulative, k, u)
        } else {
            0
        };
        randomized_select(&mut self.index, values, k, rank, rng)
    }

    fn split(&self) -> Self {
        Self {
            bias: self.bias.clone(),
            cumulative: self.cumulative.clone(),
            index: Vec::with_capacity(self.index.capacity()),
        }
    }
}

/// Value-biased stochastic sampling (VBSS): roulette over biased scores.
#[derive(Debug, Clone, Default)]
pub struct ValueBiased {
    bias: ValueBias,
}

impl ValueBiased {
    /// Creates the rule, validating the bias parameters.
    pub fn new(bias: ValueBias) -> Result<Self, SamplingError> {
        bias.validate()?;
        Ok(Self { bias })
    }

    /// The value bias.
    pub fn bias(&self) -> &ValueBias {
        &self.bias
    }
}

impl SelectionRule for ValueBiased {
    fn name(&self) -> &str {
        "vbss"
    }

    fn choose<R: Rng>(&mut self, values: &mut [f64], _max: f64, rng: &mut R) -> usize {
        let k = values.len();
        if k <= 1 {
            return 0;
        }
        adjust_for_bias(values, k, &self.bias);
        select(values, k, rng.random::<f64>())
    }

    fn split(&self) -> Self {
        self.clone()
    }
}

/// Uniform choice within an acceptance band below the best score.
///
/// A choice qualifies when its score is at least
/// `max - beta * (max - min)` over the remaining choices.
#[derive(Debug, Clone)]
pub struct AcceptanceBand {
    beta: f64,
    band: Vec<usize>,
}

impl AcceptanceBand {
    /// Band width used by [`Default`].
    pub const DEFAULT_BETA: f64 = 0.1;

    /// Creates the rule.
    ///
    /// # Errors
    ///
    /// [`SamplingError::InvalidBeta`] when `beta` is outside `[0, 1]`.
    pub fn new(beta: f64) -> Result<Self, SamplingError> {
        if !(0.0..=1.0).contains(&beta) {
            return Err(SamplingError::InvalidBeta(beta));
        }
        Ok(Self {
            beta,
            band: Vec::new(),
        })
    }

    /// The band width.
    pub fn beta(&self) -> f64 {
        self.beta
    }
}

impl Default for AcceptanceBand {
    fn default() -> Self {
        Self {
            beta: Self::DEFAULT_BETA,
            band: Vec::new(),
        }
    }
}

impl SelectionRule for AcceptanceBand {
    fn name(&self) -> &str {
        "acceptance-band"
    }

    fn choose<R: Rng>(&mut self, values: &mut [f64], max: f64, rng: &mut R) -> usize {
        if values.len() <= 1 {
            return 0;
        }
        choose_in_band(values, values.len(), max, self.beta, &mut self.band, rng)
    }

    fn split(&self) -> Self {
        Self {
            beta: self.beta,
            band: Vec::new(),
        }
    }
}
