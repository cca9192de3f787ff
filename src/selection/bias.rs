//! Bias functions mapping ranks or raw scores to sampling weights.

use crate::error::SamplingError;
use std::fmt;
use std::sync::Arc;

/// Weight of a 1-based rank for rank-biased sampling (HBSS).
///
/// Rank 1 is the best-scored choice. Every built-in family is non-increasing
/// in the rank.
#[derive(Clone)]
pub enum RankBias {
    /// `1 / r^exponent`.
    InversePower {
        /// Non-negative exponent. `0` gives uniform sampling.
        exponent: f64,
    },

    /// `1 / r`.
    Linear,

    /// `1 / ln(r + 1)`.
    Logarithmic,

    /// `exp(-r)`.
    Exponential,

    /// Caller-supplied weight per rank. Negative or NaN weights count as zero.
    Custom(Arc<dyn Fn(usize) -> f64 + Send + Sync>),
}

impl Default for RankBias {
    fn default() -> Self {
        RankBias::InversePower { exponent: 2.0 }
    }
}

impl fmt::Debug for RankBias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankBias::InversePower { exponent } => f
                .debug_struct("InversePower")
                .field("exponent", exponent)
                .finish(),
            RankBias::Linear => f.write_str("Linear"),
            RankBias::Logarithmic => f.write_str("Logarithmic"),
            RankBias::Exponential => f.write_str("Exponential"),
            RankBias::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl RankBias {
    /// Wraps a closure as a custom rank bias.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(usize) -> f64 + Send + Sync + 'static,
    {
        RankBias::Custom(Arc::new(f))
    }

    /// Weight of 1-based `rank`.
    pub fn weight(&self, rank: usize) -> f64 {
        let r = rank as f64;
        let w = match self {
            RankBias::InversePower { exponent } => r.powf(-exponent),
            RankBias::Linear => 1.0 / r,
            RankBias::Logarithmic => 1.0 / (r + 1.0).ln(),
            RankBias::Exponential => (-r).exp(),
            RankBias::Custom(f) => f(rank),
        };
        if w > 0.0 {
            w
        } else {
            0.0
        }
    }

    /// Checks the bias parameters.
    pub fn validate(&self) -> Result<(), SamplingError> {
        if let RankBias::InversePower { exponent } = self {
            if !exponent.is_finite() || *exponent < 0.0 {
                return Err(SamplingError::InvalidBias(format!(
                    "inverse-power exponent must be finite and non-negative, got {exponent}"
                )));
            }
        }
        Ok(())
    }
}

/// Weight of a raw heuristic score for value-biased sampling (VBSS).
#[derive(Clone)]
pub enum ValueBias {
    /// `exp(rate * h)`.
    Exponential {
        /// Finite rate. Larger rates concentrate on the best scores.
        rate: f64,
    },

    /// `h^exponent`, for heuristics whose scores are non-negative.
    Power {
        /// Finite, non-negative exponent.
        exponent: f64,
    },

    /// Caller-supplied weight per score. Negative or NaN weights count as zero.
    Custom(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl Default for ValueBias {
    fn default() -> Self {
        ValueBias::Exponential { rate: 1.0 }
    }
}

impl fmt::Debug for ValueBias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueBias::Exponential { rate } => {
                f.debug_struct("Exponential").field("rate", rate).finish()
            }
            ValueBias::Power { exponent } => {
                f.debug_struct("Power").field("exponent", exponent).finish()
            }
            ValueBias::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl ValueBias {
    /// Wraps a closure as a custom value bias.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        ValueBias::Custom(Arc::new(f))
    }

    /// Weight of score `value`.
    pub fn weight(&self, value: f64) -> f64 {
        self.shifted_weight(value, 0.0)
    }

    /// Weight of `value` with the exponential family evaluated relative to
    /// `shift`. Ratios between weights are unchanged, and passing the largest
    /// score as `shift` keeps every exponent non-positive.
    pub(crate) fn shifted_weight(&self, value: f64, shift: f64) -> f64 {
        let w = match self {
            ValueBias::Exponential { rate } => (rate * (value - shift)).exp(),
            ValueBias::Power { exponent } => value.powf(*exponent),
            ValueBias::Custom(f) => f(value),
        };
        if w > 0.0 {
            w
        } else {
            0.0
        }
    }

    /// Whether [`shifted_weight`](Self::shifted_weight) honors its shift.
    pub(crate) fn is_shift_invariant(&self) -> bool {
        matches!(self, ValueBias::Exponential { .. })
    }

    /// Checks the bias parameters.
    pub fn validate(&self) -> Result<(), SamplingError> {
        match self {
            ValueBias::Exponential { rate } if !rate.is_finite() => Err(
                SamplingError::InvalidBias(format!("exponential rate must be finite, got {rate}")),
            ),
            ValueBias::Power { exponent } if !exponent.is_finite() || *exponent < 0.0 => {
                Err(SamplingError::InvalidBias(format!(
                    "power exponent must be finite and non-negative, got {exponent}"
                )))
            }
            _ => Ok(()),
        }
    }
}
