//! Error type shared by every module of the crate.
//!
//! All variants describe programmer or configuration mistakes. None of them
//! is transient, so nothing in the crate retries on error.

use std::fmt;

/// Faults raised while configuring or driving a constructive search.
#[derive(Debug, Clone, PartialEq)]
pub enum SamplingError {
    /// Acceptance-band width outside `[0, 1]`.
    InvalidBeta(f64),

    /// A hybrid heuristic was built without any member.
    EmptyHybrid,

    /// A hybrid member is bound to a different problem instance than the first member.
    MismatchedProblem {
        /// Position of the offending member.
        index: usize,
    },

    /// Weighted hybrid with a weight vector of the wrong length.
    WeightLengthMismatch {
        /// Number of member heuristics.
        expected: usize,
        /// Number of weights supplied.
        found: usize,
    },

    /// Weighted hybrid with a zero weight.
    NonPositiveWeight {
        /// Position of the offending weight.
        index: usize,
    },

    /// A bias function parameter is unusable (negative exponent, NaN rate, ...).
    InvalidBias(String),

    /// An integer-vector domain with `min > max` at some position.
    InvalidBounds {
        /// Vector position.
        position: usize,
        /// Lower bound.
        min: i64,
        /// Upper bound.
        max: i64,
    },

    /// An integer-vector range holding more values than `usize` can count.
    BoundsTooWide {
        /// Vector position.
        position: usize,
        /// Lower bound.
        min: i64,
        /// Upper bound.
        max: i64,
    },

    /// Indexing a partial candidate past `size()` or `num_extensions()`.
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Valid length.
        len: usize,
    },
}

impl fmt::Display for SamplingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBeta(beta) => {
                write!(f, "acceptance band beta must be in [0, 1], got {beta}")
            }
            Self::EmptyHybrid => {
                write!(f, "hybrid heuristic requires at least one member heuristic")
            }
            Self::MismatchedProblem { index } => write!(
                f,
                "hybrid member {index} is bound to a different problem instance"
            ),
            Self::WeightLengthMismatch { expected, found } => {
                write!(f, "expected {expected} hybrid weights, got {found}")
            }
            Self::NonPositiveWeight { index } => {
                write!(f, "hybrid weight at index {index} must be positive")
            }
            Self::InvalidBias(reason) => write!(f, "invalid bias function: {reason}"),
            Self::InvalidBounds { position, min, max } => write!(
                f,
                "invalid bounds at position {position}: min {min} > max {max}"
            ),
            Self::BoundsTooWide { position, min, max } => write!(
                f,
                "bounds at position {position} span too many values: [{min}, {max}]"
            ),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl std::error::Error for SamplingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            SamplingError::InvalidBeta(1.5).to_string(),
            "acceptance band beta must be in [0, 1], got 1.5"
        );
        assert_eq!(
            SamplingError::BoundsTooWide {
                position: 1,
                min: -5,
                max: 5
            }
            .to_string(),
            "bounds at position 1 span too many values: [-5, 5]"
        );
        assert_eq!(
            SamplingError::IndexOutOfRange { index: 4, len: 2 }.to_string(),
            "index 4 out of range for length 2"
        );
    }
}
