//! Partial fixed-width integer vectors.

use super::PartialCandidate;
use crate::error::SamplingError;

/// An integer vector under construction.
///
/// Position `p` takes a value from its own inclusive range `[min_p, max_p]`.
/// While position `size()` is open, extension `i` is the value `min_p + i`,
/// and [`num_extensions`](PartialCandidate::num_extensions) is that range's
/// width. Nothing is removed from later ranges when a value is committed.
///
/// # Examples
///
/// ```
/// use u_constructive::partial::{PartialCandidate, PartialIntegerVector};
///
/// let mut v = PartialIntegerVector::with_bounds(vec![(0, 1), (5, 9)]).unwrap();
/// assert_eq!(v.num_extensions(), 2);
/// v.extend(1).unwrap();
/// assert_eq!(v.num_extensions(), 5);
/// assert_eq!(v.get_extension(2).unwrap(), 7);
/// assert_eq!(v.to_complete(), vec![1, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialIntegerVector {
    bounds: Vec<(i64, i64)>,
    values: Vec<i64>,
}

impl PartialIntegerVector {
    /// Creates a vector of length `n` whose positions all range over `[min, max]`.
    pub fn uniform(n: usize, min: i64, max: i64) -> Result<Self, SamplingError> {
        Self::with_bounds(vec![(min, max); n])
    }

    /// Creates a vector with per-position inclusive bounds.
    ///
    /// # Errors
    ///
    /// - [`SamplingError::InvalidBounds`] when some position has `min > max`
    /// - [`SamplingError::BoundsTooWide`] when a range holds more values than `usize` counts
    pub fn with_bounds(bounds: Vec<(i64, i64)>) -> Result<Self, SamplingError> {
        for (position, &(min, max)) in bounds.iter().enumerate() {
            if min > max {
                return Err(SamplingError::InvalidBounds { position, min, max });
            }
            if width(min, max).is_none() {
                return Err(SamplingError::BoundsTooWide { position, min, max });
            }
        }
        Ok(Self {
            values: Vec::with_capacity(bounds.len()),
            bounds,
        })
    }

    /// Inclusive bounds of every position.
    pub fn bounds(&self) -> &[(i64, i64)] {
        &self.bounds
    }

    /// Committed values.
    pub fn committed(&self) -> &[i64] {
        &self.values
    }
}

/// Number of values in `[min, max]`, if it fits in `usize`.
fn width(min: i64, max: i64) -> Option<usize> {
    usize::try_from(max.abs_diff(min)).ok()?.checked_add(1)
}

impl PartialCandidate for PartialIntegerVector {
    type Element = i64;
    type Candidate = Vec<i64>;

    fn size(&self) -> usize {
        self.values.len()
    }

    fn num_extensions(&self) -> usize {
        match self.bounds.get(self.values.len()) {
            Some(&(min, max)) => width(min, max).unwrap_or(0),
            None => 0,
        }
    }

    fn complete_length(&self) -> usize {
        self.bounds.len()
    }

    fn get(&self, i: usize) -> Result<i64, SamplingError> {
        self.values
            .get(i)
            .copied()
            .ok_or(SamplingError::IndexOutOfRange {
                index: i,
                len: self.values.len(),
            })
    }

    fn get_extension(&self, i: usize) -> Result<i64, SamplingError> {
        let width = self.num_extensions();
        if i >= width {
            return Err(SamplingError::IndexOutOfRange {
                index: i,
                len: width,
            });
        }
        let (min, _) = self.bounds[self.values.len()];
        // min + i <= max, so the two's-complement sum is exact.
        Ok(min.wrapping_add_unsigned(i as u64))
    }

    fn extend(&mut self, i: usize) -> Result<(), SamplingError> {
        let value = self.get_extension(i)?;
        self.values.push(value);
        Ok(())
    }

    fn to_complete(&self) -> Vec<i64> {
        let mut complete = self.values.clone();
        complete.extend(self.bounds[self.values.len()..].iter().map(|&(min, _)| min));
        complete
    }
}
