//! Partial candidates: in-progress solutions built one choice at a time.
//!
//! A partial candidate is split into a *committed* prefix and the set of
//! *remaining* choices. Selection algorithms never address elements by
//! identity; they pick a position `i` in the remaining list and call
//! [`PartialCandidate::extend`] with it.
//!
//! # Domains
//!
//! - [`PartialPermutation`]: orderings of `0..n`. Every commit removes one
//!   remaining element, so `size() + num_extensions()` stays `n`.
//! - [`PartialIntegerVector`]: fixed-width integer vectors where each
//!   position draws from its own inclusive range. The extension count is the
//!   width of the next position's range.

mod integer_vector;
mod permutation;

pub use integer_vector::PartialIntegerVector;
pub use permutation::PartialPermutation;

use crate::error::SamplingError;

/// An in-progress candidate plus bookkeeping of the remaining choices.
pub trait PartialCandidate: Send {
    /// Domain element committed at each step.
    type Element: Copy + Send + Sync + std::fmt::Debug;

    /// Complete candidate this partial grows into.
    type Candidate: Clone + Send + Sync + std::fmt::Debug;

    /// Number of committed elements.
    fn size(&self) -> usize;

    /// Number of choices available for the next commit.
    fn num_extensions(&self) -> usize;

    /// Length at which the candidate is complete.
    fn complete_length(&self) -> usize;

    /// Committed element at position `i`.
    fn get(&self, i: usize) -> Result<Self::Element, SamplingError>;

    /// Most recently committed element.
    fn get_last(&self) -> Result<Self::Element, SamplingError> {
        match self.size() {
            0 => Err(SamplingError::IndexOutOfRange { index: 0, len: 0 }),
            n => self.get(n - 1),
        }
    }

    /// Remaining choice at position `i` of the remaining list.
    fn get_extension(&self, i: usize) -> Result<Self::Element, SamplingError>;

    /// Commits the remaining choice at position `i`.
    fn extend(&mut self, i: usize) -> Result<(), SamplingError>;

    /// Whether `size()` has reached the complete length.
    fn is_complete(&self) -> bool {
        self.size() == self.complete_length()
    }

    /// Materializes a complete candidate: the committed prefix followed by
    /// the remaining choices in their current order. Never fails.
    fn to_complete(&self) -> Self::Candidate;
}
