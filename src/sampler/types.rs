//! Core sampler trait.

use crate::error::SamplingError;
use crate::problem::{Cost, Problem, SolutionCostPair};
use crate::tracker::ProgressTracker;
use std::sync::Arc;

/// Result pair of a problem's candidates.
pub type CandidateCost<P> = SolutionCostPair<<P as Problem>::Candidate, <P as Problem>::Cost>;

/// Tracker shared by every sampler of a search session over `P`.
pub type SharedTracker<P> = Arc<ProgressTracker<<P as Problem>::Candidate, <P as Problem>::Cost>>;

/// Builds complete candidates and merges them into a shared tracker.
///
/// Cancellation is cooperative: every call checks the tracker first and
/// returns `Ok(None)` when it is already stopped or holds a known optimum.
/// A construction in progress is never interrupted.
pub trait Sampler: Send {
    /// The problem being optimized.
    type Problem: Problem;

    /// Builds one candidate.
    fn optimize(&mut self) -> Result<Option<CandidateCost<Self::Problem>>, SamplingError>;

    /// Builds up to `num_samples` candidates and returns the best of them.
    ///
    /// The tracker is checked before every sample, so a batch ends early once
    /// the search is stopped or a known optimum is found.
    fn optimize_n(
        &mut self,
        num_samples: usize,
    ) -> Result<Option<CandidateCost<Self::Problem>>, SamplingError> {
        let mut best: Option<CandidateCost<Self::Problem>> = None;
        for _ in 0..num_samples {
            match self.optimize()? {
                Some(pair) => {
                    if best.as_ref().is_none_or(|b| pair.improves_on(b)) {
                        best = Some(pair);
                    }
                }
                None => break,
            }
        }
        Ok(best)
    }

    /// The tracker this sampler reports to.
    fn progress_tracker(&self) -> &SharedTracker<Self::Problem>;

    /// Replaces the tracker this sampler reports to.
    fn set_progress_tracker(&mut self, tracker: SharedTracker<Self::Problem>);

    /// The problem instance.
    fn problem(&self) -> &Arc<Self::Problem>;

    /// Independent copy sharing problem and tracker, with fresh scratch
    /// buffers, a distinct random stream and a zero run counter.
    fn split(&self) -> Self
    where
        Self: Sized;

    /// Number of candidates this instance has built. Not shared with splits.
    fn total_run_length(&self) -> u64;
}

/// Merges a finished sample into the tracker, logging new bests.
pub(crate) fn record<P: Problem>(
    tracker: &SharedTracker<P>,
    pair: &CandidateCost<P>,
    sampler: &str,
    run: u64,
) {
    if tracker.update(pair) {
        tracing::debug!(
            sampler,
            run,
            cost = pair.cost().to_f64(),
            optimal = pair.is_known_optimal(),
            "new best"
        );
    } else {
        tracing::trace!(sampler, run, cost = pair.cost().to_f64(), "sample built");
    }
}
