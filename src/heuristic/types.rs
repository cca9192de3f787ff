//! Core traits for constructive heuristics.

use crate::partial::PartialCandidate;
use crate::problem::Problem;
use crate::random::SplittableRng;
use std::sync::Arc;

/// Per-run cache updated in lockstep with a growing partial candidate.
///
/// A fresh value is created for every construction run. The sampler calls
/// [`extend`](IncrementalEvaluation::extend) exactly once per commit, with
/// the element about to be committed and the partial as it stood before the
/// commit.
pub trait IncrementalEvaluation<Q: PartialCandidate>: Send {
    /// Folds `element` into the cache.
    fn extend(&mut self, partial: &Q, element: Q::Element);
}

/// Incremental evaluation for heuristics that recompute from scratch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoIncrementalEvaluation;

impl<Q: PartialCandidate> IncrementalEvaluation<Q> for NoIncrementalEvaluation {
    #[inline]
    fn extend(&mut self, _partial: &Q, _element: Q::Element) {}
}

/// A scoring strategy bound to exactly one problem instance.
///
/// `h` must be free of side effects: it may be called for any remaining
/// choice, any number of times, and must return the same score for the same
/// partial candidate and incremental state.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_constructive::heuristic::{ConstructiveHeuristic, NoIncrementalEvaluation};
/// use u_constructive::partial::PartialPermutation;
/// use u_constructive::problem::Problem;
///
/// struct Identity;
///
/// impl Problem for Identity {
///     type Candidate = Vec<usize>;
///     type Cost = i64;
///     fn cost(&self, perm: &Vec<usize>) -> i64 {
///         perm.iter().enumerate().filter(|(i, v)| i != *v).count() as i64
///     }
/// }
///
/// struct SmallestFirst {
///     problem: Arc<Identity>,
///     n: usize,
/// }
///
/// impl ConstructiveHeuristic for SmallestFirst {
///     type Problem = Identity;
///     type Partial = PartialPermutation;
///     type Incremental = NoIncrementalEvaluation;
///
///     fn problem(&self) -> &Arc<Identity> {
///         &self.problem
///     }
///     fn complete_length(&self) -> usize {
///         self.n
///     }
///     fn create_partial(&self, n: usize) -> PartialPermutation {
///         PartialPermutation::new(n)
///     }
///     fn create_incremental_evaluation(&self) -> NoIncrementalEvaluation {
///         NoIncrementalEvaluation
///     }
///     fn h(&self, _p: &PartialPermutation, element: usize, _inc: &NoIncrementalEvaluation) -> f64 {
///         -(element as f64)
///     }
/// }
/// ```
pub trait ConstructiveHeuristic: Send + Sync {
    /// The problem this heuristic is bound to.
    type Problem: Problem;

    /// Partial candidate type grown by samplers using this heuristic.
    type Partial: PartialCandidate<Candidate = <Self::Problem as Problem>::Candidate>;

    /// Per-run cache type.
    type Incremental: IncrementalEvaluation<Self::Partial>;

    /// The bound problem instance.
    fn problem(&self) -> &Arc<Self::Problem>;

    /// Number of elements in a complete candidate.
    fn complete_length(&self) -> usize;

    /// Creates an empty partial candidate of length `n`.
    fn create_partial(&self, n: usize) -> Self::Partial;

    /// Creates the cache for one construction run.
    fn create_incremental_evaluation(&self) -> Self::Incremental;

    /// Starts construction run number `run` of the calling sampler.
    ///
    /// Samplers call this instead of
    /// [`create_incremental_evaluation`](Self::create_incremental_evaluation),
    /// passing their own 0-based run counter and random stream. Heuristics
    /// that make per-run choices draw from `rng` here, so split samplers
    /// never contend for or interleave on shared state. The default ignores
    /// both arguments.
    fn start_run(&self, run: u64, rng: &mut SplittableRng) -> Self::Incremental {
        let _ = (run, rng);
        self.create_incremental_evaluation()
    }

    /// Desirability of committing `element` next. Higher is better.
    fn h(
        &self,
        partial: &Self::Partial,
        element: <Self::Partial as PartialCandidate>::Element,
        incremental: &Self::Incremental,
    ) -> f64;
}
