//! Hybrid heuristic: one member heuristic per construction run.

use super::types::{ConstructiveHeuristic, IncrementalEvaluation};
use crate::error::SamplingError;
use crate::partial::PartialCandidate;
use crate::problem::Problem;
use crate::random::{create_rng, SplittableRng};
use rand::Rng;
use std::sync::Arc;

/// Shared, type-erased heuristic accepted as a hybrid member.
pub type DynHeuristic<P, Q, I> =
    Arc<dyn ConstructiveHeuristic<Problem = P, Partial = Q, Incremental = I>>;

/// How a hybrid picks the member heuristic for each run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HybridPolicy {
    /// Every member equally likely.
    #[default]
    Uniform,

    /// Member `i` chosen with probability `weights[i] / sum(weights)`.
    ///
    /// One positive weight per member is required.
    Weighted(Vec<u32>),

    /// Members in turn across the successive runs of one sampler.
    RoundRobin,
}

/// Incremental evaluation of a hybrid run: the chosen member and its cache.
#[derive(Debug, Clone, PartialEq)]
pub struct HybridIncrementalEvaluation<I> {
    member: usize,
    inner: I,
}

impl<I> HybridIncrementalEvaluation<I> {
    /// Index of the member heuristic driving this run.
    pub fn member(&self) -> usize {
        self.member
    }

    /// The member's own incremental evaluation.
    pub fn inner(&self) -> &I {
        &self.inner
    }
}

impl<Q, I> IncrementalEvaluation<Q> for HybridIncrementalEvaluation<I>
where
    Q: PartialCandidate,
    I: IncrementalEvaluation<Q>,
{
    fn extend(&mut self, partial: &Q, element: Q::Element) {
        self.inner.extend(partial, element);
    }
}

/// Combines several heuristics bound to the same problem instance.
///
/// The member is chosen when a run starts, and every score and cache update
/// of that run is delegated to it. Because the hybrid is itself a
/// [`ConstructiveHeuristic`], any sampler can use it.
///
/// The hybrid holds no mutable state. Random policies draw from the stream
/// of the sampler running the construction and round-robin follows that
/// sampler's run counter, so each split sampler sees its own member sequence
/// and a seeded sampler replays it exactly.
///
/// Members must share partial-candidate and incremental-evaluation types;
/// heuristics without a cache use
/// [`NoIncrementalEvaluation`](super::NoIncrementalEvaluation).
pub struct HybridHeuristic<P, Q, I>
where
    P: Problem,
    Q: PartialCandidate<Candidate = P::Candidate>,
    I: IncrementalEvaluation<Q>,
{
    members: Vec<DynHeuristic<P, Q, I>>,
    policy: HybridPolicy,
    cumulative: Vec<u64>,
}

impl<P, Q, I> HybridHeuristic<P, Q, I>
where
    P: Problem,
    Q: PartialCandidate<Candidate = P::Candidate>,
    I: IncrementalEvaluation<Q>,
{
    /// Creates a hybrid over `members` with the given choice policy.
    ///
    /// # Errors
    ///
    /// - [`SamplingError::EmptyHybrid`] when `members` is empty
    /// - [`SamplingError::MismatchedProblem`] when members do not share one problem instance
    /// - [`SamplingError::WeightLengthMismatch`] / [`SamplingError::NonPositiveWeight`]
    ///   for a bad [`HybridPolicy::Weighted`] vector
    pub fn new(
        members: Vec<DynHeuristic<P, Q, I>>,
        policy: HybridPolicy,
    ) -> Result<Self, SamplingError> {
        let first = members.first().ok_or(SamplingError::EmptyHybrid)?;
        if let Some(index) = members
            .iter()
            .position(|m| !Arc::ptr_eq(m.problem(), first.problem()))
        {
            return Err(SamplingError::MismatchedProblem { index });
        }

        let cumulative = match &policy {
            HybridPolicy::Weighted(weights) => {
                if weights.len() != members.len() {
                    return Err(SamplingError::WeightLengthMismatch {
                        expected: members.len(),
                        found: weights.len(),
                    });
                }
                if let Some(index) = weights.iter().position(|&w| w == 0) {
                    return Err(SamplingError::NonPositiveWeight { index });
                }
                weights
                    .iter()
                    .scan(0u64, |total, &w| {
                        *total += u64::from(w);
                        Some(*total)
                    })
                    .collect()
            }
            _ => Vec::new(),
        };

        Ok(Self {
            members,
            policy,
            cumulative,
        })
    }

    /// Number of member heuristics.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`: construction rejects empty member lists.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The choice policy.
    pub fn policy(&self) -> &HybridPolicy {
        &self.policy
    }

    /// Member driving run number `run`, drawing from `rng` for the random policies.
    pub fn choose_member<R: Rng>(&self, run: u64, rng: &mut R) -> usize {
        let n = self.members.len();
        match self.policy {
            HybridPolicy::Uniform => rng.random_range(0..n),
            HybridPolicy::Weighted(_) => {
                let total = self.cumulative[n - 1];
                let u = rng.random_range(0..total);
                self.cumulative.partition_point(|&c| c <= u)
            }
            HybridPolicy::RoundRobin => (run % n as u64) as usize,
        }
    }
}

impl<P, Q, I> ConstructiveHeuristic for HybridHeuristic<P, Q, I>
where
    P: Problem,
    Q: PartialCandidate<Candidate = P::Candidate>,
    I: IncrementalEvaluation<Q>,
{
    type Problem = P;
    type Partial = Q;
    type Incremental = HybridIncrementalEvaluation<I>;

    fn problem(&self) -> &Arc<P> {
        self.members[0].problem()
    }

    fn complete_length(&self) -> usize {
        self.members[0].complete_length()
    }

    fn create_partial(&self, n: usize) -> Q {
        self.members[0].create_partial(n)
    }

    /// Outside a sampler, a run counts as run 0 on a freshly seeded stream.
    fn create_incremental_evaluation(&self) -> HybridIncrementalEvaluation<I> {
        self.start_run(0, &mut create_rng(None))
    }

    fn start_run(&self, run: u64, rng: &mut SplittableRng) -> HybridIncrementalEvaluation<I> {
        let member = self.choose_member(run, rng);
        tracing::trace!(run, member, "hybrid heuristic member chosen");
        HybridIncrementalEvaluation {
            member,
            inner: self.members[member].start_run(run, rng),
        }
    }

    fn h(&self, partial: &Q, element: Q::Element, incremental: &Self::Incremental) -> f64 {
        self.members[incremental.member].h(partial, element, &incremental.inner)
    }
}
