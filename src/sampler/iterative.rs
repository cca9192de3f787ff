//! Plain iterative random sampling.
//!
//! The baseline of the sampler family: no heuristic, no partial candidate.
//! Each sample is a complete random candidate drawn from an [`Initializer`].

use super::types::{record, CandidateCost, Sampler, SharedTracker};
use crate::error::SamplingError;
use crate::problem::{Problem, SolutionCostPair};
use crate::random::{create_rng, SplittableRng};
use crate::tracker::ProgressTracker;
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;

/// Produces complete random candidates.
pub trait Initializer: Send + Sync {
    /// Candidate type produced.
    type Candidate;

    /// Draws one candidate.
    fn create_candidate<R: Rng>(&self, rng: &mut R) -> Self::Candidate;
}

/// Uniformly random permutations of `0..length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermutationInitializer {
    length: usize,
}

impl PermutationInitializer {
    /// Permutations of `0..length`.
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Initializer for PermutationInitializer {
    type Candidate = Vec<usize>;

    fn create_candidate<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        let mut perm: Vec<usize> = (0..self.length).collect();
        perm.shuffle(rng);
        perm
    }
}

/// Integer vectors drawn uniformly from per-position inclusive bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerVectorInitializer {
    bounds: Vec<(i64, i64)>,
}

impl IntegerVectorInitializer {
    /// Creates the initializer, rejecting positions with `min > max`.
    pub fn new(bounds: Vec<(i64, i64)>) -> Result<Self, SamplingError> {
        if let Some((position, &(min, max))) =
            bounds.iter().enumerate().find(|(_, (lo, hi))| lo > hi)
        {
            return Err(SamplingError::InvalidBounds { position, min, max });
        }
        Ok(Self { bounds })
    }
}

impl Initializer for IntegerVectorInitializer {
    type Candidate = Vec<i64>;

    fn create_candidate<R: Rng>(&self, rng: &mut R) -> Vec<i64> {
        self.bounds
            .iter()
            .map(|&(min, max)| rng.random_range(min..=max))
            .collect()
    }
}

/// Random restart: draws candidates, keeps the best.
///
/// # Examples
///
/// ```ignore
/// let mut sampler = IterativeSampler::new(problem, PermutationInitializer::new(20)).with_seed(1);
/// let best = sampler.optimize_n(1000)?;
/// ```
pub struct IterativeSampler<P, I>
where
    P: Problem,
    I: Initializer<Candidate = P::Candidate>,
{
    problem: Arc<P>,
    initializer: Arc<I>,
    tracker: SharedTracker<P>,
    rng: SplittableRng,
    run_length: u64,
}

impl<P, I> IterativeSampler<P, I>
where
    P: Problem,
    I: Initializer<Candidate = P::Candidate>,
{
    /// Creates a sampler with a fresh tracker and a randomly seeded stream.
    pub fn new(problem: Arc<P>, initializer: I) -> Self {
        Self {
            problem,
            initializer: Arc::new(initializer),
            tracker: Arc::new(ProgressTracker::new()),
            rng: create_rng(None),
            run_length: 0,
        }
    }

    /// Reseeds the random stream.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SplittableRng::seed_from_u64(seed);
        self
    }

    /// Reports to an existing tracker instead of a fresh one.
    pub fn with_tracker(mut self, tracker: SharedTracker<P>) -> Self {
        self.tracker = tracker;
        self
    }
}

impl<P, I> Sampler for IterativeSampler<P, I>
where
    P: Problem,
    I: Initializer<Candidate = P::Candidate>,
{
    type Problem = P;

    fn optimize(&mut self) -> Result<Option<CandidateCost<P>>, SamplingError> {
        if self.tracker.is_halted() {
            return Ok(None);
        }
        let candidate = self.initializer.create_candidate(&mut self.rng);
        let cost = self.problem.cost(&candidate);
        let pair = SolutionCostPair::new(candidate, cost, self.problem.is_min_cost(cost));
        self.run_length += 1;
        record::<P>(&self.tracker, &pair, "iterative", self.run_length);
        Ok(Some(pair))
    }

    fn progress_tracker(&self) -> &SharedTracker<P> {
        &self.tracker
    }

    fn set_progress_tracker(&mut self, tracker: SharedTracker<P>) {
        self.tracker = tracker;
    }

    fn problem(&self) -> &Arc<P> {
        &self.problem
    }

    fn split(&self) -> Self {
        Self {
            problem: Arc::clone(&self.problem),
            initializer: Arc::clone(&self.initializer),
            tracker: Arc::clone(&self.tracker),
            rng: self.rng.split(),
            run_length: 0,
        }
    }

    fn total_run_length(&self) -> u64 {
        self.run_length
    }
}
