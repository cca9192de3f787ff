//! Constructive sampling loop.

use super::types::{record, CandidateCost, Sampler, SharedTracker};
use crate::error::SamplingError;
use crate::heuristic::{ConstructiveHeuristic, IncrementalEvaluation};
use crate::partial::PartialCandidate;
use crate::problem::{Problem, SolutionCostPair};
use crate::random::{create_rng, SplittableRng};
use crate::selection::{
    AcceptanceBand, Greedy, RankBias, RankBiased, SelectionRule, ValueBias, ValueBiased,
};
use crate::tracker::ProgressTracker;
use std::sync::Arc;

/// Deterministic greedy construction.
pub type GreedySampler<H> = ConstructiveSampler<H, Greedy>;

/// Heuristic-biased stochastic sampling.
pub type HbssSampler<H> = ConstructiveSampler<H, RankBiased>;

/// Value-biased stochastic sampling.
pub type VbssSampler<H> = ConstructiveSampler<H, ValueBiased>;

/// Uniform sampling within an acceptance band.
pub type AcceptanceBandSampler<H> = ConstructiveSampler<H, AcceptanceBand>;

/// Builds candidates one choice at a time.
///
/// Each step scores every remaining choice with the heuristic, lets the
/// selection rule pick one, updates the incremental evaluation and commits the
/// choice. A finished candidate is costed by the problem and merged into the
/// progress tracker.
///
/// # Examples
///
/// ```ignore
/// let heuristic = Arc::new(MyHeuristic::new(problem));
/// let mut sampler = HbssSampler::hbss(heuristic, RankBias::default())?.with_seed(42);
/// let best = sampler.optimize_n(100)?;
/// ```
pub struct ConstructiveSampler<H: ConstructiveHeuristic, S: SelectionRule> {
    heuristic: Arc<H>,
    tracker: SharedTracker<H::Problem>,
    rule: S,
    rng: SplittableRng,
    values: Vec<f64>,
    run_length: u64,
}

impl<H: ConstructiveHeuristic, S: SelectionRule> ConstructiveSampler<H, S> {
    /// Creates a sampler with a fresh tracker and a randomly seeded stream.
    pub fn new(heuristic: Arc<H>, rule: S) -> Self {
        Self {
            heuristic,
            tracker: Arc::new(ProgressTracker::new()),
            rule,
            rng: create_rng(None),
            values: Vec::new(),
            run_length: 0,
        }
    }

    /// Reseeds the random stream.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SplittableRng::seed_from_u64(seed);
        self
    }

    /// Reports to an existing tracker instead of a fresh one.
    pub fn with_tracker(mut self, tracker: SharedTracker<H::Problem>) -> Self {
        self.tracker = tracker;
        self
    }

    /// The heuristic.
    pub fn heuristic(&self) -> &Arc<H> {
        &self.heuristic
    }

    /// The selection rule.
    pub fn rule(&self) -> &S {
        &self.rule
    }

    fn construct(&mut self) -> Result<CandidateCost<H::Problem>, SamplingError> {
        let n = self.heuristic.complete_length();
        let mut partial = self.heuristic.create_partial(n);
        let mut incremental = self.heuristic.start_run(self.run_length, &mut self.rng);

        while !partial.is_complete() {
            let k = partial.num_extensions();
            if k == 0 {
                break;
            }

            let chosen = if k == 1 {
                0
            } else {
                if self.values.len() < k {
                    self.values.resize(k, 0.0);
                }
                let mut max = f64::NEG_INFINITY;
                for i in 0..k {
                    let element = partial.get_extension(i)?;
                    let h = self.heuristic.h(&partial, element, &incremental);
                    self.values[i] = h;
                    if h > max {
                        max = h;
                    }
                }
                self.rule
                    .choose(&mut self.values[..k], max, &mut self.rng)
                    .min(k - 1)
            };

            let element = partial.get_extension(chosen)?;
            incremental.extend(&partial, element);
            partial.extend(chosen)?;
        }

        let problem = self.heuristic.problem();
        let candidate = partial.to_complete();
        let cost = problem.cost(&candidate);
        let pair = SolutionCostPair::new(candidate, cost, problem.is_min_cost(cost));

        self.run_length += 1;
        record::<H::Problem>(&self.tracker, &pair, self.rule.name(), self.run_length);
        Ok(pair)
    }
}

impl<H: ConstructiveHeuristic> ConstructiveSampler<H, Greedy> {
    /// Deterministic greedy sampler.
    pub fn greedy(heuristic: Arc<H>) -> Self {
        Self::new(heuristic, Greedy)
    }
}

impl<H: ConstructiveHeuristic> ConstructiveSampler<H, RankBiased> {
    /// Rank-biased sampler, with the bias table precomputed for the complete length.
    pub fn hbss(heuristic: Arc<H>, bias: RankBias) -> Result<Self, SamplingError> {
        let rule = RankBiased::with_capacity(bias, heuristic.complete_length())?;
        Ok(Self::new(heuristic, rule))
    }
}

impl<H: ConstructiveHeuristic> ConstructiveSampler<H, ValueBiased> {
    /// Value-biased sampler.
    pub fn vbss(heuristic: Arc<H>, bias: ValueBias) -> Result<Self, SamplingError> {
        Ok(Self::new(heuristic, ValueBiased::new(bias)?))
    }
}

impl<H: ConstructiveHeuristic> ConstructiveSampler<H, AcceptanceBand> {
    /// Acceptance-band sampler with band width `beta`.
    pub fn acceptance_band(heuristic: Arc<H>, beta: f64) -> Result<Self, SamplingError> {
        Ok(Self::new(heuristic, AcceptanceBand::new(beta)?))
    }
}

impl<H: ConstructiveHeuristic, S: SelectionRule> Sampler for ConstructiveSampler<H, S> {
    type Problem = H::Problem;

    fn optimize(&mut self) -> Result<Option<CandidateCost<H::Problem>>, SamplingError> {
        if self.tracker.is_halted() {
            return Ok(None);
        }
        self.construct().map(Some)
    }

    fn progress_tracker(&self) -> &SharedTracker<H::Problem> {
        &self.tracker
    }

    fn set_progress_tracker(&mut self, tracker: SharedTracker<H::Problem>) {
        self.tracker = tracker;
    }

    fn problem(&self) -> &Arc<H::Problem> {
        self.heuristic.problem()
    }

    fn split(&self) -> Self {
        Self {
            heuristic: Arc::clone(&self.heuristic),
            tracker: Arc::clone(&self.tracker),
            rule: self.rule.split(),
            rng: self.rng.split(),
            values: Vec::new(),
            run_length: 0,
        }
    }

    fn total_run_length(&self) -> u64 {
        self.run_length
    }
}
