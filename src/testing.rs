//! Shared fixtures for unit tests.

use crate::heuristic::{ConstructiveHeuristic, IncrementalEvaluation, NoIncrementalEvaluation};
use crate::partial::{PartialCandidate, PartialPermutation};
use crate::problem::Problem;
use std::sync::Arc;

/// Cost = sum of elements + n. Every permutation costs `n(n+1)/2`.
pub struct OffsetSum {
    pub n: usize,
}

impl Problem for OffsetSum {
    type Candidate = Vec<usize>;
    type Cost = i64;

    fn cost(&self, perm: &Vec<usize>) -> i64 {
        perm.iter().map(|&e| e as i64).sum::<i64>() + self.n as i64
    }
}

/// Prefers even elements, larger first, then odd elements, larger first.
pub struct EvenFirst {
    pub problem: Arc<OffsetSum>,
}

impl EvenFirst {
    pub fn new(n: usize) -> Self {
        Self {
            problem: Arc::new(OffsetSum { n }),
        }
    }
}

impl ConstructiveHeuristic for EvenFirst {
    type Problem = OffsetSum;
    type Partial = PartialPermutation;
    type Incremental = NoIncrementalEvaluation;

    fn problem(&self) -> &Arc<OffsetSum> {
        &self.problem
    }

    fn complete_length(&self) -> usize {
        self.problem.n
    }

    fn create_partial(&self, n: usize) -> PartialPermutation {
        PartialPermutation::new(n)
    }

    fn create_incremental_evaluation(&self) -> NoIncrementalEvaluation {
        NoIncrementalEvaluation
    }

    fn h(&self, _p: &PartialPermutation, element: usize, _inc: &NoIncrementalEvaluation) -> f64 {
        if element % 2 == 0 {
            self.problem.n as f64 + element as f64
        } else {
            element as f64
        }
    }
}

/// Sum of `|position - value|`; the identity permutation is optimal with cost 0.
pub struct Displacement {
    pub n: usize,
}

impl Problem for Displacement {
    type Candidate = Vec<usize>;
    type Cost = i64;

    fn cost(&self, perm: &Vec<usize>) -> i64 {
        perm.iter()
            .enumerate()
            .map(|(i, &v)| (i as i64 - v as i64).abs())
            .sum()
    }

    fn min_cost(&self) -> Option<i64> {
        Some(0)
    }
}

/// Prefers the element equal to the next position.
pub struct TowardIdentity {
    pub problem: Arc<Displacement>,
}

impl TowardIdentity {
    pub fn new(n: usize) -> Self {
        Self {
            problem: Arc::new(Displacement { n }),
        }
    }
}

impl ConstructiveHeuristic for TowardIdentity {
    type Problem = Displacement;
    type Partial = PartialPermutation;
    type Incremental = NoIncrementalEvaluation;

    fn problem(&self) -> &Arc<Displacement> {
        &self.problem
    }

    fn complete_length(&self) -> usize {
        self.problem.n
    }

    fn create_partial(&self, n: usize) -> PartialPermutation {
        PartialPermutation::new(n)
    }

    fn create_incremental_evaluation(&self) -> NoIncrementalEvaluation {
        NoIncrementalEvaluation
    }

    fn h(&self, p: &PartialPermutation, element: usize, _inc: &NoIncrementalEvaluation) -> f64 {
        -((p.size() as f64) - element as f64).abs()
    }
}

/// Single machine, total weighted completion time.
pub struct WeightedCompletion {
    pub processing: Vec<i64>,
    pub weights: Vec<i64>,
}

impl Problem for WeightedCompletion {
    type Candidate = Vec<usize>;
    type Cost = i64;

    fn cost(&self, order: &Vec<usize>) -> i64 {
        let mut time = 0;
        let mut total = 0;
        for &job in order {
            time += self.processing[job];
            total += self.weights[job] * time;
        }
        total
    }
}

/// Running clock plus the jobs folded into it.
#[derive(Debug)]
pub struct ElapsedClock {
    pub processing: Vec<i64>,
    pub time: i64,
    pub jobs: Vec<usize>,
}

impl IncrementalEvaluation<PartialPermutation> for ElapsedClock {
    fn extend(&mut self, partial: &PartialPermutation, element: usize) {
        assert_eq!(
            partial.size(),
            self.jobs.len(),
            "extend must run once per commit, before the commit"
        );
        assert!(!partial.contains(element));
        self.jobs.push(element);
        self.time += self.processing[element];
    }
}

impl ElapsedClock {
    fn fresh(problem: &WeightedCompletion) -> Self {
        Self {
            processing: problem.processing.clone(),
            time: 0,
            jobs: Vec::new(),
        }
    }

    /// Panics unless the cache holds exactly the committed prefix of `p`.
    pub fn assert_mirrors(&self, p: &PartialPermutation) {
        assert_eq!(self.jobs.as_slice(), p.committed());
        let expected: i64 = p.committed().iter().map(|&j| self.processing[j]).sum();
        assert_eq!(self.time, expected);
    }
}

/// Weighted shortest processing time, scored against the running clock.
///
/// `h` checks that the cache mirrors the committed prefix.
pub struct Wspt {
    pub problem: Arc<WeightedCompletion>,
}

impl ConstructiveHeuristic for Wspt {
    type Problem = WeightedCompletion;
    type Partial = PartialPermutation;
    type Incremental = ElapsedClock;

    fn problem(&self) -> &Arc<WeightedCompletion> {
        &self.problem
    }

    fn complete_length(&self) -> usize {
        self.problem.processing.len()
    }

    fn create_partial(&self, n: usize) -> PartialPermutation {
        PartialPermutation::new(n)
    }

    fn create_incremental_evaluation(&self) -> ElapsedClock {
        ElapsedClock::fresh(&self.problem)
    }

    fn h(&self, p: &PartialPermutation, element: usize, inc: &ElapsedClock) -> f64 {
        inc.assert_mirrors(p);
        let finish = inc.time + self.problem.processing[element];
        self.problem.weights[element] as f64 / finish as f64
    }
}

/// Longest processing time first; shares the [`ElapsedClock`] cache with [`Wspt`].
pub struct LongestFirst {
    pub problem: Arc<WeightedCompletion>,
}

impl ConstructiveHeuristic for LongestFirst {
    type Problem = WeightedCompletion;
    type Partial = PartialPermutation;
    type Incremental = ElapsedClock;

    fn problem(&self) -> &Arc<WeightedCompletion> {
        &self.problem
    }

    fn complete_length(&self) -> usize {
        self.problem.processing.len()
    }

    fn create_partial(&self, n: usize) -> PartialPermutation {
        PartialPermutation::new(n)
    }

    fn create_incremental_evaluation(&self) -> ElapsedClock {
        ElapsedClock::fresh(&self.problem)
    }

    fn h(&self, p: &PartialPermutation, element: usize, inc: &ElapsedClock) -> f64 {
        inc.assert_mirrors(p);
        self.problem.processing[element] as f64
    }
}

/// Prefers larger elements: greedy yields `n-1, ..., 0`.
pub struct Descending {
    pub problem: Arc<OffsetSum>,
}

impl ConstructiveHeuristic for Descending {
    type Problem = OffsetSum;
    type Partial = PartialPermutation;
    type Incremental = NoIncrementalEvaluation;

    fn problem(&self) -> &Arc<OffsetSum> {
        &self.problem
    }

    fn complete_length(&self) -> usize {
        self.problem.n
    }

    fn create_partial(&self, n: usize) -> PartialPermutation {
        PartialPermutation::new(n)
    }

    fn create_incremental_evaluation(&self) -> NoIncrementalEvaluation {
        NoIncrementalEvaluation
    }

    fn h(&self, _p: &PartialPermutation, element: usize, _inc: &NoIncrementalEvaluation) -> f64 {
        element as f64
    }
}
