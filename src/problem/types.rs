//! Core traits for optimization problems.

use std::fmt::Debug;

/// Marker trait for cost values.
///
/// Costs are minimized: lower is better. Integer and real-valued problems
/// both plug in through this trait.
pub trait Cost: PartialOrd + Copy + Send + Sync + Debug + 'static {
    /// Converts the cost to `f64` for logging.
    fn to_f64(self) -> f64;
}

impl Cost for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

impl Cost for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Cost for i64 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Cost for i32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// Defines an optimization problem over complete candidates.
///
/// A problem is shared read-only by every sampler of a search session, so it
/// must be `Send + Sync` and must not change while a search runs.
///
/// # Examples
///
/// ```
/// use u_constructive::problem::Problem;
///
/// struct Displacement;
///
/// impl Problem for Displacement {
///     type Candidate = Vec<usize>;
///     type Cost = i64;
///
///     fn cost(&self, perm: &Vec<usize>) -> i64 {
///         perm.iter()
///             .enumerate()
///             .map(|(i, &v)| (i as i64 - v as i64).abs())
///             .sum()
///     }
///
///     fn min_cost(&self) -> Option<i64> {
///         Some(0)
///     }
/// }
///
/// assert!(Displacement.is_min_cost(Displacement.cost(&vec![0, 1, 2])));
/// ```
pub trait Problem: Send + Sync {
    /// Complete candidate representation.
    type Candidate: Clone + Send + Sync + Debug;

    /// Cost type. Lower is better.
    type Cost: Cost;

    /// Computes the cost of a complete candidate.
    fn cost(&self, candidate: &Self::Candidate) -> Self::Cost;

    /// Restates the cost for reporting. Defaults to [`cost`](Problem::cost).
    fn value(&self, candidate: &Self::Candidate) -> Self::Cost {
        self.cost(candidate)
    }

    /// Lower bound on the cost of any candidate, if one is known.
    fn min_cost(&self) -> Option<Self::Cost> {
        None
    }

    /// Whether `cost` is provably optimal.
    ///
    /// The default compares against [`min_cost`](Problem::min_cost).
    fn is_min_cost(&self, cost: Self::Cost) -> bool {
        self.min_cost().is_some_and(|min| cost == min)
    }
}
