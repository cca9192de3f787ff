//! Problem contract consumed by every sampler.
//!
//! A [`Problem`] evaluates complete candidates. It knows nothing about how
//! candidates are built; constructive heuristics and samplers only ask it for
//! costs and, optionally, for a known optimum to stop early.

mod pair;
mod types;

pub use pair::SolutionCostPair;
pub use types::{Cost, Problem};
