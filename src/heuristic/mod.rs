//! Constructive heuristics.
//!
//! A [`ConstructiveHeuristic`] scores each remaining choice of a partial
//! candidate; higher scores are preferred. Heuristics that can maintain
//! running aggregates (elapsed time, remaining work, ...) expose them
//! through an [`IncrementalEvaluation`] that the sampler updates once per
//! commit, instead of rescanning the partial candidate for every score.
//!
//! [`HybridHeuristic`] combines several heuristics over the same problem and
//! routes each complete construction to one of them.

mod hybrid;
mod types;

pub use hybrid::{DynHeuristic, HybridHeuristic, HybridIncrementalEvaluation, HybridPolicy};
pub use types::{ConstructiveHeuristic, IncrementalEvaluation, NoIncrementalEvaluation};
