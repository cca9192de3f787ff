//! Samplers: complete-candidate builders with shared progress tracking.
//!
//! A [`Sampler`] produces complete candidates, reports each to the problem
//! for costing, and merges the result into a shared
//! [`ProgressTracker`](crate::tracker::ProgressTracker).
//!
//! # Samplers
//!
//! - [`ConstructiveSampler`]: grows a partial candidate one choice at a time,
//!   scoring choices with a [`ConstructiveHeuristic`](crate::heuristic::ConstructiveHeuristic)
//!   and picking with a [`SelectionRule`](crate::selection::SelectionRule).
//!   Aliases name the usual rules: [`GreedySampler`], [`HbssSampler`],
//!   [`VbssSampler`], [`AcceptanceBandSampler`].
//! - [`IterativeSampler`]: plain random restart from an [`Initializer`].
//!
//! # Parallelism
//!
//! Samplers are single-threaded. Run several at once by calling
//! [`Sampler::split`] and handing each copy to its own thread; copies share
//! the problem and tracker but own their scratch buffers and random streams.

mod constructive;
mod iterative;
mod types;

pub use constructive::{
    AcceptanceBandSampler, ConstructiveSampler, GreedySampler, HbssSampler, VbssSampler,
};
pub use iterative::{Initializer, IntegerVectorInitializer, IterativeSampler, PermutationInitializer};
pub use types::{CandidateCost, Sampler, SharedTracker};
