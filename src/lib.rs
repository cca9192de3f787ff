//! Domain-agnostic constructive heuristic sampling.
//!
//! Builds candidate solutions to combinatorial problems one discrete choice
//! at a time, guided by a pluggable desirability score per choice, and runs
//! many such randomized constructions while tracking the best result.
//!
//! - **Partial candidates**: index-indirected in-progress solutions
//!   ([`partial`]).
//! - **Constructive heuristics**: scoring strategies with optional
//!   incremental evaluation, and hybrids of several heuristics
//!   ([`heuristic`]).
//! - **Selection algorithms**: greedy argmax, rank-biased (HBSS),
//!   value-biased (VBSS) and acceptance-band choice ([`selection`]).
//! - **Samplers**: orchestration of the above into `optimize` / `split`
//!   objects, plus plain random restart ([`sampler`]).
//! - **Progress tracking**: thread-safe best-result and cancellation state
//!   shared by split samplers ([`tracker`]).
//!
//! # Architecture
//!
//! Problems, concrete heuristics and any later improvement phase are defined
//! by consumers. This crate holds no domain concepts and does not own
//! threads: parallel search runs split samplers on the caller's executor.

pub mod error;
pub mod heuristic;
pub mod partial;
pub mod problem;
pub mod random;
pub mod sampler;
pub mod selection;
pub mod tracker;

#[cfg(test)]
pub(crate) mod testing;

pub use error::SamplingError;
