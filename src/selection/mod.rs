//! Selection algorithms for constructive sampling.
//!
//! Given the heuristic scores of the `k` remaining choices, a selection
//! algorithm returns the position to commit next.
//!
//! - [`Greedy`]: argmax, ties to the lowest position.
//! - [`RankBiased`] (HBSS): roulette over ranks. A cumulative table of rank
//!   biases picks a rank, then [`randomized_select`] finds the choice holding
//!   that rank without sorting.
//! - [`ValueBiased`] (VBSS): roulette over per-choice weights obtained by
//!   mapping each score through a [`ValueBias`] and normalizing with
//!   [`adjust_for_bias`].
//! - [`AcceptanceBand`]: uniform choice among every score within `beta` of
//!   the best, relative to the score range.
//!
//! # References
//!
//! - Bresina (1996), "Heuristic-Biased Stochastic Sampling"
//! - Cicirello & Smith (2005), "Enhancing Stochastic Search Performance by
//!   Value-Biased Randomization of Heuristics"
//! - Feo & Resende (1995), "Greedy Randomized Adaptive Search Procedures"

mod band;
mod bias;
mod quickselect;
mod roulette;
mod rules;

pub use band::{acceptance_band, choose_in_band};
pub use bias::{RankBias, ValueBias};
pub use quickselect::randomized_select;
pub use roulette::{adjust_for_bias, precompute_biases, select};
pub use rules::{AcceptanceBand, Greedy, RankBiased, SelectionRule, ValueBiased};
