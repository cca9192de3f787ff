//! Cumulative-weight roulette primitives.

use super::bias::{RankBias, ValueBias};

/// Builds the cumulative rank-bias table of length `n`.
///
/// Entry `i` holds `bias(1) + ... + bias(i + 1)`.
///
/// # Examples
///
/// ```
/// use u_constructive::selection::{precompute_biases, RankBias};
///
/// let table = precompute_biases(&RankBias::Linear, 3);
/// assert!((table[2] - (1.0 + 0.5 + 1.0 / 3.0)).abs() < 1e-12);
/// ```
pub fn precompute_biases(bias: &RankBias, n: usize) -> Vec<f64> {
    let mut table = Vec::with_capacity(n);
    grow_biases(&mut table, bias, n);
    table
}

/// Extends a cumulative rank-bias table in place until it holds `n` entries.
pub(crate) fn grow_biases(table: &mut Vec<f64>, bias: &RankBias, n: usize) {
    let mut total = table.last().copied().unwrap_or(0.0);
    for rank in (table.len() + 1)..=n {
        total += bias.weight(rank);
        table.push(total);
    }
}

/// Roulette lookup over the first `k` entries of an ascending cumulative array.
///
/// Returns the smallest index whose cumulative value strictly exceeds `u`,
/// or `k - 1` when none does. Drawing `u` uniformly from
/// `[0, cumulative[k - 1])` therefore picks index `i` with probability
/// proportional to `cumulative[i] - cumulative[i - 1]`.
///
/// # Examples
///
/// ```
/// use u_constructive::selection::select;
///
/// let cumulative = [0.25, 0.5, 0.75, 1.0];
/// assert_eq!(select(&cumulative, 4, 0.0), 0);
/// assert_eq!(select(&cumulative, 4, 0.5), 2);
/// assert_eq!(select(&cumulative, 4, 0.99), 3);
/// ```
pub fn select(cumulative: &[f64], k: usize, u: f64) -> usize {
    cumulative[..k]
        .partition_point(|&c| c <= u)
        .min(k.saturating_sub(1))
}

/// Turns the first `k` raw scores into a normalized cumulative-weight array.
///
/// Each score is mapped through `bias`, the weights are accumulated, and the
/// running totals are divided by the grand total. The last entry is set to
/// exactly `1.0`. When no weight is positive (or the total is not finite)
/// every choice receives the same increment.
///
/// # Examples
///
/// ```
/// use u_constructive::selection::{adjust_for_bias, ValueBias};
///
/// let mut values = [1.0, 3.0];
/// adjust_for_bias(&mut values, 2, &ValueBias::Power { exponent: 1.0 });
/// assert_eq!(values, [0.25, 1.0]);
/// ```
pub fn adjust_for_bias(values: &mut [f64], k: usize, bias: &ValueBias) {
    if k == 0 {
        return;
    }
    let values = &mut values[..k];

    let shift = if bias.is_shift_invariant() {
        values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    } else {
        0.0
    };
    let shift = if shift.is_finite() { shift } else { 0.0 };

    let mut total = 0.0;
    for v in values.iter_mut() {
        total += bias.shifted_weight(*v, shift);
        *v = total;
    }

    if total > 0.0 && total.is_finite() {
        for v in values.iter_mut() {
            *v /= total;
        }
    } else {
        for (i, v) in values.iter_mut().enumerate() {
            *v = (i + 1) as f64 / k as f64;
        }
    }
    values[k - 1] = 1.0;
}
