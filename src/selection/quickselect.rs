//! Randomized rank selection.

use rand::Rng;
use std::cmp::Ordering;

/// Order used to rank choices: higher score first, lower position among ties.
#[inline]
fn precedes(values: &[f64], a: usize, b: usize) -> bool {
    match values[b].total_cmp(&values[a]) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => a < b,
    }
}

/// Finds the position among the first `k` scores that holds 0-based `rank`
/// when scores are sorted in descending order.
///
/// Ties are ranked by ascending position, so the answer is fully determined
/// by `values`; `rng` only drives pivot choice and affects running time,
/// which is expected O(k). `index` is scratch space and is overwritten.
///
/// # Examples
///
/// ```
/// use u_constructive::random::SplittableRng;
/// use u_constructive::selection::randomized_select;
///
/// let values = [4.0, 9.0, 1.0, 9.0];
/// let mut index = Vec::new();
/// let mut rng = SplittableRng::seed_from_u64(0);
/// assert_eq!(randomized_select(&mut index, &values, 4, 0, &mut rng), 1);
/// assert_eq!(randomized_select(&mut index, &values, 4, 1, &mut rng), 3);
/// assert_eq!(randomized_select(&mut index, &values, 4, 3, &mut rng), 2);
/// ```
pub fn randomized_select<R: Rng>(
    index: &mut Vec<usize>,
    values: &[f64],
    k: usize,
    rank: usize,
    rng: &mut R,
) -> usize {
    debug_assert!(rank < k, "rank {rank} out of range for {k} choices");
    index.clear();
    index.extend(0..k);
    let rank = rank.min(k.saturating_sub(1));

    let mut lo = 0;
    let mut hi = k.saturating_sub(1);
    while lo < hi {
        let pivot = rng.random_range(lo..=hi);
        let p = partition(index, values, lo, hi, pivot);
        match rank.cmp(&p) {
            Ordering::Equal => return index[p],
            Ordering::Less => hi = p - 1,
            Ordering::Greater => lo = p + 1,
        }
    }
    index[lo]
}

/// Lomuto partition of `index[lo..=hi]` around `index[pivot]`.
///
/// Returns the pivot's final slot; everything before it precedes the pivot.
fn partition(index: &mut [usize], values: &[f64], lo: usize, hi: usize, pivot: usize) -> usize {
    index.swap(pivot, hi);
    let pivot_id = index[hi];
    let mut store = lo;
    for i in lo..hi {
        if precedes(values, index[i], pivot_id) {
            index.swap(i, store);
            store += 1;
        }
    }
    index.swap(store, hi);
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SplittableRng;
    use proptest::prelude::*;

    fn sorted_positions(values: &[f64]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..values.len()).collect();
        order.sort_by(|&a, &b| values[b].total_cmp(&values[a]).then(a.cmp(&b)));
        order
    }

    #[test]
    fn test_every_rank_located() {
        let values = [3.5, -1.0, 8.25, 0.0, 7.0, 2.0];
        let expected = sorted_positions(&values);
        let mut rng = SplittableRng::seed_from_u64(11);
        let mut index = Vec::new();
        for (rank, &position) in expected.iter().enumerate() {
            assert_eq!(
                randomized_select(&mut index, &values, values.len(), rank, &mut rng),
                position
            );
        }
    }

    #[test]
    fn test_ties_break_by_position() {
        let values = [5.0, 5.0, 5.0, 1.0];
        let mut rng = SplittableRng::seed_from_u64(2);
        let mut index = Vec::new();
        let picks: Vec<usize> = (0..4)
            .map(|r| randomized_select(&mut index, &values, 4, r, &mut rng))
            .collect();
        assert_eq!(picks, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_only_first_k_considered() {
        let values = [1.0, 2.0, 3.0, 100.0];
        let mut rng = SplittableRng::seed_from_u64(5);
        let mut index = Vec::new();
        assert_eq!(randomized_select(&mut index, &values, 3, 0, &mut rng), 2);
    }

    #[test]
    fn test_single_choice() {
        let mut rng = SplittableRng::seed_from_u64(0);
        let mut index = vec![9, 9, 9];
        assert_eq!(randomized_select(&mut index, &[0.5], 1, 0, &mut rng), 0);
    }

    proptest! {
        #[test]
        fn prop_result_independent_of_seed(
            values in proptest::collection::vec(-1000i32..1000, 1..60),
            seed_a in any::<u64>(),
            seed_b in any::<u64>(),
            rank_frac in 0.0f64..1.0,
        ) {
            let values: Vec<f64> = values.into_iter().map(f64::from).collect();
            let k = values.len();
            let rank = ((rank_frac * k as f64) as usize).min(k - 1);
            let mut a = SplittableRng::seed_from_u64(seed_a);
            let mut b = SplittableRng::seed_from_u64(seed_b);
            let mut index = Vec::new();
            let pa = randomized_select(&mut index, &values, k, rank, &mut a);
            let pb = randomized_select(&mut index, &values, k, rank, &mut b);
            prop_assert_eq!(pa, pb);
            prop_assert_eq!(pa, sorted_positions(&values)[rank]);
        }
    }
}
