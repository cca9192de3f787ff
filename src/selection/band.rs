//! Acceptance-band candidate lists.

use rand::Rng;

/// Collects, in encounter order, every position among the first `k` scores
/// whose value is at least `max - beta * (max - min)`.
///
/// `band` is cleared first; its length afterwards is the band size.
/// `beta = 1` admits everything, `beta = 0` only the maximal scores.
///
/// # Examples
///
/// ```
/// use u_constructive::selection::acceptance_band;
///
/// let values = [0.0, 10.0, 6.0, 4.0];
/// let mut band = Vec::new();
/// acceptance_band(&values, 4, 10.0, 0.5, &mut band);
/// assert_eq!(band, vec![1, 2]);
/// ```
pub fn acceptance_band(values: &[f64], k: usize, max: f64, beta: f64, band: &mut Vec<usize>) {
    band.clear();
    let values = &values[..k];
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let threshold = if beta >= 1.0 {
        min
    } else {
        max - beta * (max - min)
    };
    band.extend(
        values
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v >= threshold)
            .map(|(i, _)| i),
    );
}

/// Builds the acceptance band and returns one of its positions uniformly.
///
/// Falls back to position 0 if nothing qualifies, which only happens when
/// `max` is not the largest of the scores.
pub fn choose_in_band<R: Rng>(
    values: &[f64],
    k: usize,
    max: f64,
    beta: f64,
    band: &mut Vec<usize>,
    rng: &mut R,
) -> usize {
    acceptance_band(values, k, max, beta, band);
    match band.len() {
        0 => 0,
        1 => band[0],
        n => band[rng.random_range(0..n)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SplittableRng;

    fn max_of(values: &[f64]) -> f64 {
        values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    #[test]
    fn test_beta_one_admits_all_in_order() {
        let values = [0.3, 0.1, 0.7, 0.2, 0.15];
        let mut band = Vec::new();
        acceptance_band(&values, 5, max_of(&values), 1.0, &mut band);
        assert_eq!(band, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_beta_zero_admits_only_maxima() {
        let values = [2.0, 9.0, 3.0, 9.0, 1.0];
        let mut band = Vec::new();
        acceptance_band(&values, 5, 9.0, 0.0, &mut band);
        assert_eq!(band, vec![1, 3]);
    }

    #[test]
    fn test_half_band_on_increasing_scores() {
        // threshold = 9 - 0.5 * 9 = 4.5
        let values: Vec<f64> = (0..10).map(f64::from).collect();
        let mut band = Vec::new();
        acceptance_band(&values, 10, 9.0, 0.5, &mut band);
        assert_eq!(band, vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_half_band_on_decreasing_scores() {
        // threshold = 8 - 0.5 * 8 = 4, inclusive
        let values: Vec<f64> = (0..9).rev().map(f64::from).collect();
        let mut band = Vec::new();
        acceptance_band(&values, 9, 8.0, 0.5, &mut band);
        assert_eq!(band, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_half_band_size_on_monotonic_scores() {
        // Scores 0..k in either direction: max = k - 1, min = 0, so the
        // threshold is (k - 1) / 2 and the band holds the k - ceil((k - 1) / 2)
        // = ceil(k / 2) scores at or above it.
        for k in 1..=40usize {
            let up: Vec<f64> = (0..k).map(|i| i as f64).collect();
            let down: Vec<f64> = up.iter().rev().copied().collect();
            let max = (k - 1) as f64;
            let expected = k.div_ceil(2);
            let mut band = Vec::new();

            acceptance_band(&up, k, max, 0.5, &mut band);
            assert_eq!(band.len(), expected, "increasing, k = {k}");
            assert_eq!(band, ((k - expected)..k).collect::<Vec<_>>());

            acceptance_band(&down, k, max, 0.5, &mut band);
            assert_eq!(band.len(), expected, "decreasing, k = {k}");
            assert_eq!(band, (0..expected).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_band_ignores_tail() {
        let values = [1.0, 2.0, 50.0];
        let mut band = Vec::new();
        acceptance_band(&values, 2, 2.0, 1.0, &mut band);
        assert_eq!(band, vec![0, 1]);
    }

    #[test]
    fn test_choice_is_uniform_over_band() {
        let values = [5.0, 0.0, 5.0, 4.0, 0.0];
        let mut band = Vec::new();
        let mut rng = SplittableRng::seed_from_u64(3);
        let mut counts = [0usize; 5];
        for _ in 0..3000 {
            counts[choose_in_band(&values, 5, 5.0, 0.25, &mut band, &mut rng)] += 1;
        }
        assert_eq!(counts[1], 0);
        assert_eq!(counts[4], 0);
        for &c in &[counts[0], counts[2], counts[3]] {
            assert!((c as f64 / 3000.0 - 1.0 / 3.0).abs() < 0.05, "{counts:?}");
        }
    }
}
