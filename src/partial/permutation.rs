//! Partial permutations over `0..n`.

use super::PartialCandidate;
use crate::error::SamplingError;

/// A permutation under construction.
///
/// One backing array holds the committed prefix `[0, size)` followed by the
/// remaining suffix `[size, n)`. Committing remaining position `i` swaps it to
/// the cursor and advances the cursor, so `extend` is O(1) and never
/// allocates. An inverse index answers [`contains`](Self::contains) in O(1).
///
/// # Examples
///
/// ```
/// use u_constructive::partial::{PartialCandidate, PartialPermutation};
///
/// let mut p = PartialPermutation::new(4);
/// p.extend(2).unwrap();
/// assert_eq!(p.get(0).unwrap(), 2);
/// assert_eq!(p.num_extensions(), 3);
/// assert_eq!(p.to_complete(), vec![2, 1, 0, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialPermutation {
    elements: Vec<usize>,
    location: Vec<usize>,
    size: usize,
}

impl PartialPermutation {
    /// Creates an empty partial permutation with remaining `0..n` in natural order.
    pub fn new(n: usize) -> Self {
        Self {
            elements: (0..n).collect(),
            location: (0..n).collect(),
            size: 0,
        }
    }

    /// Whether `element` is already committed.
    pub fn contains(&self, element: usize) -> bool {
        element < self.location.len() && self.location[element] < self.size
    }

    /// Committed prefix as a slice.
    pub fn committed(&self) -> &[usize] {
        &self.elements[..self.size]
    }

    /// Remaining suffix as a slice, in current order.
    pub fn remaining(&self) -> &[usize] {
        &self.elements[self.size..]
    }
}

impl PartialCandidate for PartialPermutation {
    type Element = usize;
    type Candidate = Vec<usize>;

    fn size(&self) -> usize {
        self.size
    }

    fn num_extensions(&self) -> usize {
        self.elements.len() - self.size
    }

    fn complete_length(&self) -> usize {
        self.elements.len()
    }

    fn get(&self, i: usize) -> Result<usize, SamplingError> {
        if i >= self.size {
            return Err(SamplingError::IndexOutOfRange {
                index: i,
                len: self.size,
            });
        }
        Ok(self.elements[i])
    }

    fn get_extension(&self, i: usize) -> Result<usize, SamplingError> {
        let remaining = self.num_extensions();
        if i >= remaining {
            return Err(SamplingError::IndexOutOfRange {
                index: i,
                len: remaining,
            });
        }
        Ok(self.elements[self.size + i])
    }

    fn extend(&mut self, i: usize) -> Result<(), SamplingError> {
        let remaining = self.num_extensions();
        if i >= remaining {
            return Err(SamplingError::IndexOutOfRange {
                index: i,
                len: remaining,
            });
        }
        let from = self.size + i;
        let to = self.size;
        if from != to {
            self.elements.swap(from, to);
            self.location[self.elements[from]] = from;
            self.location[self.elements[to]] = to;
        }
        self.size += 1;
        Ok(())
    }

    fn to_complete(&self) -> Vec<usize> {
        self.elements.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_to_complete_is_identity() {
        let p = PartialPermutation::new(5);
        assert_eq!(p.size(), 0);
        assert_eq!(p.num_extensions(), 5);
        assert!(!p.is_complete());
        assert_eq!(p.to_complete(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_domain() {
        let p = PartialPermutation::new(0);
        assert!(p.is_complete());
        assert_eq!(p.to_complete(), Vec::<usize>::new());
        assert!(p.get_last().is_err());
    }

    #[test]
    fn test_extend_moves_position_not_element() {
        let mut p = PartialPermutation::new(5);
        p.extend(3).unwrap();
        assert_eq!(p.committed(), &[3]);
        assert_eq!(p.remaining(), &[1, 2, 0, 4]);
        p.extend(0).unwrap();
        assert_eq!(p.committed(), &[3, 1]);
        assert_eq!(p.get_last().unwrap(), 1);
        assert_eq!(p.get_extension(1).unwrap(), 0);
    }

    #[test]
    fn test_size_plus_extensions_constant() {
        let mut p = PartialPermutation::new(6);
        for step in 0..6 {
            assert_eq!(p.size() + p.num_extensions(), 6);
            let k = p.num_extensions();
            p.extend((step * 7) % k).unwrap();
        }
        assert!(p.is_complete());
        assert_eq!(p.num_extensions(), 0);
        let mut sorted = p.to_complete();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_contains_tracks_commitments() {
        let mut p = PartialPermutation::new(4);
        assert!(!p.contains(2));
        p.extend(2).unwrap();
        assert!(p.contains(2));
        assert!(!p.contains(0));
        p.extend(1).unwrap();
        assert!(p.contains(p.get(1).unwrap()));
        assert!(!p.contains(99));
    }

    #[test]
    fn test_out_of_range_faults() {
        let mut p = PartialPermutation::new(3);
        assert_eq!(
            p.get(0),
            Err(SamplingError::IndexOutOfRange { index: 0, len: 0 })
        );
        assert!(p.get_extension(3).is_err());
        assert!(p.extend(3).is_err());
        p.extend(0).unwrap();
        assert!(p.get(1).is_err());
        assert!(p.get_extension(2).is_err());
    }

    #[test]
    fn test_to_complete_mid_construction() {
        let mut p = PartialPermutation::new(4);
        p.extend(3).unwrap();
        let c = p.to_complete();
        assert_eq!(c[0], 3);
        assert_eq!(&c[1..], p.remaining());
    }
}
