//! Result unit reported by samplers.

use super::types::Cost;

/// An immutable `(candidate, cost, is_optimal)` triple.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionCostPair<C, K: Cost> {
    candidate: C,
    cost: K,
    known_optimal: bool,
}

impl<C, K: Cost> SolutionCostPair<C, K> {
    /// Bundles a candidate with its cost.
    pub fn new(candidate: C, cost: K, known_optimal: bool) -> Self {
        Self {
            candidate,
            cost,
            known_optimal,
        }
    }

    /// The complete candidate.
    pub fn candidate(&self) -> &C {
        &self.candidate
    }

    /// Cost of the candidate.
    pub fn cost(&self) -> K {
        self.cost
    }

    /// Whether the problem confirmed this cost as its known minimum.
    pub fn is_known_optimal(&self) -> bool {
        self.known_optimal
    }

    /// Whether this pair strictly beats `other`.
    pub fn improves_on(&self, other: &Self) -> bool {
        self.cost < other.cost
    }

    /// Consumes the pair, returning the candidate.
    pub fn into_candidate(self) -> C {
        self.candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let pair = SolutionCostPair::new(vec![2, 0, 1], 7i64, false);
        assert_eq!(pair.candidate(), &vec![2, 0, 1]);
        assert_eq!(pair.cost(), 7);
        assert!(!pair.is_known_optimal());
        assert_eq!(pair.into_candidate(), vec![2, 0, 1]);
    }

    #[test]
    fn test_improves_on_is_strict() {
        let a = SolutionCostPair::new((), 3.0, false);
        let b = SolutionCostPair::new((), 3.0, false);
        let c = SolutionCostPair::new((), 2.5, false);
        assert!(!a.improves_on(&b));
        assert!(c.improves_on(&a));
        assert!(!a.improves_on(&c));
    }
}
