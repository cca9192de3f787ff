//! Shared best-result and cancellation state.
//!
//! One [`ProgressTracker`] is created per search session and handed (behind an
//! `Arc`) to every sampler split from a common ancestor. The best result sits
//! behind a `Mutex` and only changes through
//! [`update`](ProgressTracker::update), which installs a candidate only when
//! it strictly improves on the current best. The "found optimal" and "stop"
//! flags are atomics so every holder sees them without locking.

use crate::problem::{Cost, SolutionCostPair};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

#[derive(Debug)]
struct Best<C, K: Cost> {
    pair: SolutionCostPair<C, K>,
    elapsed: Duration,
}

/// Thread-safe holder of the best result of a search session.
///
/// # Examples
///
/// ```
/// use u_constructive::problem::SolutionCostPair;
/// use u_constructive::tracker::ProgressTracker;
///
/// let tracker = ProgressTracker::new();
/// assert!(tracker.update(&SolutionCostPair::new(vec![1, 0], 5i64, false)));
/// assert!(!tracker.update(&SolutionCostPair::new(vec![0, 1], 5i64, false)));
/// assert_eq!(tracker.best_cost(), Some(5));
/// ```
#[derive(Debug)]
pub struct ProgressTracker<C, K: Cost> {
    best: Mutex<Option<Best<C, K>>>,
    found_best: AtomicBool,
    stopped: AtomicBool,
    started: Instant,
}

impl<C, K: Cost> Default for ProgressTracker<C, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, K: Cost> ProgressTracker<C, K> {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self {
            best: Mutex::new(None),
            found_best: AtomicBool::new(false),
            stopped: AtomicBool::new(false),
            started: Instant::now(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Best<C, K>>> {
        self.best.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Offers `pair` as the new best.
    ///
    /// The pair is installed only if there is no best yet or its cost is
    /// strictly lower. A pair flagged as known-optimal also raises the
    /// found-best flag. Returns whether the pair was installed.
    pub fn update(&self, pair: &SolutionCostPair<C, K>) -> bool
    where
        C: Clone,
    {
        let installed = {
            let mut best = self.lock();
            let improves = best
                .as_ref()
                .is_none_or(|current| pair.improves_on(&current.pair));
            if improves {
                *best = Some(Best {
                    pair: pair.clone(),
                    elapsed: self.started.elapsed(),
                });
            }
            improves
        };
        if pair.is_known_optimal() && !self.found_best.swap(true, Ordering::AcqRel) {
            tracing::debug!(cost = pair.cost().to_f64(), "known optimal cost reached");
        }
        installed
    }

    /// Snapshot of the current best, if any.
    pub fn best(&self) -> Option<SolutionCostPair<C, K>>
    where
        C: Clone,
    {
        self.lock().as_ref().map(|b| b.pair.clone())
    }

    /// Cost of the current best, if any.
    pub fn best_cost(&self) -> Option<K> {
        self.lock().as_ref().map(|b| b.pair.cost())
    }

    /// Time from tracker creation until the current best was installed.
    pub fn elapsed_at_best(&self) -> Option<Duration> {
        self.lock().as_ref().map(|b| b.elapsed)
    }

    /// Whether any result has been installed.
    pub fn contains_results(&self) -> bool {
        self.lock().is_some()
    }

    /// Whether a known-optimal result has been reported.
    pub fn did_find_best(&self) -> bool {
        self.found_best.load(Ordering::Acquire)
    }

    /// Marks the search as having reached a known optimum.
    pub fn set_found_best(&self) {
        self.found_best.store(true, Ordering::Release);
    }

    /// Requests every sampler sharing this tracker to stop before its next run.
    pub fn stop(&self) {
        if !self.stopped.swap(true, Ordering::AcqRel) {
            tracing::debug!("search stop requested");
        }
    }

    /// Whether [`stop`](Self::stop) has been called.
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }

    /// Whether samplers should refuse new work: stopped or optimum found.
    pub fn is_halted(&self) -> bool {
        self.is_stopped() || self.did_find_best()
    }
}
