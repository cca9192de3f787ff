//! Splittable random number generation.
//!
//! Samplers that run side by side must never draw correlated sequences.
//! [`SplittableRng`] is a ChaCha8 keystream generator: every split copy keeps
//! the 256-bit key of its family and receives a fresh 64-bit stream id, so
//! copies read disjoint keystreams no matter how many times they are split.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counter-based generator whose [`split`](SplittableRng::split) yields
/// independent streams.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_constructive::random::SplittableRng;
///
/// let mut a = SplittableRng::seed_from_u64(7);
/// let mut b = a.split();
/// assert_ne!(a.stream(), b.stream());
/// let _: f64 = a.random();
/// let _: f64 = b.random();
/// ```
#[derive(Debug)]
pub struct SplittableRng {
    inner: ChaCha8Rng,
    next_stream: Arc<AtomicU64>,
}

impl SplittableRng {
    /// Creates the root generator of a family from a 64-bit seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            next_stream: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Returns a generator on a stream no other member of the family uses.
    pub fn split(&self) -> Self {
        let stream = self.next_stream.fetch_add(1, Ordering::Relaxed);
        let mut inner = ChaCha8Rng::from_seed(self.inner.get_seed());
        inner.set_stream(stream);
        Self {
            inner,
            next_stream: Arc::clone(&self.next_stream),
        }
    }

    /// Stream id of this generator. The root of a family uses stream 0.
    pub fn stream(&self) -> u64 {
        self.inner.get_stream()
    }
}

impl RngCore for SplittableRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.inner.fill_bytes(dst)
    }
}

/// Creates a generator from an optional seed, drawing one at random when absent.
pub fn create_rng(seed: Option<u64>) -> SplittableRng {
    match seed {
        Some(seed) => SplittableRng::seed_from_u64(seed),
        None => SplittableRng::seed_from_u64(rand::random()),
    }
}
