//! Seeded random source shared by every generator.
//!
//! A [`SeedManager`] owns one ChaCha8 stream. Two managers built from the same
//! seed and driven through the same sequence of calls produce the same
//! values, and [`SeedManager::reset`] replays the sequence from the start.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::GenerationError;

/// Owner of a reproducible random stream.
///
/// # Example
///
/// ```
/// use healthsim_core::SeedManager;
///
/// let mut seeds = SeedManager::new(42);
/// let first = seeds.random_int(1, 100).expect("valid range");
/// seeds.reset();
/// assert_eq!(seeds.random_int(1, 100).expect("valid range"), first);
/// ```
#[derive(Debug, Clone)]
pub struct SeedManager {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SeedManager {
    /// Creates a manager whose stream is fully determined by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        debug!(seed, "seed manager created");
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a manager with a seed drawn from OS entropy.
    ///
    /// The chosen seed is recorded and available through [`Self::seed`], so
    /// a run can still be replayed if the seed is logged or stored.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Returns the seed this manager was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Rewinds the stream to the start of the sequence.
    pub fn reset(&mut self) {
        debug!(seed = self.seed, "seed manager reset");
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
    }

    /// Borrows the managed stream for use with distributions.
    pub const fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Draws an integer in `lo..=hi`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidRange`] when `lo > hi`.
    pub fn random_int(&mut self, lo: i64, hi: i64) -> Result<i64, GenerationError> {
        if lo > hi {
            return Err(GenerationError::invalid_range(lo, hi));
        }
        Ok(self.rng.random_range(lo..=hi))
    }

    /// Draws a real value between `lo` and `hi`.
    #[expect(clippy::float_arithmetic, reason = "affine map of a unit draw")]
    pub fn random_float(&mut self, lo: f64, hi: f64) -> f64 {
        let unit: f64 = self.rng.random();
        lo + (hi - lo) * unit
    }

    /// Picks one element uniformly.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::EmptyOptions`] for an empty slice.
    pub fn random_choice<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, GenerationError> {
        items
            .choose(&mut self.rng)
            .ok_or(GenerationError::EmptyOptions)
    }

    /// Picks `k` distinct elements without replacement.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidCount`] when `k` is zero and
    /// [`GenerationError::SampleTooLarge`] when `k` exceeds the number of
    /// items.
    pub fn random_sample<T: Clone>(
        &mut self,
        items: &[T],
        k: usize,
    ) -> Result<Vec<T>, GenerationError> {
        if k == 0 {
            return Err(GenerationError::InvalidCount { requested: k });
        }
        if k > items.len() {
            return Err(GenerationError::SampleTooLarge {
                requested: k,
                available: items.len(),
            });
        }
        Ok(items.choose_multiple(&mut self.rng, k).cloned().collect())
    }

    /// Returns `true` with the given probability.
    ///
    /// A probability of exactly `1.0` always yields `true` and `0.0` always
    /// yields `false`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidProbability`] when `probability` is
    /// outside `[0, 1]` or NaN.
    pub fn random_bool(&mut self, probability: f64) -> Result<bool, GenerationError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GenerationError::InvalidProbability { probability });
        }
        Ok(self.rng.random_bool(probability))
    }

    /// Derives a seed for a sub-generator from the current stream position.
    ///
    /// This consumes one draw, advancing the stream exactly like any other
    /// call. Managers with the same seed and call history derive the same
    /// child seed.
    pub fn child_seed(&mut self) -> u64 {
        let child: u64 = self.rng.random();
        debug!(parent = self.seed, child, "derived child seed");
        child
    }

    /// Builds an independent manager seeded with [`Self::child_seed`].
    pub fn child(&mut self) -> Self {
        Self::new(self.child_seed())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn draws(seeds: &mut SeedManager) -> Vec<i64> {
        (0..5)
            .map(|_| seeds.random_int(1, 100).expect("valid range"))
            .collect()
    }

    #[test]
    fn keeps_the_seed() {
        assert_eq!(SeedManager::new(42).seed(), 42);
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        assert_eq!(
            draws(&mut SeedManager::new(42)),
            draws(&mut SeedManager::new(42))
        );
    }

    #[test]
    fn different_seeds_give_different_sequences() {
        assert_ne!(
            draws(&mut SeedManager::new(42)),
            draws(&mut SeedManager::new(123))
        );
    }

    #[test]
    fn reset_replays_sequence() {
        let mut seeds = SeedManager::new(42);
        let first = draws(&mut seeds);
        seeds.reset();
        assert_eq!(draws(&mut seeds), first);
    }

    #[test]
    fn entropy_seed_is_replayable() {
        let mut original = SeedManager::from_entropy();
        let mut replay = SeedManager::new(original.seed());
        assert_eq!(draws(&mut original), draws(&mut replay));
    }

    #[test]
    fn random_int_rejects_inverted_range() {
        let mut seeds = SeedManager::new(1);
        assert_eq!(
            seeds.random_int(10, 1),
            Err(GenerationError::invalid_range(10, 1))
        );
    }

    #[test]
    fn random_int_accepts_single_value_range() {
        let mut seeds = SeedManager::new(1);
        assert_eq!(seeds.random_int(7, 7), Ok(7));
    }

    #[test]
    fn random_float_stays_in_range() {
        let mut seeds = SeedManager::new(9);
        for _ in 0..1000 {
            let value = seeds.random_float(0.0, 1.0);
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn random_choice_picks_member() {
        let mut seeds = SeedManager::new(42);
        let options = ["a", "b", "c", "d"];
        let picked = seeds.random_choice(&options).expect("non-empty");
        assert!(options.contains(picked));
    }

    #[test]
    fn random_choice_rejects_empty() {
        let mut seeds = SeedManager::new(42);
        let empty: [u8; 0] = [];
        assert_eq!(
            seeds.random_choice(&empty),
            Err(GenerationError::EmptyOptions)
        );
    }

    #[test]
    fn random_sample_is_distinct_subset() {
        let mut seeds = SeedManager::new(42);
        let options: Vec<u32> = (1..=10).collect();
        let mut sample = seeds.random_sample(&options, 3).expect("k within bounds");
        assert_eq!(sample.len(), 3);
        assert!(sample.iter().all(|s| options.contains(s)));
        sample.sort_unstable();
        sample.dedup();
        assert_eq!(sample.len(), 3);
    }

    #[test]
    fn random_sample_rejects_oversized_request() {
        let mut seeds = SeedManager::new(42);
        assert_eq!(
            seeds.random_sample(&[1, 2], 3),
            Err(GenerationError::SampleTooLarge {
                requested: 3,
                available: 2
            })
        );
    }

    #[test]
    fn random_sample_rejects_zero_count() {
        let mut seeds = SeedManager::new(42);
        assert_eq!(
            seeds.random_sample(&[1, 2], 0),
            Err(GenerationError::InvalidCount { requested: 0 })
        );
    }

    #[test]
    fn random_bool_respects_certain_probabilities() {
        let mut seeds = SeedManager::new(42);
        for _ in 0..1000 {
            assert_eq!(seeds.random_bool(1.0), Ok(true));
            assert_eq!(seeds.random_bool(0.0), Ok(false));
        }
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.1)]
    #[case(f64::NAN)]
    fn random_bool_rejects_invalid_probability(#[case] probability: f64) {
        let mut seeds = SeedManager::new(42);
        assert!(matches!(
            seeds.random_bool(probability),
            Err(GenerationError::InvalidProbability { .. })
        ));
    }

    #[test]
    fn child_seed_is_deterministic_after_reset() {
        let mut seeds = SeedManager::new(42);
        let first = seeds.child_seed();
        seeds.reset();
        assert_eq!(seeds.child_seed(), first);
    }

    #[test]
    fn child_seed_depends_on_history() {
        let mut left = SeedManager::new(42);
        let mut right = SeedManager::new(42);
        let _ = draws(&mut left);
        let _ = draws(&mut right);
        assert_eq!(left.child_seed(), right.child_seed());

        let mut fresh = SeedManager::new(42);
        let mut advanced = SeedManager::new(42);
        let _ = advanced.random_float(0.0, 1.0);
        assert_ne!(fresh.child_seed(), advanced.child_seed());
    }

    #[test]
    fn child_seed_advances_parent() {
        let mut plain = SeedManager::new(5);
        let mut forked = SeedManager::new(5);
        let _ = forked.child_seed();
        assert_ne!(draws(&mut plain), draws(&mut forked));
    }

    #[test]
    fn child_manager_does_not_touch_parent_after_creation() {
        let mut parent = SeedManager::new(5);
        let mut child = parent.child();
        let mut reference = SeedManager::new(5);
        let _ = reference.child_seed();

        let _ = draws(&mut child);
        assert_eq!(draws(&mut parent), draws(&mut reference));
    }
}
