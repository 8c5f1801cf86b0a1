//! Base generator shared by concrete record generators.
//!
//! [`BaseGenerator`] pairs a [`SeedManager`] with an [`IdProvider`]. Sampling
//! helpers draw from the managed stream so callers never thread a random
//! source by hand; identifiers come from the provider and stay unique across
//! resets.

use std::fmt;

use crate::distributions::{NormalDistribution, UniformDistribution, WeightedChoice};
use crate::error::GenerationError;
use crate::ids::{IdProvider, UuidIdProvider};
use crate::seed_manager::SeedManager;

/// Seeded sampling plus unique identifier generation.
///
/// # Example
///
/// ```
/// use healthsim_core::BaseGenerator;
///
/// let mut generator = BaseGenerator::new(42);
/// let id = generator.generate_id(Some("ITEM"));
/// assert!(id.starts_with("ITEM-"));
///
/// let roll = generator.random_int(1, 6).expect("valid range");
/// assert!((1..=6).contains(&roll));
/// ```
pub struct BaseGenerator {
    seeds: SeedManager,
    ids: Box<dyn IdProvider>,
}

impl BaseGenerator {
    /// Creates a generator seeded with `seed` and random UUID identifiers.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_id_provider(SeedManager::new(seed), UuidIdProvider)
    }

    /// Creates a generator with an entropy-derived seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_id_provider(SeedManager::from_entropy(), UuidIdProvider)
    }

    /// Creates a generator from an existing manager and token provider.
    #[must_use]
    pub fn with_id_provider(seeds: SeedManager, ids: impl IdProvider + 'static) -> Self {
        Self {
            seeds,
            ids: Box::new(ids),
        }
    }

    /// Returns a unique identifier, optionally prefixed as `PREFIX-token`.
    ///
    /// Tokens do not come from the seeded stream, so they are not replayed
    /// by [`Self::reset`] and do not disturb the sampled sequence.
    pub fn generate_id(&mut self, prefix: Option<&str>) -> String {
        let token = self.ids.next_token();
        match prefix {
            Some(tag) => format!("{tag}-{token}"),
            None => token,
        }
    }

    /// Rewinds the seeded stream. Identifier tokens keep advancing.
    pub fn reset(&mut self) {
        self.seeds.reset();
    }

    /// Returns the seed the stream was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seeds.seed()
    }

    /// Borrows the seed manager.
    #[must_use]
    pub const fn seed_manager(&self) -> &SeedManager {
        &self.seeds
    }

    /// Mutably borrows the seed manager.
    pub const fn seed_manager_mut(&mut self) -> &mut SeedManager {
        &mut self.seeds
    }

    /// Derives a child seed from the current stream position.
    pub fn child_seed(&mut self) -> u64 {
        self.seeds.child_seed()
    }

    /// Picks one element uniformly.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::EmptyOptions`] for an empty slice.
    pub fn random_choice<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, GenerationError> {
        self.seeds.random_choice(items)
    }

    /// Draws an integer in `lo..=hi`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidRange`] when `lo > hi`.
    pub fn random_int(&mut self, lo: i64, hi: i64) -> Result<i64, GenerationError> {
        self.seeds.random_int(lo, hi)
    }

    /// Draws a real value between `lo` and `hi`.
    pub fn random_float(&mut self, lo: f64, hi: f64) -> f64 {
        self.seeds.random_float(lo, hi)
    }

    /// Returns `true` with the given probability.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidProbability`] outside `[0, 1]`.
    pub fn random_bool(&mut self, probability: f64) -> Result<bool, GenerationError> {
        self.seeds.random_bool(probability)
    }

    /// Picks one value from `(value, weight)` pairs proportionally to weight.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::EmptyOptions`] or
    /// [`GenerationError::InvalidWeights`] as [`WeightedChoice::select`] does.
    pub fn weighted_choice<T: Clone>(&mut self, options: &[(T, f64)]) -> Result<T, GenerationError> {
        WeightedChoice::new(options.to_vec())
            .select(self.seeds.rng_mut())
            .cloned()
    }

    /// Draws from `distribution` using the managed stream.
    pub fn sample_normal(&mut self, distribution: &NormalDistribution) -> f64 {
        distribution.sample(self.seeds.rng_mut())
    }

    /// Draws from `distribution` using the managed stream.
    pub fn sample_uniform(&mut self, distribution: &UniformDistribution) -> f64 {
        distribution.sample(self.seeds.rng_mut())
    }
}

impl fmt::Debug for BaseGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseGenerator")
            .field("seeds", &self.seeds)
            .finish_non_exhaustive()
    }
}
