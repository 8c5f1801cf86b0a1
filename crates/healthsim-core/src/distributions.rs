//! Statistical distributions for data generation.
//!
//! Every sampler here is an immutable parameter set. Sampling always draws
//! from a random source supplied by the caller, so reproducibility is decided
//! by whoever owns that source (normally a [`crate::SeedManager`]). The one
//! non-reproducible convenience is [`ephemeral_rng`].
#![expect(
    clippy::float_arithmetic,
    reason = "distribution sampling is floating-point by nature"
)]

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::GenerationError;

/// `2^63`, the first float past `i64::MAX`.
const I64_CEILING: f64 = 9_223_372_036_854_775_808.0;

/// Default number of draws bounded sampling makes before falling back.
pub const DEFAULT_MAX_BOUNDED_ATTEMPTS: usize = 1000;

/// Builds a random source seeded from OS entropy.
///
/// Output drawn from this source cannot be replayed. Use it only where
/// reproducibility genuinely does not matter; everything else should draw
/// from a [`crate::SeedManager`].
///
/// # Example
///
/// ```
/// use healthsim_core::{UniformDistribution, ephemeral_rng};
///
/// let dice = UniformDistribution::new(1.0, 6.0);
/// let roll = dice.sample_int(&mut ephemeral_rng()).expect("non-empty range");
/// assert!((1..=6).contains(&roll));
/// ```
#[must_use]
pub fn ephemeral_rng() -> ChaCha8Rng {
    ChaCha8Rng::from_rng(&mut rand::rng())
}

/// Weighted random selection from an ordered list of options.
///
/// Each option carries a non-negative weight; an option is drawn with
/// probability proportional to its weight.
///
/// # Example
///
/// ```
/// use healthsim_core::{SeedManager, WeightedChoice};
///
/// let rarity = WeightedChoice::new(vec![("common", 0.7), ("uncommon", 0.2), ("rare", 0.1)]);
/// let mut seeds = SeedManager::new(42);
/// let picked = rarity.select(seeds.rng_mut()).expect("options present");
/// assert!(["common", "uncommon", "rare"].contains(picked));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedChoice<T> {
    options: Vec<(T, f64)>,
}

impl<T> WeightedChoice<T> {
    /// Creates a weighted choice over `(value, weight)` pairs.
    #[must_use]
    pub const fn new(options: Vec<(T, f64)>) -> Self {
        Self { options }
    }

    /// Returns the `(value, weight)` pairs in their original order.
    #[must_use]
    pub fn options(&self) -> &[(T, f64)] {
        &self.options
    }

    /// Returns the number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns `true` when there is nothing to choose from.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Draws one value with probability proportional to its weight.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::EmptyOptions`] when there are no options and
    /// [`GenerationError::InvalidWeights`] when the weights are negative,
    /// non-finite, or all zero.
    pub fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&T, GenerationError> {
        let index = self.index_over(0..self.options.len())?;
        self.value_at(index.sample(rng))
    }

    /// Draws `count` values.
    ///
    /// With `unique == false` every draw is independent and uses the full
    /// weight table. With `unique == true` the draws are sequential and
    /// without replacement: each chosen option leaves the pool before the
    /// next draw. The result is a weight-biased permutation prefix rather
    /// than a uniformly random combination, so heavier options tend to appear
    /// earlier and more often.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::EmptyOptions`] for an empty option list,
    /// [`GenerationError::InvalidCount`] when `count` is zero,
    /// [`GenerationError::SampleTooLarge`] when `unique` is set and `count`
    /// exceeds the number of options, and [`GenerationError::InvalidWeights`]
    /// when the remaining weights cannot be sampled.
    pub fn select_multiple<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
        unique: bool,
    ) -> Result<Vec<&T>, GenerationError> {
        let full = self.index_over(0..self.options.len())?;
        if count == 0 {
            return Err(GenerationError::InvalidCount { requested: count });
        }

        if !unique {
            return (0..count)
                .map(|_| self.value_at(full.sample(rng)))
                .collect();
        }

        if count > self.options.len() {
            return Err(GenerationError::SampleTooLarge {
                requested: count,
                available: self.options.len(),
            });
        }

        let mut pool: Vec<usize> = (0..self.options.len()).collect();
        let mut selected = Vec::with_capacity(count);
        for _ in 0..count {
            let index = self.index_over(pool.iter().copied())?;
            let picked = pool.remove(index.sample(rng));
            selected.push(self.value_at(picked)?);
        }
        Ok(selected)
    }

    fn index_over(
        &self,
        positions: impl IntoIterator<Item = usize>,
    ) -> Result<WeightedIndex<f64>, GenerationError> {
        if self.options.is_empty() {
            return Err(GenerationError::EmptyOptions);
        }
        let weights = positions
            .into_iter()
            .filter_map(|i| self.options.get(i).map(|(_, weight)| *weight));
        WeightedIndex::new(weights).map_err(|e| GenerationError::InvalidWeights {
            message: e.to_string(),
        })
    }

    fn value_at(&self, index: usize) -> Result<&T, GenerationError> {
        self.options
            .get(index)
            .map(|(value, _)| value)
            .ok_or(GenerationError::EmptyOptions)
    }
}

impl<T> FromIterator<(T, f64)> for WeightedChoice<T> {
    fn from_iter<I: IntoIterator<Item = (T, f64)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// What bounded sampling does once its attempts run out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsFallback {
    /// Draw once more and clamp the value into range.
    #[default]
    Clamp,
    /// Return [`GenerationError::BoundsExhausted`].
    Fail,
    /// Return the rejected draw that came closest to the range.
    BestAttempt,
}

/// Rejection sampling policy for [`NormalDistribution::sample_bounded_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundedSampling {
    /// Draws to try before applying the fallback.
    pub max_attempts: usize,
    /// Behaviour once every attempt has been rejected.
    pub fallback: BoundsFallback,
}

impl Default for BoundedSampling {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_BOUNDED_ATTEMPTS,
            fallback: BoundsFallback::Clamp,
        }
    }
}

/// Normal (Gaussian) distribution.
///
/// `std_dev` is expected to be non-negative; it is not validated.
///
/// # Example
///
/// ```
/// use healthsim_core::{NormalDistribution, SeedManager};
///
/// let systolic = NormalDistribution::new(120.0, 15.0);
/// let mut seeds = SeedManager::new(7);
/// let value = systolic.sample_bounded(Some(90.0), Some(160.0), seeds.rng_mut());
/// assert!((90.0..=160.0).contains(&value));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalDistribution {
    /// Mean of the distribution.
    pub mean: f64,
    /// Standard deviation of the distribution.
    pub std_dev: f64,
}

impl NormalDistribution {
    /// Creates a normal distribution.
    #[must_use]
    pub const fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }

    /// Draws a real value.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let z: f64 = rng.sample(StandardNormal);
        self.mean + self.std_dev * z
    }

    /// Draws a value rounded to the nearest integer, ties to even.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "float to int casts saturate and NaN maps to zero"
    )]
    pub fn sample_int<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        self.sample(rng).round_ties_even() as i64
    }

    /// Draws a value inside the optional bounds using the default policy.
    ///
    /// Up to [`DEFAULT_MAX_BOUNDED_ATTEMPTS`] draws are rejected if they fall
    /// outside the bounds. If all of them miss, one more draw is clamped into
    /// range, so this never fails. When the bounds cut deep into the tails
    /// the clamp piles probability mass onto the boundary values.
    pub fn sample_bounded<R: Rng + ?Sized>(
        &self,
        min_val: Option<f64>,
        max_val: Option<f64>,
        rng: &mut R,
    ) -> f64 {
        let mut attempts = 0;
        loop {
            if attempts == DEFAULT_MAX_BOUNDED_ATTEMPTS {
                return self.clamped_fallback(min_val, max_val, attempts, rng);
            }
            attempts += 1;
            let value = self.sample(rng);
            if within(value, min_val, max_val) {
                return value;
            }
        }
    }

    /// Draws a value inside the optional bounds using `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::BoundsExhausted`] only when every attempt
    /// misses and the policy's fallback is [`BoundsFallback::Fail`].
    pub fn sample_bounded_with<R: Rng + ?Sized>(
        &self,
        policy: BoundedSampling,
        min_val: Option<f64>,
        max_val: Option<f64>,
        rng: &mut R,
    ) -> Result<f64, GenerationError> {
        let mut closest: Option<(f64, f64)> = None;
        for _ in 0..policy.max_attempts {
            let value = self.sample(rng);
            if within(value, min_val, max_val) {
                return Ok(value);
            }
            let miss = distance_outside(value, min_val, max_val);
            if closest.is_none_or(|(best, _)| miss < best) {
                closest = Some((miss, value));
            }
        }

        match policy.fallback {
            BoundsFallback::Clamp => {
                Ok(self.clamped_fallback(min_val, max_val, policy.max_attempts, rng))
            }
            BoundsFallback::Fail => Err(GenerationError::BoundsExhausted {
                attempts: policy.max_attempts,
            }),
            BoundsFallback::BestAttempt => Ok(closest.map_or_else(|| self.sample(rng), |(_, v)| v)),
        }
    }

    fn clamped_fallback<R: Rng + ?Sized>(
        &self,
        min_val: Option<f64>,
        max_val: Option<f64>,
        attempts: usize,
        rng: &mut R,
    ) -> f64 {
        warn!(
            mean = self.mean,
            std_dev = self.std_dev,
            ?min_val,
            ?max_val,
            attempts,
            "bounded sampling exhausted its attempts; clamping"
        );
        clamp(self.sample(rng), min_val, max_val)
    }
}

impl Distribution<f64> for NormalDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        Self::sample(self, rng)
    }
}

/// Uniform distribution over `[min_val, max_val]`.
///
/// `min_val <= max_val` is expected; it is not validated for real-valued
/// draws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniformDistribution {
    /// Lower bound, inclusive.
    pub min_val: f64,
    /// Upper bound, inclusive.
    pub max_val: f64,
}

impl UniformDistribution {
    /// Creates a uniform distribution.
    #[must_use]
    pub const fn new(min_val: f64, max_val: f64) -> Self {
        Self { min_val, max_val }
    }

    /// Draws a real value in `[min_val, max_val]`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let unit: f64 = rng.random();
        let value = self.min_val + (self.max_val - self.min_val) * unit;
        if self.min_val <= self.max_val {
            value.clamp(self.min_val, self.max_val)
        } else {
            value
        }
    }

    /// Draws an integer in `[ceil(min_val), floor(max_val)]`.
    ///
    /// Fractional bounds are rounded inwards, so the result never lies
    /// outside `[min_val, max_val]`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidRange`] when no integer lies within
    /// the bounds, a bound is not finite, or a rounded bound does not fit in
    /// an `i64`.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "bounds are integral and checked to fit in i64 before the cast"
    )]
    pub fn sample_int<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<i64, GenerationError> {
        let lo = self.min_val.ceil();
        let hi = self.max_val.floor();
        let representable = |bound: f64| (-I64_CEILING..I64_CEILING).contains(&bound);
        if !representable(lo) || !representable(hi) || lo > hi {
            return Err(GenerationError::invalid_range(self.min_val, self.max_val));
        }
        Ok(rng.random_range(lo as i64..=hi as i64))
    }
}

impl Distribution<f64> for UniformDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        Self::sample(self, rng)
    }
}

fn within(value: f64, min_val: Option<f64>, max_val: Option<f64>) -> bool {
    !min_val.is_some_and(|min| value < min) && !max_val.is_some_and(|max| value > max)
}

fn clamp(value: f64, min_val: Option<f64>, max_val: Option<f64>) -> f64 {
    match (min_val, max_val) {
        (Some(min), _) if value < min => min,
        (_, Some(max)) if value > max => max,
        _ => value,
    }
}

fn distance_outside(value: f64, min_val: Option<f64>, max_val: Option<f64>) -> f64 {
    match (min_val, max_val) {
        (Some(min), _) if value < min => min - value,
        (_, Some(max)) if value > max => value - max,
        _ => 0.0,
    }
}
