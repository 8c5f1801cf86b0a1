//! Error types for the healthsim-core crate.
//!
//! This module defines semantic error enums for sampling, person generation,
//! and seed registry parsing, following the project's error handling
//! conventions with `thiserror`.

use thiserror::Error;

/// Errors raised by sampling primitives and generators.
///
/// Every variant reports a violated precondition at the call that caused it.
/// Bounded normal sampling never produces an error under the default clamp
/// policy; [`GenerationError::BoundsExhausted`] only appears when a caller
/// opts into the failing fallback.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    /// A selection was requested from an empty option set.
    #[error("no options to select from")]
    EmptyOptions,

    /// The option weights cannot form a probability distribution.
    #[error("invalid weights: {message}")]
    InvalidWeights {
        /// Description of the weight problem.
        message: String,
    },

    /// An inclusive range had its lower bound above its upper bound.
    #[error("invalid range: lower bound {lo} exceeds upper bound {hi}")]
    InvalidRange {
        /// Lower bound supplied by the caller.
        lo: String,
        /// Upper bound supplied by the caller.
        hi: String,
    },

    /// A multi-item draw asked for zero items.
    #[error("count must be at least 1, got {requested}")]
    InvalidCount {
        /// Number of items requested.
        requested: usize,
    },

    /// More items were requested than the pool holds.
    #[error("cannot select {requested} unique items from {available} options")]
    SampleTooLarge {
        /// Number of items requested.
        requested: usize,
        /// Number of items available.
        available: usize,
    },

    /// A probability outside `[0, 1]` was supplied.
    #[error("probability must be within [0, 1], got {probability}")]
    InvalidProbability {
        /// The rejected probability.
        probability: f64,
    },

    /// An age range was inverted or produced no representable birth dates.
    #[error("invalid age range: {min}..={max}")]
    InvalidAgeRange {
        /// Minimum age in years.
        min: u32,
        /// Maximum age in years.
        max: u32,
    },

    /// A gender code did not match any known value.
    #[error("unknown gender '{value}'")]
    UnknownGender {
        /// The unrecognised input.
        value: String,
    },

    /// Bounded sampling ran out of attempts under the failing fallback.
    #[error("no sample within bounds after {attempts} attempts")]
    BoundsExhausted {
        /// Number of draws made before giving up.
        attempts: usize,
    },
}

impl GenerationError {
    /// Builds an [`GenerationError::InvalidRange`] from any displayable bounds.
    pub(crate) fn invalid_range(lo: impl ToString, hi: impl ToString) -> Self {
        Self::InvalidRange {
            lo: lo.to_string(),
            hi: hi.to_string(),
        }
    }
}

/// Errors that can occur when parsing or querying a seed registry.
///
/// These errors cover JSON parsing, schema validation, and seed lookup
/// failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry JSON is malformed or missing required fields.
    #[error("invalid registry JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The registry version is not supported.
    #[error("unsupported registry version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the registry.
        actual: u32,
    },

    /// The registry contains no seed definitions.
    #[error("registry contains no seed definitions")]
    EmptySeeds,

    /// Two seed definitions share a name.
    #[error("seed name '{name}' appears more than once")]
    DuplicateSeedName {
        /// The repeated seed name.
        name: String,
    },

    /// A seed definition carries an inverted age range.
    #[error("seed '{name}' has invalid age range {min}..={max}")]
    InvalidAgeRange {
        /// Name of the offending seed.
        name: String,
        /// Minimum age in years.
        min: u32,
        /// Maximum age in years.
        max: u32,
    },

    /// A seed definition names a gender that does not exist.
    #[error("seed '{name}' has unknown gender '{value}'")]
    UnknownGender {
        /// Name of the offending seed.
        name: String,
        /// The unrecognised gender code.
        value: String,
    },

    /// The requested seed name was not found in the registry.
    #[error("seed '{name}' not found in registry")]
    SeedNotFound {
        /// The seed name that was not found.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(GenerationError::EmptyOptions, "no options to select from")]
    #[case(
        GenerationError::invalid_range(10, 3),
        "invalid range: lower bound 10 exceeds upper bound 3"
    )]
    #[case(
        GenerationError::InvalidCount { requested: 0 },
        "count must be at least 1, got 0"
    )]
    #[case(
        GenerationError::SampleTooLarge { requested: 4, available: 3 },
        "cannot select 4 unique items from 3 options"
    )]
    #[case(
        GenerationError::InvalidProbability { probability: 1.5 },
        "probability must be within [0, 1], got 1.5"
    )]
    #[case(
        GenerationError::InvalidAgeRange { min: 40, max: 30 },
        "invalid age range: 40..=30"
    )]
    #[case(
        GenerationError::UnknownGender { value: "x".to_owned() },
        "unknown gender 'x'"
    )]
    #[case(
        GenerationError::BoundsExhausted { attempts: 1000 },
        "no sample within bounds after 1000 attempts"
    )]
    fn generation_error_formats_correctly(#[case] err: GenerationError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn registry_error_parse_formats_correctly() {
        let err = RegistryError::ParseError {
            message: "expected value at line 1 column 1".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid registry JSON: expected value at line 1 column 1"
        );
    }

    #[test]
    fn registry_error_version_formats_correctly() {
        let err = RegistryError::UnsupportedVersion {
            expected: 1,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "unsupported registry version: expected 1, found 2"
        );
    }

    #[test]
    fn registry_error_age_range_formats_correctly() {
        let err = RegistryError::InvalidAgeRange {
            name: "late-bloomers".to_owned(),
            min: 70,
            max: 20,
        };
        assert_eq!(
            err.to_string(),
            "seed 'late-bloomers' has invalid age range 70..=20"
        );
    }

    #[test]
    fn registry_error_seed_not_found_formats_correctly() {
        let err = RegistryError::SeedNotFound {
            name: "mossy-owl".to_owned(),
        };
        assert_eq!(err.to_string(), "seed 'mossy-owl' not found in registry");
    }
}
