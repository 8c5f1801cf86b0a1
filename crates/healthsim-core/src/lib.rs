//! Reproducible synthetic person generation for the HealthSim product family.
//!
//! This crate provides the shared generation foundations that downstream
//! products build their domain-specific generators on.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - A seeded random source with reset and child-seed derivation
//! - Weighted, normal, and uniform distributions drawing from an explicit
//!   random source
//! - A base generator with unique identifiers and convenience sampling
//! - Person generation with demographic reference tables
//! - A validation sink, a `Validator` trait, and person coherence checks
//! - Named seed registries loaded from JSON for batch (cohort) generation
//!
//! Identical seeds and identical call sequences produce identical records.
//! Identifier tokens are the one deliberate exception: they come from an
//! injected [`IdProvider`] rather than the seeded stream.
//!
//! # Example
//!
//! ```
//! use healthsim_core::{Gender, PersonGenerator, PersonOptions};
//!
//! let mut generator = PersonGenerator::new(42);
//! let person = generator
//!     .generate_person(&PersonOptions::default().with_gender(Gender::Female))
//!     .expect("valid options");
//!
//! assert!(person.id.starts_with("PERSON-"));
//! assert_eq!(person.gender, Gender::Female);
//! assert_eq!(person.address.as_ref().map(|a| a.country.as_str()), Some("US"));
//! ```

mod cohort;
mod distributions;
mod error;
mod generator;
mod ids;
mod person;
mod person_generator;
pub mod reference;
mod registry;
mod seed_manager;
mod temporal;
mod validation;

pub use cohort::generate_cohort;
pub use distributions::{
    BoundedSampling, BoundsFallback, DEFAULT_MAX_BOUNDED_ATTEMPTS, NormalDistribution,
    UniformDistribution, WeightedChoice, ephemeral_rng,
};
pub use error::{GenerationError, RegistryError};
pub use generator::BaseGenerator;
pub use ids::{IdProvider, SequentialIdProvider, UuidIdProvider};
pub use person::{Address, ContactInfo, Gender, Person, PersonName};
pub use person_generator::{PERSON_ID_PREFIX, PersonGenerator, PersonOptions};
pub use registry::{SeedDefinition, SeedRegistry};
pub use seed_manager::SeedManager;
pub use temporal::{birth_date_window, calculate_age, random_date_in_range};
pub use validation::{
    MAX_PLAUSIBLE_AGE, PersonValidator, ValidationIssue, ValidationResult, ValidationSeverity,
    Validator, validate_person,
};
