//! Demographic reference tables.
//!
//! Weights are relative frequencies, not probabilities; they need not sum
//! to one.

use crate::distributions::NormalDistribution;
use crate::person::Gender;

/// Country code stamped on every generated address.
pub const DEFAULT_COUNTRY: &str = "US";

/// Youngest age drawn when no age range is requested.
pub const ADULT_MIN_AGE: u32 = 18;

/// Oldest age drawn when no age range is requested.
pub const ADULT_MAX_AGE: u32 = 90;

/// Age distribution used when no age range is requested.
pub const ADULT_AGE: NormalDistribution = NormalDistribution::new(42.0, 16.0);

/// Gender mix used when no gender is requested.
pub const GENDER_WEIGHTS: [(Gender, f64); 2] = [(Gender::Male, 0.49), (Gender::Female, 0.51)];

pub(crate) const MALE_GIVEN_NAMES: &[(&str, f64)] = &[
    ("James", 3.3),
    ("Robert", 3.1),
    ("John", 3.0),
    ("Michael", 2.9),
    ("David", 2.4),
    ("William", 2.3),
    ("Richard", 1.7),
    ("Joseph", 1.6),
    ("Thomas", 1.5),
    ("Christopher", 1.3),
    ("Charles", 1.3),
    ("Daniel", 1.3),
    ("Matthew", 1.1),
    ("Anthony", 1.0),
    ("Mark", 1.0),
    ("Steven", 0.9),
    ("Andrew", 0.8),
    ("Joshua", 0.8),
    ("Kevin", 0.7),
    ("Brian", 0.7),
    ("Luis", 0.5),
    ("Jose", 0.5),
    ("Wei", 0.3),
    ("Malik", 0.3),
];

pub(crate) const FEMALE_GIVEN_NAMES: &[(&str, f64)] = &[
    ("Mary", 2.6),
    ("Patricia", 1.6),
    ("Jennifer", 1.5),
    ("Linda", 1.4),
    ("Elizabeth", 1.4),
    ("Barbara", 1.3),
    ("Susan", 1.1),
    ("Jessica", 1.0),
    ("Sarah", 1.0),
    ("Karen", 1.0),
    ("Lisa", 0.9),
    ("Nancy", 0.9),
    ("Betty", 0.8),
    ("Sandra", 0.8),
    ("Margaret", 0.8),
    ("Ashley", 0.8),
    ("Emily", 0.7),
    ("Michelle", 0.7),
    ("Maria", 0.6),
    ("Olivia", 0.5),
    ("Ana", 0.4),
    ("Mei", 0.3),
    ("Aaliyah", 0.3),
];

/// Given-name table for `gender`; non-binary and unknown genders draw from
/// both tables.
pub(crate) fn given_names(gender: Gender) -> Vec<(&'static str, f64)> {
    match gender {
        Gender::Male => MALE_GIVEN_NAMES.to_vec(),
        Gender::Female => FEMALE_GIVEN_NAMES.to_vec(),
        Gender::Other | Gender::Unknown => MALE_GIVEN_NAMES
            .iter()
            .chain(FEMALE_GIVEN_NAMES)
            .copied()
            .collect(),
    }
}
