//! Named cohort seeds loaded from JSON.
//!
//! A registry document pins each cohort to a seed, a head count, and the
//! demographic options used for every person in it:
//!
//! ```json
//! {
//!   "version": 1,
//!   "seeds": [
//!     {"name": "seniors", "seed": 7, "personCount": 25, "ageRange": [65, 80], "gender": "F"}
//!   ]
//! }
//! ```
//!
//! Documents are checked in full on load, so a [`SeedDefinition`] obtained
//! from a registry is always usable by [`crate::generate_cohort`]. Reading
//! the document is left to the caller.

use std::collections::HashSet;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::RegistryError;
use crate::person::Gender;
use crate::person_generator::PersonOptions;

/// Only document version understood by this crate.
const REGISTRY_VERSION: u32 = 1;

/// Validated set of cohort definitions with unique names.
///
/// # Example
///
/// ```
/// use healthsim_core::SeedRegistry;
///
/// let registry: SeedRegistry = r#"{
///     "version": 1,
///     "seeds": [{"name": "adults", "seed": 42, "personCount": 5, "ageRange": [25, 35]}]
/// }"#
/// .parse()
/// .expect("valid registry");
///
/// let adults = registry.find_seed("adults").expect("present");
/// assert_eq!(adults.options().age_range, Some((25, 35)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRegistry {
    version: u32,
    seeds: Vec<SeedDefinition>,
}

impl SeedRegistry {
    /// Parses and validates a registry document.
    ///
    /// # Errors
    ///
    /// [`RegistryError::ParseError`] for malformed JSON or a missing field,
    /// then the first schema violation found: version, empty list,
    /// repeated name, inverted age range, or unknown gender.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        serde_json::from_str::<RawSeedRegistry>(json)
            .map_err(|err| RegistryError::ParseError {
                message: err.to_string(),
            })?
            .try_into()
    }

    /// Document version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Definitions in document order.
    #[must_use]
    pub fn seeds(&self) -> &[SeedDefinition] {
        &self.seeds
    }

    /// Looks up a definition by its exact name.
    ///
    /// # Errors
    ///
    /// [`RegistryError::SeedNotFound`] when no definition carries `name`.
    pub fn find_seed(&self, name: &str) -> Result<&SeedDefinition, RegistryError> {
        match self.seeds.iter().find(|def| def.name == name) {
            Some(def) => Ok(def),
            None => Err(RegistryError::SeedNotFound {
                name: name.to_owned(),
            }),
        }
    }
}

impl FromStr for SeedRegistry {
    type Err = RegistryError;

    fn from_str(json: &str) -> Result<Self, Self::Err> {
        Self::from_json(json)
    }
}

impl TryFrom<RawSeedRegistry> for SeedRegistry {
    type Error = RegistryError;

    fn try_from(raw: RawSeedRegistry) -> Result<Self, Self::Error> {
        let RawSeedRegistry { version, seeds } = raw;
        if version != REGISTRY_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                expected: REGISTRY_VERSION,
                actual: version,
            });
        }
        if seeds.is_empty() {
            return Err(RegistryError::EmptySeeds);
        }

        let mut seen = HashSet::with_capacity(seeds.len());
        let mut definitions = Vec::with_capacity(seeds.len());
        for entry in seeds {
            if !seen.insert(entry.name.clone()) {
                return Err(RegistryError::DuplicateSeedName { name: entry.name });
            }
            definitions.push(SeedDefinition::try_from(entry)?);
        }

        Ok(Self {
            version,
            seeds: definitions,
        })
    }
}

/// One named cohort: a seed, a head count, and per-person options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDefinition {
    name: String,
    seed: u64,
    person_count: usize,
    options: PersonOptions,
}

impl SeedDefinition {
    /// Builds a definition in code rather than from a document.
    #[must_use]
    pub const fn new(name: String, seed: u64, person_count: usize, options: PersonOptions) -> Self {
        Self {
            name,
            seed,
            person_count,
            options,
        }
    }

    /// Cohort name, unique within its registry.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Seed for the cohort's generator.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// People in the cohort.
    #[must_use]
    pub const fn person_count(&self) -> usize {
        self.person_count
    }

    /// Options applied to every person in the cohort.
    #[must_use]
    pub const fn options(&self) -> &PersonOptions {
        &self.options
    }
}

impl TryFrom<RawSeedDefinition> for SeedDefinition {
    type Error = RegistryError;

    fn try_from(raw: RawSeedDefinition) -> Result<Self, Self::Error> {
        let RawSeedDefinition {
            name,
            seed,
            person_count,
            age_range: raw_age_range,
            gender: raw_gender,
            include_address,
            include_contact,
        } = raw;

        let age_range = match raw_age_range {
            Some([min, max]) if min > max => {
                return Err(RegistryError::InvalidAgeRange { name, min, max });
            }
            Some([min, max]) => Some((min, max)),
            None => None,
        };
        let gender = match raw_gender {
            Some(code) => match code.parse::<Gender>() {
                Ok(parsed) => Some(parsed),
                Err(_) => return Err(RegistryError::UnknownGender { name, value: code }),
            },
            None => None,
        };

        let defaults = PersonOptions::default();
        let options = PersonOptions {
            age_range,
            gender,
            include_address: include_address.unwrap_or(defaults.include_address),
            include_contact: include_contact.unwrap_or(defaults.include_contact),
        };
        Ok(Self::new(name, seed, person_count, options))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedRegistry {
    version: u32,
    seeds: Vec<RawSeedDefinition>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedDefinition {
    name: String,
    seed: u64,
    person_count: usize,
    #[serde(default)]
    age_range: Option<[u32; 2]>,
    #[serde(default)]
    gender: Option<String>,
    #[serde(default)]
    include_address: Option<bool>,
    #[serde(default)]
    include_contact: Option<bool>,
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    const COHORTS_JSON: &str = r#"{
        "version": 1,
        "seeds": [
            {"name": "adults", "seed": 2026, "personCount": 12},
            {
                "name": "seniors",
                "seed": 1234,
                "personCount": 5,
                "ageRange": [65, 80],
                "gender": "F",
                "includeAddress": false,
                "includeContact": true
            }
        ]
    }"#;

    #[fixture]
    fn registry() -> SeedRegistry {
        SeedRegistry::from_json(COHORTS_JSON).expect("valid registry")
    }

    #[rstest]
    fn keeps_document_order(registry: SeedRegistry) {
        let names: Vec<&str> = registry.seeds().iter().map(SeedDefinition::name).collect();
        assert_eq!(registry.version(), 1);
        assert_eq!(names, ["adults", "seniors"]);
    }

    #[rstest]
    fn omitted_options_fall_back_to_defaults(registry: SeedRegistry) {
        let adults = registry.find_seed("adults").expect("present");
        assert_eq!(adults.options(), &PersonOptions::default());
    }

    #[rstest]
    fn explicit_options_are_applied(registry: SeedRegistry) {
        let seniors = registry.find_seed("seniors").expect("present");

        assert_eq!(seniors.seed(), 1234);
        assert_eq!(seniors.person_count(), 5);
        assert_eq!(
            seniors.options(),
            &PersonOptions::default()
                .with_age_range(65, 80)
                .with_gender(Gender::Female)
                .without_address()
                .with_contact()
        );
    }

    #[test]
    fn parses_through_from_str() {
        let parsed: SeedRegistry = COHORTS_JSON.parse().expect("valid registry");
        let direct = SeedRegistry::from_json(COHORTS_JSON).expect("valid registry");
        assert_eq!(parsed, direct);
    }

    #[rstest]
    #[case::not_json("{{ nope")]
    #[case::no_version(r#"{"seeds": [{"name": "a", "seed": 1, "personCount": 1}]}"#)]
    #[case::one_element_age_range(
        r#"{"version": 1, "seeds": [{"name": "a", "seed": 1, "personCount": 1, "ageRange": [3]}]}"#
    )]
    #[case::negative_count(r#"{"version": 1, "seeds": [{"name": "a", "seed": 1, "personCount": -1}]}"#)]
    fn malformed_documents_are_parse_errors(#[case] json: &str) {
        assert!(matches!(
            SeedRegistry::from_json(json),
            Err(RegistryError::ParseError { .. })
        ));
    }

    #[rstest]
    #[case::future_version(
        r#"{"version": 2, "seeds": [{"name": "a", "seed": 1, "personCount": 1}]}"#,
        RegistryError::UnsupportedVersion { expected: 1, actual: 2 }
    )]
    #[case::no_seeds(r#"{"version": 1, "seeds": []}"#, RegistryError::EmptySeeds)]
    #[case::repeated_name(
        r#"{"version": 1, "seeds": [{"name": "a", "seed": 1, "personCount": 1}, {"name": "a", "seed": 2, "personCount": 1}]}"#,
        RegistryError::DuplicateSeedName { name: "a".to_owned() }
    )]
    #[case::inverted_age_range(
        r#"{"version": 1, "seeds": [{"name": "a", "seed": 1, "personCount": 1, "ageRange": [50, 20]}]}"#,
        RegistryError::InvalidAgeRange { name: "a".to_owned(), min: 50, max: 20 }
    )]
    #[case::unknown_gender(
        r#"{"version": 1, "seeds": [{"name": "a", "seed": 1, "personCount": 1, "gender": "robot"}]}"#,
        RegistryError::UnknownGender { name: "a".to_owned(), value: "robot".to_owned() }
    )]
    fn schema_violations_are_reported(#[case] json: &str, #[case] expected: RegistryError) {
        assert_eq!(SeedRegistry::from_json(json), Err(expected));
    }

    #[rstest]
    fn unknown_name_is_not_found(registry: SeedRegistry) {
        assert_eq!(
            registry.find_seed("juniors"),
            Err(RegistryError::SeedNotFound {
                name: "juniors".to_owned()
            })
        );
    }
}
