//! Reproducible synthetic person generation.
//!
//! A [`PersonGenerator`] composes a [`BaseGenerator`], the distributions, and
//! the demographic reference tables. It holds no state of its own beyond the
//! generator's stream, so the same seed and the same calls always yield the
//! same people (identifiers excepted).

use chrono::NaiveDate;
use fake::Fake;
use fake::faker::address::raw::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::internet::raw::SafeEmail;
use fake::faker::name::raw::LastName;
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::EN;

use crate::error::GenerationError;
use crate::generator::BaseGenerator;
use crate::person::{Address, ContactInfo, Gender, Person, PersonName};
use crate::reference::{
    ADULT_AGE, ADULT_MAX_AGE, ADULT_MIN_AGE, DEFAULT_COUNTRY, GENDER_WEIGHTS, given_names,
};
use crate::temporal::{birth_date_window, random_date_in_range};

/// Identifier prefix for generated people.
pub const PERSON_ID_PREFIX: &str = "PERSON";

/// Per-call options for [`PersonGenerator::generate_person`].
///
/// # Example
///
/// ```
/// use healthsim_core::{Gender, PersonOptions};
///
/// let options = PersonOptions::default()
///     .with_age_range(25, 35)
///     .with_gender(Gender::Female)
///     .without_address();
/// assert_eq!(options.age_range, Some((25, 35)));
/// assert!(!options.include_address);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonOptions {
    /// Inclusive `(min, max)` age in years on the reference date.
    pub age_range: Option<(u32, u32)>,
    /// Fixed gender; sampled from the reference mix when `None`.
    pub gender: Option<Gender>,
    /// Whether to generate an address.
    pub include_address: bool,
    /// Whether to generate contact details.
    pub include_contact: bool,
}

impl Default for PersonOptions {
    fn default() -> Self {
        Self {
            age_range: None,
            gender: None,
            include_address: true,
            include_contact: false,
        }
    }
}

impl PersonOptions {
    /// Restricts ages to `min..=max`.
    #[must_use]
    pub const fn with_age_range(mut self, min: u32, max: u32) -> Self {
        self.age_range = Some((min, max));
        self
    }

    /// Fixes the gender.
    #[must_use]
    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Skips address generation.
    #[must_use]
    pub const fn without_address(mut self) -> Self {
        self.include_address = false;
        self
    }

    /// Adds contact details.
    #[must_use]
    pub const fn with_contact(mut self) -> Self {
        self.include_contact = true;
        self
    }
}

/// Generator of complete person records.
///
/// # Example
///
/// ```
/// use healthsim_core::{PersonGenerator, PersonOptions};
///
/// let options = PersonOptions::default().with_age_range(25, 35);
/// let first = PersonGenerator::new(42).generate_person(&options).expect("valid options");
/// let second = PersonGenerator::new(42).generate_person(&options).expect("valid options");
///
/// assert_eq!(first.name, second.name);
/// assert_eq!(first.birth_date, second.birth_date);
/// assert!((25..=35).contains(&first.age()));
/// ```
#[derive(Debug)]
pub struct PersonGenerator {
    base: BaseGenerator,
    reference_date: Option<NaiveDate>,
}

impl PersonGenerator {
    /// Creates a generator seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_base(BaseGenerator::new(seed))
    }

    /// Creates a generator with an entropy-derived seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_base(BaseGenerator::from_entropy())
    }

    /// Wraps an existing base generator.
    #[must_use]
    pub const fn from_base(base: BaseGenerator) -> Self {
        Self {
            base,
            reference_date: None,
        }
    }

    /// Computes ages against `date` instead of today's local date.
    #[must_use]
    pub const fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Date that ages are computed against.
    #[must_use]
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Borrows the underlying base generator.
    #[must_use]
    pub const fn base(&self) -> &BaseGenerator {
        &self.base
    }

    /// Mutably borrows the underlying base generator.
    pub const fn base_mut(&mut self) -> &mut BaseGenerator {
        &mut self.base
    }

    /// Rewinds the seeded stream.
    pub fn reset(&mut self) {
        self.base.reset();
    }

    /// Generates one person.
    ///
    /// Draw order is fixed: gender, birth date, name, address, contact. The
    /// identifier is assigned last and does not consume seeded draws.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidAgeRange`] when the age range is
    /// inverted or yields no representable birth dates. The range is checked
    /// before anything is drawn.
    pub fn generate_person(&mut self, options: &PersonOptions) -> Result<Person, GenerationError> {
        let as_of = self.reference_date();
        let requested_window = options
            .age_range
            .map(|(min, max)| birth_date_window(as_of, min, max))
            .transpose()?;

        let gender = match options.gender {
            Some(fixed) => fixed,
            None => self.base.weighted_choice(&GENDER_WEIGHTS)?,
        };

        let (earliest, latest) = match requested_window {
            Some(window) => window,
            None => {
                let age = self.sample_adult_age();
                birth_date_window(as_of, age, age)?
            }
        };
        let birth_date =
            random_date_in_range(earliest, latest, self.base.seed_manager_mut().rng_mut())?;

        let name = self.generate_name(gender)?;
        let address = options
            .include_address
            .then(|| self.generate_address());
        let contact = options
            .include_contact
            .then(|| self.generate_contact());

        Ok(Person {
            id: self.base.generate_id(Some(PERSON_ID_PREFIX)),
            name,
            gender,
            birth_date,
            address,
            contact,
        })
    }

    /// Generates a name conditioned on `gender`.
    ///
    /// # Errors
    ///
    /// Propagates weighted selection failures from the reference tables.
    pub fn generate_name(&mut self, gender: Gender) -> Result<PersonName, GenerationError> {
        let given_name = self.base.weighted_choice(&given_names(gender))?;
        let family_name: String =
            LastName(EN).fake_with_rng(self.base.seed_manager_mut().rng_mut());
        Ok(PersonName {
            given_name: given_name.to_owned(),
            family_name,
        })
    }

    /// Generates a street address in the default country.
    pub fn generate_address(&mut self) -> Address {
        let rng = self.base.seed_manager_mut().rng_mut();
        let number: String = BuildingNumber(EN).fake_with_rng(rng);
        let street: String = StreetName(EN).fake_with_rng(rng);
        Address {
            street_address: format!("{number} {street}"),
            city: CityName(EN).fake_with_rng(rng),
            state: StateAbbr(EN).fake_with_rng(rng),
            postal_code: ZipCode(EN).fake_with_rng(rng),
            country: DEFAULT_COUNTRY.to_owned(),
        }
    }

    /// Generates a phone number and email address.
    pub fn generate_contact(&mut self) -> ContactInfo {
        let rng = self.base.seed_manager_mut().rng_mut();
        ContactInfo {
            phone: PhoneNumber(EN).fake_with_rng(rng),
            email: SafeEmail(EN).fake_with_rng(rng),
        }
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "age is bounded to the adult range before the cast"
    )]
    fn sample_adult_age(&mut self) -> u32 {
        let age = ADULT_AGE.sample_bounded(
            Some(f64::from(ADULT_MIN_AGE)),
            Some(f64::from(ADULT_MAX_AGE)),
            self.base.seed_manager_mut().rng_mut(),
        );
        (age.floor() as u32).clamp(ADULT_MIN_AGE, ADULT_MAX_AGE)
    }
}
