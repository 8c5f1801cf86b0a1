//! Generated person record types.
//!
//! These are the output of [`crate::PersonGenerator`]. They serialise with
//! camelCase field names so downstream JSON and CSV exporters can enumerate
//! them field by field.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::temporal::calculate_age;

/// Administrative gender of a generated person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Other.
    Other,
    /// Unknown or not recorded.
    Unknown,
}

impl Gender {
    /// Returns the single-letter code (`M`, `F`, `O`, `U`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Other => "O",
            Self::Unknown => "U",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Gender {
    type Err = GenerationError;

    /// Parses full names or single-letter codes, ignoring case.
    ///
    /// ```
    /// use healthsim_core::Gender;
    ///
    /// assert_eq!("F".parse::<Gender>(), Ok(Gender::Female));
    /// assert_eq!("male".parse::<Gender>(), Ok(Gender::Male));
    /// assert!("robot".parse::<Gender>().is_err());
    /// ```
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Ok(Self::Male),
            "f" | "female" => Ok(Self::Female),
            "o" | "other" => Ok(Self::Other),
            "u" | "unknown" => Ok(Self::Unknown),
            _ => Err(GenerationError::UnknownGender {
                value: value.to_owned(),
            }),
        }
    }
}

/// Given and family name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    /// Given (first) name.
    pub given_name: String,
    /// Family (last) name.
    pub family_name: String,
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.given_name, self.family_name)
    }
}

/// Postal address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// House number and street.
    pub street_address: String,
    /// City name.
    pub city: String,
    /// State or region code.
    pub state: String,
    /// Postal code.
    pub postal_code: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
}

/// Contact details.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    /// Phone number.
    pub phone: String,
    /// Email address.
    pub email: String,
}

/// A generated person.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use healthsim_core::{Gender, Person, PersonName};
///
/// let person = Person {
///     id: "PERSON-1".to_owned(),
///     name: PersonName {
///         given_name: "Ada".to_owned(),
///         family_name: "Lovelace".to_owned(),
///     },
///     gender: Gender::Female,
///     birth_date: NaiveDate::from_ymd_opt(1990, 6, 15).expect("valid date"),
///     address: None,
///     contact: None,
/// };
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 14).expect("valid date");
/// assert_eq!(person.age_on(today), 34);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Unique identifier, `PERSON-<token>` when generated.
    pub id: String,
    /// Person's name.
    pub name: PersonName,
    /// Administrative gender.
    pub gender: Gender,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Postal address, when generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Contact details, when generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,
}

impl Person {
    /// Age in completed years on `as_of`.
    #[must_use]
    pub fn age_on(&self, as_of: NaiveDate) -> i32 {
        calculate_age(self.birth_date, as_of)
    }

    /// Age in completed years as of today's local date.
    #[must_use]
    pub fn age(&self) -> i32 {
        self.age_on(chrono::Local::now().date_naive())
    }
}
