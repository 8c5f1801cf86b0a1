//! Validation results and generator-side person checks.
//!
//! Products implement [`Validator`] for their own record types and combine
//! the findings with [`ValidationResult::merge`]. The crate itself ships
//! [`PersonValidator`] (also reachable as [`validate_person`]), which checks
//! that a record produced by the generator is internally coherent.
//!
//! # Person rules
//!
//! - `PERSON_001` (error): birth date after the reference date
//! - `PERSON_002` (error): blank given or family name
//! - `PERSON_003` (warning): age above [`MAX_PLAUSIBLE_AGE`]
//! - `PERSON_004` (warning): address country is not a two-letter code

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::person::Person;

/// Oldest age accepted without a warning.
pub const MAX_PLAUSIBLE_AGE: i32 = 120;

/// Severity of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationSeverity {
    /// Must be fixed; makes the result invalid.
    Error,
    /// Should be reviewed.
    Warning,
    /// Informational only.
    Info,
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
        })
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    /// Stable identifier such as `PERSON_001`.
    pub code: String,
    /// Human-readable description.
    pub message: String,
    /// How serious the finding is.
    pub severity: ValidationSeverity,
    /// Dotted path to the offending field, e.g. `person.birthDate`.
    pub field_path: Option<String>,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.code)?;
        if let Some(path) = &self.field_path {
            write!(f, " at {path}")?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Collected findings from one or more checks.
///
/// # Example
///
/// ```
/// use healthsim_core::{ValidationResult, ValidationSeverity};
///
/// let mut result = ValidationResult::default();
/// result.add_issue("DATE_001", "Date is in the future", ValidationSeverity::Error, None);
/// assert!(!result.is_valid());
/// assert_eq!(result.errors().count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Records a finding.
    pub fn add_issue(
        &mut self,
        code: impl Into<String>,
        message: impl Into<String>,
        severity: ValidationSeverity,
        field_path: Option<&str>,
    ) {
        self.issues.push(ValidationIssue {
            code: code.into(),
            message: message.into(),
            severity,
            field_path: field_path.map(str::to_owned),
        });
    }

    /// `true` when no error-level issue has been recorded.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    /// All findings in insertion order.
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Error-level findings.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.with_severity(ValidationSeverity::Error)
    }

    /// Warning-level findings.
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.with_severity(ValidationSeverity::Warning)
    }

    /// Info-level findings.
    pub fn infos(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.with_severity(ValidationSeverity::Info)
    }

    /// Appends every finding from `other`.
    pub fn merge(&mut self, other: Self) {
        self.issues.extend(other.issues);
    }

    fn with_severity(
        &self,
        severity: ValidationSeverity,
    ) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |i| i.severity == severity)
    }
}

/// A check over one kind of record.
///
/// # Example
///
/// ```
/// use healthsim_core::{ValidationResult, ValidationSeverity, Validator};
///
/// struct NonNegativeAge;
///
/// impl Validator<i32> for NonNegativeAge {
///     fn validate(&self, age: &i32) -> ValidationResult {
///         let mut result = ValidationResult::default();
///         if *age < 0 {
///             result.add_issue("AGE_001", "Age cannot be negative", ValidationSeverity::Error, None);
///         }
///         result
///     }
/// }
///
/// assert!(NonNegativeAge.validate(&30).is_valid());
/// assert!(!NonNegativeAge.validate(&-1).is_valid());
/// ```
pub trait Validator<T: ?Sized> {
    /// Returns every finding for `target`.
    fn validate(&self, target: &T) -> ValidationResult;
}

/// Coherence checks for generated people, evaluated as of a fixed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonValidator {
    as_of: NaiveDate,
}

impl PersonValidator {
    /// Creates a validator that computes ages on `as_of`.
    #[must_use]
    pub const fn new(as_of: NaiveDate) -> Self {
        Self { as_of }
    }

    /// Reference date for age and future-date rules.
    #[must_use]
    pub const fn as_of(&self) -> NaiveDate {
        self.as_of
    }
}

impl Validator<Person> for PersonValidator {
    fn validate(&self, person: &Person) -> ValidationResult {
        check_person(person, self.as_of)
    }
}

/// Checks a person record against the rules listed in the module docs.
#[must_use]
pub fn validate_person(person: &Person, as_of: NaiveDate) -> ValidationResult {
    PersonValidator::new(as_of).validate(person)
}

fn check_person(person: &Person, as_of: NaiveDate) -> ValidationResult {
    let mut result = ValidationResult::default();

    if person.birth_date > as_of {
        result.add_issue(
            "PERSON_001",
            format!("birth date {} is after {as_of}", person.birth_date),
            ValidationSeverity::Error,
            Some("person.birthDate"),
        );
    } else if person.age_on(as_of) > MAX_PLAUSIBLE_AGE {
        result.add_issue(
            "PERSON_003",
            format!("age {} exceeds {MAX_PLAUSIBLE_AGE}", person.age_on(as_of)),
            ValidationSeverity::Warning,
            Some("person.birthDate"),
        );
    }

    for (path, value) in [
        ("person.name.givenName", &person.name.given_name),
        ("person.name.familyName", &person.name.family_name),
    ] {
        if value.trim().is_empty() {
            result.add_issue(
                "PERSON_002",
                "name part is blank",
                ValidationSeverity::Error,
                Some(path),
            );
        }
    }

    if let Some(address) = &person.address {
        let country = address.country.as_str();
        if country.len() != 2 || !country.chars().all(|c| c.is_ascii_uppercase()) {
            result.add_issue(
                "PERSON_004",
                format!("country '{country}' is not a two-letter code"),
                ValidationSeverity::Warning,
                Some("person.address.country"),
            );
        }
    }

    result
}
