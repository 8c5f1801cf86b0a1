//! Date helpers used by the person generator.

use chrono::{Datelike, Days, Months, NaiveDate};
use rand::Rng;

use crate::error::GenerationError;

/// Completed years between `birth` and `as_of`.
///
/// Someone born on 29 February has their birthday on 1 March in common
/// years. Negative when `birth` is after `as_of`.
///
/// ```
/// use chrono::NaiveDate;
/// use healthsim_core::calculate_age;
///
/// let birth = NaiveDate::from_ymd_opt(2000, 3, 15).expect("valid date");
/// let before = NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date");
/// let on = NaiveDate::from_ymd_opt(2025, 3, 15).expect("valid date");
/// assert_eq!(calculate_age(birth, before), 24);
/// assert_eq!(calculate_age(birth, on), 25);
/// ```
#[must_use]
pub fn calculate_age(birth: NaiveDate, as_of: NaiveDate) -> i32 {
    let years = as_of.year() - birth.year();
    if (as_of.month(), as_of.day()) < (birth.month(), birth.day()) {
        years - 1
    } else {
        years
    }
}

/// Earliest and latest birth dates whose age on `as_of` is within
/// `min_age..=max_age`.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidAgeRange`] when `min_age > max_age` or
/// the window falls outside the representable calendar.
pub fn birth_date_window(
    as_of: NaiveDate,
    min_age: u32,
    max_age: u32,
) -> Result<(NaiveDate, NaiveDate), GenerationError> {
    let invalid = || GenerationError::InvalidAgeRange {
        min: min_age,
        max: max_age,
    };
    if min_age > max_age {
        return Err(invalid());
    }

    let latest = years_before(as_of, min_age).ok_or_else(invalid)?;
    let earliest = max_age
        .checked_add(1)
        .and_then(|years| years_before(as_of, years))
        .and_then(|date| date.checked_add_days(Days::new(1)))
        .ok_or_else(invalid)?;

    if earliest > latest {
        return Err(invalid());
    }
    Ok((earliest, latest))
}

/// Picks a day uniformly from `start..=end`.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidRange`] when `start > end`.
pub fn random_date_in_range<R: Rng + ?Sized>(
    start: NaiveDate,
    end: NaiveDate,
    rng: &mut R,
) -> Result<NaiveDate, GenerationError> {
    if start > end {
        return Err(GenerationError::invalid_range(start, end));
    }
    let span = end.signed_duration_since(start).num_days().unsigned_abs();
    let offset = rng.random_range(0..=span);
    start
        .checked_add_days(Days::new(offset))
        .ok_or_else(|| GenerationError::invalid_range(start, end))
}

fn years_before(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    years
        .checked_mul(12)
        .and_then(|months| date.checked_sub_months(Months::new(months)))
}
