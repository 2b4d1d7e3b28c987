//! Calendar arithmetic used to derive signed day offsets from perihelion
//! passages.
//!
//! The ordinal formula here is deliberately NOT a proleptic day count: it
//! multiplies by the current month's length instead of summing the preceding
//! months, and ignores leap days outside the current month. The rendered maps
//! depend on this exact arithmetic, so it stays behind `approximate_ordinal`
//! where a correct calendar could later be swapped in without touching
//! callers.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Earliest year accepted for a target date.
pub const MIN_YEAR: i32 = 1000;

/// A calendar date as entered by the user or stored in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Date {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("month {0} is outside 1..=12")]
    InvalidMonth(u32),
    #[error("invalid date '{0}': expected dd/mm/yyyy with day 1-31, month 1-12, year >= {MIN_YEAR}")]
    InvalidDate(String),
}

impl Date {
    pub fn new(day: u32, month: u32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Parse a `dd/mm/yyyy` string.
    ///
    /// Validation is intentionally loose: the day is bounded by 31 but never
    /// cross-checked against the month's actual length, so `31/02/2025`
    /// passes. This mirrors the accepted behavior of the tool.
    pub fn parse(text: &str) -> Result<Self, CalendarError> {
        let invalid = || CalendarError::InvalidDate(text.to_string());
        let mut parts = text.splitn(3, '/');
        let mut field = || parts.next().ok_or_else(invalid);
        let day: u32 = field()?.trim().parse().map_err(|_| invalid())?;
        let month: u32 = field()?.trim().parse().map_err(|_| invalid())?;
        let year: i32 = field()?.trim().parse().map_err(|_| invalid())?;

        let date = Self { day, month, year };
        date.validate().map_err(|_| invalid())?;
        Ok(date)
    }

    /// Range-check the triple: day 1-31, month 1-12, year at least
    /// [`MIN_YEAR`].
    pub fn validate(&self) -> Result<(), CalendarError> {
        if !(1..=31).contains(&self.day) || !(1..=12).contains(&self.month) || self.year < MIN_YEAR
        {
            return Err(CalendarError::InvalidDate(self.to_string()));
        }
        Ok(())
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

/// Gregorian leap-year rule, century exceptions included.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a month; February follows [`is_leap_year`].
pub fn days_in_month(month: u32, year: i32) -> Result<u32, CalendarError> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 => Ok(if is_leap_year(year) { 29 } else { 28 }),
        other => Err(CalendarError::InvalidMonth(other)),
    }
}

/// Approximate comparable day count for a date.
///
/// `day + (month - 1) * days_in_month(month, year) + year * 365` — kept
/// bit-for-bit compatible with the reference output rather than being a true
/// proleptic ordinal.
pub fn approximate_ordinal(date: Date) -> Result<i64, CalendarError> {
    let month_length = i64::from(days_in_month(date.month, date.year)?);
    Ok(i64::from(date.day)
        + (i64::from(date.month) - 1) * month_length
        + i64::from(date.year) * 365)
}

/// Signed number of days from `reference` to `target` under the approximate
/// ordinal.
pub fn days_since(reference: Date, target: Date) -> Result<i64, CalendarError> {
    Ok(approximate_ordinal(target)? - approximate_ordinal(reference)?)
}
