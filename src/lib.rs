//! Resolve how many days a named month has.
//!
//! The crate exposes a single pure operation: give it a month name in any
//! mixed case (and optionally a year), and it answers with the month's
//! canonical name and day count. February is 29 days when the supplied year
//! is a Gregorian leap year, and defaults to 28 when no year is given.
//!
//! ```
//! use month_days::{Month, resolve};
//!
//! let result = resolve("  FEBRUARY ", Some("2020".parse()?))?;
//! assert_eq!(result.month, Month::February);
//! assert_eq!(result.day_count, 29);
//! assert!(result.leap_year_applied);
//! # Ok::<(), month_days::ResolveError>(())
//! ```
//!
//! Resolution never reads input devices or writes output; collecting raw
//! text and rendering the answer are the caller's concern.

mod consts;
mod prelude;
mod types;

pub use consts::*;
pub use types::{Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Error type for month resolution.
///
/// Failures carry the offending input so callers can branch on the kind
/// and still report what was actually typed. Nothing is retried or
/// defaulted internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The normalized name matches none of the twelve canonical months.
    #[error("Invalid month: {0:?} (expected a full English month name)")]
    InvalidMonth(String),

    /// The supplied year does not parse as an integer in range.
    #[error("Invalid year: {0:?} (expected an integer 1-{max})", max = MAX_YEAR)]
    InvalidYear(String),
}

/// A single month lookup: a free-form month name and an optional year.
///
/// Queries are plain values passed in explicitly; nothing is read from
/// ambient state. Each query is resolved once and discarded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthQuery {
    /// Free-form month name, matched case-insensitively after trimming.
    pub name: String,
    /// Year to apply the leap-year rule with, if known.
    #[serde(default)]
    pub year: Option<Year>,
}

impl MonthQuery {
    /// Creates a query from an already-validated year.
    pub fn new(name: impl Into<String>, year: Option<Year>) -> Self {
        Self {
            name: name.into(),
            year,
        }
    }

    /// Creates a query from raw text, parsing the year if one was collected.
    ///
    /// # Errors
    /// Returns `ResolveError::InvalidYear` if the year text does not parse.
    pub fn from_raw(name: &str, year: Option<&str>) -> Result<Self, ResolveError> {
        let year = year.map(Year::from_str).transpose()?;
        Ok(Self::new(name, year))
    }

    /// Resolves this query to a day count.
    ///
    /// # Errors
    /// Returns `ResolveError::InvalidMonth` if the name matches none of the
    /// twelve canonical months.
    pub fn resolve(&self) -> Result<MonthResult, ResolveError> {
        resolve(&self.name, self.year)
    }
}

/// The outcome of a successful month lookup.
///
/// `Display` renders the classic answer line, e.g. `"february has 29 days"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display(fmt = "{} has {} days", month, day_count)]
pub struct MonthResult {
    /// The canonical month the input named.
    pub month: Month,
    /// Day count: 28, 29, 30, or 31.
    pub day_count: u8,
    /// True exactly when February resolved to 29 days via the supplied year.
    pub leap_year_applied: bool,
}

/// Resolves a month name, with an optional year for the leap-year rule.
///
/// The name is trimmed and lowercased before matching exactly against the
/// twelve canonical English month names. Without a year, February resolves
/// to 28 days unconditionally.
///
/// # Errors
/// Returns `ResolveError::InvalidMonth` if the name matches no canonical
/// month.
pub fn resolve(name: &str, year: Option<Year>) -> Result<MonthResult, ResolveError> {
    let month: Month = name.parse()?;
    let leap_year_applied = month == Month::February && year.is_some_and(Year::is_leap);
    Ok(MonthResult {
        month,
        day_count: month.days(year),
        leap_year_applied,
    })
}

/// Resolves a month name with the year still in raw text form, as collected
/// from a prompt or form field.
///
/// # Errors
/// Returns `ResolveError::InvalidMonth` for an unrecognized month name, or
/// `ResolveError::InvalidYear` if the year text does not parse as an
/// integer; no default is substituted.
pub fn resolve_raw(name: &str, year: Option<&str>) -> Result<MonthResult, ResolveError> {
    MonthQuery::from_raw(name, year)?.resolve()
}
