use crate::ResolveError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR, MONTH_NAMES,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::str::FromStr;

/// One of the twelve months of the Gregorian calendar.
///
/// Variants are numbered 1-12 (January = 1, December = 12). The canonical
/// name of a month is its lowercase English identifier, which is also the
/// form used for `Display` and serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    /// Construct from a month number (1 = January ... 12 = December).
    ///
    /// Returns `None` if the value is out of range.
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::January),
            2 => Some(Self::February),
            3 => Some(Self::March),
            4 => Some(Self::April),
            5 => Some(Self::May),
            6 => Some(Self::June),
            7 => Some(Self::July),
            8 => Some(Self::August),
            9 => Some(Self::September),
            10 => Some(Self::October),
            11 => Some(Self::November),
            12 => Some(Self::December),
            _ => None,
        }
    }

    /// Returns the 1-based month number.
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the canonical lowercase name (`"january"`, ..., `"december"`).
    #[inline]
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self as usize]
    }

    /// Number of days in this month.
    ///
    /// February is 29 when a year is supplied and that year is a leap year;
    /// without a year it defaults to 28. All other months ignore the year.
    pub const fn days(self, year: Option<Year>) -> u8 {
        match year {
            Some(y) => days_in_month(y.get(), self as u8),
            None => DAYS_IN_MONTH[self as usize],
        }
    }
}

impl FromStr for Month {
    type Err = ResolveError;

    /// Parses a month from its full English name, ignoring case and
    /// surrounding whitespace. Abbreviations are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        MONTH_NAMES
            .iter()
            .position(|name| *name == normalized && !normalized.is_empty())
            .and_then(|n| Self::from_number(n as u8))
            .ok_or_else(|| ResolveError::InvalidMonth(s.trim().to_owned()))
    }
}

impl TryFrom<u8> for Month {
    type Error = ResolveError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value).ok_or_else(|| ResolveError::InvalidMonth(value.to_string()))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month as Self
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for Month {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ResolveError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ResolveError> {
        let non_zero =
            NonZeroU16::new(value).ok_or_else(|| ResolveError::InvalidYear(value.to_string()))?;
        if value > MAX_YEAR {
            return Err(ResolveError::InvalidYear(value.to_string()));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether this year is a Gregorian leap year.
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.0.get())
    }
}

impl FromStr for Year {
    type Err = ResolveError;

    /// Parses a year from integer text. Non-numeric or out-of-range input
    /// is `ResolveError::InvalidYear`; no default is substituted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<u16>()
            .map_err(|_| ResolveError::InvalidYear(trimmed.to_owned()))?;
        Self::new(value)
    }
}

impl TryFrom<u16> for Year {
    type Error = ResolveError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
