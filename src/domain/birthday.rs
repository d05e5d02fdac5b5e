//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The `chrono` pattern birthdays are parsed from and rendered with.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// `chrono` alone accepts unpadded fields ("1.6.2024"), so the shape is
/// checked up front.
static BIRTHDAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("valid birthday regex"));

/// A calendar date of birth, without time of day or timezone.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::new("08.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "08.06.1990");
/// assert!(Birthday::new("31.02.2024").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from a `DD.MM.YYYY` string.
    ///
    /// Day and month must be zero-padded to two digits and the year must
    /// have four digits.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::BirthdayFormat` if the string has the wrong
    /// shape or names a date that does not exist.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref();

        if !BIRTHDAY_SHAPE.is_match(value) {
            return Err(ValidationError::BirthdayFormat(value.to_string()));
        }

        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .ok()
            // Year 0000 parses but is not a calendar year
            .filter(|date| date.year() >= 1)
            .map(Self)
            .ok_or_else(|| ValidationError::BirthdayFormat(value.to_string()))
    }

    /// Wrap an already valid date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The underlying date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

// Serde support - serialize in the same DD.MM.YYYY form it is parsed from
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
