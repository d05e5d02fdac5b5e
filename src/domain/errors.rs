//! Domain validation errors.

use std::fmt;

/// Errors that can occur while constructing domain value objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The phone number is not exactly ten characters long.
    PhoneLength(String),

    /// The phone number contains something other than ASCII digits.
    PhoneNotNumeric(String),

    /// The birthday is not a real calendar date in `DD.MM.YYYY` form.
    BirthdayFormat(String),
}

impl ValidationError {
    /// True for the phone-number variants.
    pub fn is_phone_error(&self) -> bool {
        matches!(self, Self::PhoneLength(_) | Self::PhoneNotNumeric(_))
    }

    /// True when a date string was rejected.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::BirthdayFormat(_))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PhoneLength(phone) => write!(
                f,
                "Phone number must be a string of 10 digits, got: {}",
                phone
            ),
            Self::PhoneNotNumeric(phone) => {
                write!(f, "Phone number must contain only digits, got: {}", phone)
            }
            Self::BirthdayFormat(value) => {
                write!(f, "Invalid date format. Use DD.MM.YYYY, got: {}", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
