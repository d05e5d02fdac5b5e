//! Upcoming birthday model returned by the reminder query.

use crate::domain::BIRTHDAY_FORMAT;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A contact whose birthday falls within the reminder window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// Day to send congratulations on, formatted `DD.MM.YYYY`
    pub congratulation_date: String,
}

impl UpcomingBirthday {
    pub fn new(name: impl Into<String>, congratulation_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            congratulation_date: congratulation_date.format(BIRTHDAY_FORMAT).to_string(),
        }
    }

    /// Parse the congratulation date back into a date.
    ///
    /// Returns `None` only if the field was overwritten with something that
    /// is not a `DD.MM.YYYY` date.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.congratulation_date, BIRTHDAY_FORMAT).ok()
    }
}
