//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Field, Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Result of a phone removal or edit that did not fail validation.
///
/// A missing phone is a routine outcome, not an error, so callers decide
/// how to report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneOutcome {
    /// The phone was removed from the record
    Removed,
    /// The phone was replaced in place
    Edited,
    /// No matching phone was found; the record is unchanged
    NotFound,
}

impl PhoneOutcome {
    /// Returns true if the record was changed
    pub fn is_applied(&self) -> bool {
        !matches!(self, PhoneOutcome::NotFound)
    }
}

/// A contact: a required name, any number of phones and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Name of the contact, also its key in the address book
    name: Name,

    /// Phone numbers in insertion order (duplicates allowed)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    /// Date of birth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. Duplicates are kept.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `phone`, keeping the order of the rest.
    pub fn remove_phone(&mut self, phone: &str) -> PhoneOutcome {
        match self.phones.iter().position(|p| p == phone) {
            Some(index) => {
                self.phones.remove(index);
                debug!(contact = %self.name, phone, "Removed phone");
                PhoneOutcome::Removed
            }
            None => {
                debug!(contact = %self.name, phone, "Phone to remove not found");
                PhoneOutcome::NotFound
            }
        }
    }

    /// Replace `old_phone` with `new_phone`.
    ///
    /// Only the first phone of the record is compared against `old_phone`;
    /// a match further down the list is reported as
    /// [`PhoneOutcome::NotFound`]. This differs from
    /// [`remove_phone`](Self::remove_phone), which scans every phone.
    ///
    /// # Errors
    ///
    /// Returns the validation error for an invalid `new_phone`, leaving the
    /// existing phone untouched.
    pub fn edit_phone(
        &mut self,
        old_phone: &str,
        new_phone: &str,
    ) -> Result<PhoneOutcome, ValidationError> {
        let Some(first) = self.phones.first_mut() else {
            return Ok(PhoneOutcome::NotFound);
        };

        if first.as_str() != old_phone {
            debug!(contact = %self.name, old_phone, "Phone to edit not found");
            return Ok(PhoneOutcome::NotFound);
        }

        *first = Phone::new(new_phone)?;
        debug!(contact = %self.name, old_phone, new_phone, "Edited phone");
        Ok(PhoneOutcome::Edited)
    }

    /// Look up a phone anywhere in the record.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| *p == phone)
    }

    /// Parse and set the birthday, overwriting any previous one.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        let birthday = Birthday::new(birthday)?;
        debug!(contact = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// All attributes of the record: name, then phones, then birthday.
    pub fn fields(&self) -> Vec<Field> {
        std::iter::once(Field::from(self.name.clone()))
            .chain(self.phones.iter().cloned().map(Field::from))
            .chain(self.birthday.map(Field::from))
            .collect()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )
    }
}
