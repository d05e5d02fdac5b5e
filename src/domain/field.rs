//! A single contact attribute of any kind.

use super::{Birthday, Name, Phone};
use std::fmt;

/// One attribute of a contact record.
///
/// The set of attribute kinds is closed, so this is an enum rather than a
/// trait object. Every variant renders to the same string its inner value
/// does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Name(Name),
    Phone(Phone),
    Birthday(Birthday),
}

impl Field {
    /// Short label for the kind of attribute held.
    pub fn kind(&self) -> &'static str {
        match self {
            Field::Name(_) => "name",
            Field::Phone(_) => "phone",
            Field::Birthday(_) => "birthday",
        }
    }
}

impl From<Name> for Field {
    fn from(name: Name) -> Self {
        Field::Name(name)
    }
}

impl From<Phone> for Field {
    fn from(phone: Phone) -> Self {
        Field::Phone(phone)
    }
}

impl From<Birthday> for Field {
    fn from(birthday: Birthday) -> Self {
        Field::Birthday(birthday)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name(name) => fmt::Display::fmt(name, f),
            Field::Phone(phone) => fmt::Display::fmt(phone, f),
            Field::Birthday(birthday) => fmt::Display::fmt(birthday, f),
        }
    }
}
