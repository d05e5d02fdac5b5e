//! Name value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The identifying name of a contact.
///
/// Names are not validated; any string, including the empty one, is
/// accepted. Once a record is stored in an
/// [`AddressBook`](crate::book::AddressBook) its name is the lookup key and
/// cannot be changed in place.
///
/// # Example
///
/// ```
/// use address_book::domain::Name;
///
/// let name = Name::new("John");
/// assert_eq!(name.as_str(), "John");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Create a new Name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Name {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_accepts_any_string() {
        assert_eq!(Name::new("Jane").as_str(), "Jane");
        assert_eq!(Name::new("").as_str(), "");
    }

    #[test]
    fn test_name_display() {
        let name = Name::from("John Smith");
        assert_eq!(format!("{}", name), "John Smith");
    }

    #[test]
    fn test_name_serializes_as_plain_string() {
        let name = Name::new("John");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"John\"");

        let back: Name = serde_json::from_str("\"John\"").unwrap();
        assert_eq!(back, name);
    }
}
