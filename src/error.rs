//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Attribute validation failures live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on an address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// A record with this name is already stored
    #[error("Record with name '{0}' already exists")]
    DuplicateRecord(String),

    /// No record is stored under this name
    #[error("Record with name '{0}' not found")]
    RecordNotFound(String),

    /// A phone number or birthday failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A shared address book lock was poisoned by a panicking writer
    #[error("Address book lock poisoned")]
    LockPoisoned,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AddressBookError::DuplicateRecord("John".to_string());
        assert_eq!(err.to_string(), "Record with name 'John' already exists");

        let err = AddressBookError::RecordNotFound("Jane".to_string());
        assert_eq!(err.to_string(), "Record with name 'Jane' not found");

        let err = ConfigError::InvalidValue {
            var: "LOG_LEVEL".to_string(),
            reason: "Cannot be empty".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for LOG_LEVEL: Cannot be empty");
    }

    #[test]
    fn test_validation_error_converts() {
        let err: AddressBookError = ValidationError::PhoneLength("1".to_string()).into();
        assert!(matches!(err, AddressBookError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Phone number must be a string of 10 digits, got: 1"
        );
    }
}
