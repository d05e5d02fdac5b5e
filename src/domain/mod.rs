//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the attributes of a contact:
//! its name, phone numbers and birthday. Phones and birthdays are validated
//! at construction time so an invalid value can never end up in a record.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::{Phone, PHONE_LENGTH};
