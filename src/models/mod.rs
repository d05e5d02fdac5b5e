//! Data models for address book entities.
//!
//! This module contains the contact record stored in the address book and
//! the entries produced by the upcoming-birthdays query.

pub mod record;
pub mod upcoming;

pub use record::{PhoneOutcome, Record};
pub use upcoming::UpcomingBirthday;
