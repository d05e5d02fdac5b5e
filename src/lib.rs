//! Address Book - an in-memory contact directory with birthday reminders.
//!
//! Contacts carry a name, any number of validated ten-digit phone numbers and
//! an optional birthday. The directory answers which contacts should be
//! congratulated within the next week, moving weekend birthdays to Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: Contact records and upcoming-birthday entries
//! - **book**: The address book and its thread-safe wrapper
//! - **services**: Birthday scheduling arithmetic
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **observability**: Logging setup
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, Record};
//! use chrono::NaiveDate;
//!
//! let mut john = Record::new("John");
//! john.add_phone("1234567890").unwrap();
//! john.add_birthday("08.06.1990").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(john).unwrap();
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap();
//! let upcoming = book.get_upcoming_birthdays(today);
//! assert_eq!(upcoming[0].congratulation_date, "10.06.2024");
//! ```

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod services;

pub use book::{AddressBook, SharedAddressBook};
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{AddressBookError, AddressBookResult, ConfigError};
pub use models::{PhoneOutcome, Record, UpcomingBirthday};
pub use services::BirthdayScheduler;
