//! Test fixtures and sample data for integration tests.

use address_book::{AddressBook, Record};
use chrono::NaiveDate;

/// Create a record with the given phones and optional birthday.
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name);
    for phone in phones {
        record
            .add_phone(phone)
            .unwrap_or_else(|e| panic!("fixture phone {} invalid: {}", phone, e));
    }
    if let Some(birthday) = birthday {
        record
            .add_birthday(birthday)
            .unwrap_or_else(|e| panic!("fixture birthday {} invalid: {}", birthday, e));
    }
    record
}

/// An address book holding one record per `(name, birthday)` pair, in order.
#[allow(dead_code)]
pub fn book_with_birthdays(entries: &[(&str, &str)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, birthday) in entries {
        book.add_record(sample_record(name, &[], Some(*birthday)))
            .expect("fixture names are unique");
    }
    book
}

/// Friday 7 June 2024, the reference "today" for birthday tests.
#[allow(dead_code)]
pub fn reference_friday() -> NaiveDate {
    ymd(2024, 6, 7)
}

#[allow(dead_code)]
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}
