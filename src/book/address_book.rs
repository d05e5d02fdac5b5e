//! In-memory contact directory keyed by contact name.

use crate::error::{AddressBookError, AddressBookResult};
use crate::models::{Record, UpcomingBirthday};
use crate::services::BirthdayScheduler;
use chrono::{Local, NaiveDate};
use std::collections::HashMap;
use tracing::debug;

/// A collection of contact records with unique names.
///
/// Records are kept in insertion order; iteration and the birthday query
/// both follow that order. Only the operations below mutate the book, so a
/// record's name always matches the key it is stored under.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record under its own name.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::DuplicateRecord` if a record with the same
    /// name is already stored; the book is left unchanged.
    pub fn add_record(&mut self, record: Record) -> AddressBookResult<()> {
        let key = record.name().as_str().to_string();

        if self.records.contains_key(&key) {
            return Err(AddressBookError::DuplicateRecord(key));
        }

        debug!(name = %key, "Adding record");
        self.order.push(key.clone());
        self.records.insert(key, record);
        Ok(())
    }

    /// Find a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Find a record by name for editing its phones or birthday.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record by name, returning it.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::RecordNotFound` if no record has this name.
    pub fn delete(&mut self, name: &str) -> AddressBookResult<Record> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| AddressBookError::RecordNotFound(name.to_string()))?;

        self.order.retain(|key| key != name);
        debug!(name, "Deleted record");
        Ok(record)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Contacts to congratulate within the next seven days, in insertion order.
    ///
    /// A birthday is re-anchored onto `today`'s year and kept if it is 0 to 7
    /// days away; weekend dates are moved to the following Monday.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_with(BirthdayScheduler::default(), today)
    }

    /// Same as [`get_upcoming_birthdays`](Self::get_upcoming_birthdays) with
    /// an inclusive window of `window_days` days.
    pub fn get_upcoming_birthdays_within(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        self.upcoming_with(BirthdayScheduler::new(window_days), today)
    }

    /// Upcoming birthdays as seen from the local calendar date.
    pub fn upcoming_birthdays_from_today(
        &self,
        scheduler: BirthdayScheduler,
    ) -> Vec<UpcomingBirthday> {
        self.upcoming_with(scheduler, Local::now().date_naive())
    }

    fn upcoming_with(
        &self,
        scheduler: BirthdayScheduler,
        today: NaiveDate,
    ) -> Vec<UpcomingBirthday> {
        let upcoming: Vec<UpcomingBirthday> = self
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let date = scheduler.congratulation_date(birthday.date(), today)?;
                Some(UpcomingBirthday::new(record.name().as_str(), date))
            })
            .collect();

        debug!(
            %today,
            window_days = scheduler.window_days(),
            count = upcoming.len(),
            "Computed upcoming birthdays"
        );
        upcoming
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = Box<dyn Iterator<Item = &'a Record> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
