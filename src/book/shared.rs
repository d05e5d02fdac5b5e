//! Thread-safe handle to an address book.
//!
//! Every operation takes the single lock for its whole duration; there is no
//! finer-grained locking.

use super::AddressBook;
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::{PhoneOutcome, Record, UpcomingBirthday};
use chrono::NaiveDate;
use std::sync::{Arc, RwLock};

/// A cloneable, lock-guarded [`AddressBook`].
///
/// Clones share the same underlying book.
#[derive(Debug, Clone, Default)]
pub struct SharedAddressBook {
    inner: Arc<RwLock<AddressBook>>,
}

impl SharedAddressBook {
    pub fn new(book: AddressBook) -> Self {
        Self {
            inner: Arc::new(RwLock::new(book)),
        }
    }

    pub fn add_record(&self, record: Record) -> AddressBookResult<()> {
        self.write(|book| book.add_record(record))?
    }

    /// Find a record by name, returning a copy of it.
    pub fn find(&self, name: &str) -> AddressBookResult<Option<Record>> {
        self.read(|book| book.find(name).cloned())
    }

    pub fn delete(&self, name: &str) -> AddressBookResult<Record> {
        self.write(|book| book.delete(name))?
    }

    /// Run `f` against the named record while holding the write lock.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::RecordNotFound` if no record has this name.
    pub fn update<T>(
        &self,
        name: &str,
        f: impl FnOnce(&mut Record) -> T,
    ) -> AddressBookResult<T> {
        self.write(|book| {
            book.find_mut(name)
                .map(f)
                .ok_or_else(|| AddressBookError::RecordNotFound(name.to_string()))
        })?
    }

    /// Remove a phone from the named record.
    pub fn remove_phone(&self, name: &str, phone: &str) -> AddressBookResult<PhoneOutcome> {
        self.update(name, |record| record.remove_phone(phone))
    }

    /// Edit a phone on the named record.
    pub fn edit_phone(
        &self,
        name: &str,
        old_phone: &str,
        new_phone: &str,
    ) -> AddressBookResult<PhoneOutcome> {
        Ok(self.update(name, |record| record.edit_phone(old_phone, new_phone))??)
    }

    pub fn get_upcoming_birthdays(
        &self,
        today: NaiveDate,
    ) -> AddressBookResult<Vec<UpcomingBirthday>> {
        self.read(|book| book.get_upcoming_birthdays(today))
    }

    pub fn len(&self) -> AddressBookResult<usize> {
        self.read(AddressBook::len)
    }

    pub fn is_empty(&self) -> AddressBookResult<bool> {
        self.read(AddressBook::is_empty)
    }

    /// A copy of the current contents.
    pub fn snapshot(&self) -> AddressBookResult<AddressBook> {
        self.read(AddressBook::clone)
    }

    fn read<T>(&self, f: impl FnOnce(&AddressBook) -> T) -> AddressBookResult<T> {
        let book = self
            .inner
            .read()
            .map_err(|_| AddressBookError::LockPoisoned)?;
        Ok(f(&*book))
    }

    fn write<T>(&self, f: impl FnOnce(&mut AddressBook) -> T) -> AddressBookResult<T> {
        let mut book = self
            .inner
            .write()
            .map_err(|_| AddressBookError::LockPoisoned)?;
        Ok(f(&mut *book))
    }
}

impl From<AddressBook> for SharedAddressBook {
    fn from(book: AddressBook) -> Self {
        Self::new(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;
    use std::thread;

    fn john() -> Record {
        let mut record = Record::new("John");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record
    }

    #[test]
    fn test_shared_add_find_delete() {
        let shared = SharedAddressBook::default();
        shared.add_record(john()).unwrap();

        assert_eq!(shared.find("John").unwrap(), Some(john()));
        assert!(matches!(
            shared.add_record(john()),
            Err(AddressBookError::DuplicateRecord(_))
        ));

        shared.delete("John").unwrap();
        assert_eq!(shared.find("John").unwrap(), None);
        assert!(matches!(
            shared.delete("John"),
            Err(AddressBookError::RecordNotFound(_))
        ));
    }

    #[test]
    fn test_shared_phone_operations() {
        let shared = SharedAddressBook::default();
        shared.add_record(john()).unwrap();

        assert_eq!(
            shared.remove_phone("John", "2222222222").unwrap(),
            PhoneOutcome::Removed
        );
        assert_eq!(
            shared.edit_phone("John", "1111111111", "3333333333").unwrap(),
            PhoneOutcome::Edited
        );
        assert_eq!(
            shared.edit_phone("John", "3333333333", "bad").unwrap_err(),
            AddressBookError::Validation(ValidationError::PhoneLength("bad".to_string()))
        );
        assert!(matches!(
            shared.remove_phone("Jane", "3333333333"),
            Err(AddressBookError::RecordNotFound(_))
        ));

        let record = shared.find("John").unwrap().unwrap();
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.phones()[0], "3333333333");
    }

    #[test]
    fn test_shared_clones_share_state() {
        let shared = SharedAddressBook::default();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    shared.add_record(Record::new(format!("Contact {}", i))).unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.len().unwrap(), 8);
        assert!(!shared.is_empty().unwrap());
        assert_eq!(shared.snapshot().unwrap().len(), 8);
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let shared = SharedAddressBook::default();
        shared.add_record(john()).unwrap();

        let writer = shared.clone();
        let result = thread::spawn(move || {
            let _guard = writer.inner.write().unwrap();
            panic!("writer panicked while holding the lock");
        })
        .join();
        assert!(result.is_err());

        assert_eq!(shared.find("John"), Err(AddressBookError::LockPoisoned));
        assert_eq!(
            shared.add_record(Record::new("Jane")),
            Err(AddressBookError::LockPoisoned)
        );
        assert_eq!(
            shared.remove_phone("John", "1111111111"),
            Err(AddressBookError::LockPoisoned)
        );
    }

    #[test]
    fn test_shared_upcoming_birthdays() {
        let mut record = Record::new("John");
        record.add_birthday("08.06.1990").unwrap();
        let mut book = AddressBook::new();
        book.add_record(record).unwrap();

        let shared = SharedAddressBook::from(book);
        let today = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap();
        let upcoming = shared.get_upcoming_birthdays(today).unwrap();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].congratulation_date, "10.06.2024");
    }
}
