//! The contact directory.
//!
//! [`AddressBook`] is the single-threaded store; [`SharedAddressBook`] wraps
//! it behind one lock for callers that share it across threads.

mod address_book;
mod shared;

pub use address_book::AddressBook;
pub use shared::SharedAddressBook;
